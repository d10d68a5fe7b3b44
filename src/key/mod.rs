//! Key model: runtime keys and their type-level shapes.
//!
//! Keys exist in two forms. The runtime form ([`KvKey`], a sequence of
//! [`KeyPart`]s) is what crosses the host store boundary. The typed form
//! (tuples implementing [`TypedKey`]) exists only at call sites: its type
//! is the key shape the schema matches against, and it lowers to a
//! [`KvKey`] before delegation.

mod part;
mod typed;

pub use part::{KeyPart, KvKey};
pub use typed::{Segment, TypedKey};
