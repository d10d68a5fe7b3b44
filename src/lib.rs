//! Schema-typed facade over key-value stores.
//!
//! This library adds a compile-time typing layer in front of a host
//! key-value store. A caller declares a schema (a closed list of key
//! shapes paired with value types) and the store's operations (`get`,
//! `set`, `delete`, `list`) statically resolve the value type for each
//! key at the call site. At runtime every operation is a direct
//! pass-through to the host store; the schema compiles away entirely.
//!
//! Key shapes are tuple types: literal segments are zero-sized markers
//! declared with [`key_literal!`], wildcard segments are the primitive
//! types themselves. The tuple type of a concrete key is its abstracted
//! form, so `(Users, 42u64)` matches the declared shape `(Users, u64)`
//! with no runtime work.
//!
//! # Quick Start
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use typed_kv::prelude::*;
//!
//! typed_kv::key_literal! {
//!     pub struct Users = "user";
//! }
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! struct AppSchema;
//!
//! // ["user", <any number>] holds a User
//! impl Schema<(Users, u64)> for AppSchema {
//!     type Value = User;
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let store: TypedStore<MemoryStore, AppSchema> = TypedStore::new(MemoryStore::new());
//!
//! let user = User { id: 1, name: "Ada".into() };
//! store.set((Users, 1u64), &user, SetOptions::default()).await?;
//!
//! // The value type is inferred from the key shape
//! let entry = store.get((Users, 1u64), GetOptions::default()).await?;
//! assert_eq!(entry.value, Some(user));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`key`] - Runtime keys and type-level key shapes
//! - [`schema`] - Schema declaration traits
//! - [`host`] - The host store contract and the in-memory reference host
//! - [`store`] - The typed facade
//!
//! # Feature Flags
//!
//! - `memory` - In-memory reference host store (enabled by default)
//! - `logging` - Library-level tracing (consumers provide their own subscriber)
//! - `full` - Enable all features

pub mod host;
pub mod key;
mod logging;
pub mod prelude;
pub mod schema;
pub mod store;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export the key model at crate root for convenience
pub use key::{KeyPart, KvKey, Segment, TypedKey};

// Re-export schema and facade types at crate root for convenience
pub use host::{
    CommitResult, Consistency, GetOptions, HostStore, ListOptions, ParseVersionstampError,
    RawEntry, RawListEntry, RawSelector, RawValue, SetOptions, Versionstamp,
};
pub use schema::{DynamicSchema, Schema};
pub use store::{Entries, Entry, MaybeEntry, Selector, TypedStore};

#[cfg(feature = "memory")]
pub use host::{MemoryEntries, MemoryError, MemoryStore};
