//! Convenient re-exports for common usage patterns.
//!
//! # Example
//!
//! ```ignore
//! use typed_kv::prelude::*;
//!
//! let store: TypedStore<MemoryStore, AppSchema> = TypedStore::new(MemoryStore::new());
//! store.set((Users, 1u64), &user, SetOptions::default()).await?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Key model
pub use crate::key::{KeyPart, KvKey, Segment, TypedKey};

// Schema declaration
pub use crate::schema::{DynamicSchema, Schema};

// Host store contract
pub use crate::host::{
    CommitResult, Consistency, GetOptions, HostStore, ListOptions, ParseVersionstampError,
    RawEntry, RawListEntry, RawSelector, RawValue, SetOptions, Versionstamp,
};

// The typed facade
pub use crate::store::{Entries, Entry, MaybeEntry, Selector, TypedStore};

// In-memory reference host (requires "memory" feature)
#[cfg(feature = "memory")]
pub use crate::host::{MemoryEntries, MemoryError, MemoryStore};
