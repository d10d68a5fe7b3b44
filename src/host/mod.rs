//! The host store contract.
//!
//! [`HostStore`] is the external collaborator behind the typed facade: an
//! asynchronous key-value store working on runtime [`KvKey`]s and a
//! dynamic value representation. The facade never alters its semantics;
//! every typed operation lowers its arguments and delegates.

mod version;

#[cfg(feature = "memory")]
mod memory;

#[cfg(feature = "memory")]
pub use memory::{MemoryEntries, MemoryError, MemoryStore, MAX_KEY_SIZE, MAX_VALUE_SIZE};
pub use version::{ParseVersionstampError, Versionstamp};

use std::time::Duration;

use crate::key::KvKey;

/// The host store's native value representation.
pub type RawValue = serde_json::Value;

/// Read consistency requested from the host store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Consistency {
    /// Reads observe all prior committed writes.
    #[default]
    Strong,
    /// Reads may lag behind recent commits.
    Eventual,
}

/// Options for a single `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetOptions {
    pub consistency: Consistency,
}

/// Options for a single `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetOptions {
    /// Time until the host expires the entry, if it supports expiry.
    pub expire_in: Option<Duration>,
}

/// Options for a `list` scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListOptions {
    /// Maximum number of entries to yield.
    pub limit: Option<usize>,
    /// Yield entries in descending key order.
    pub reverse: bool,
    /// Opaque resumption token from a previous scan over the same selector.
    pub cursor: Option<String>,
    /// Hint for how many entries the host fetches per batch.
    pub batch_size: Option<usize>,
    pub consistency: Consistency,
}

/// Runtime form of a list selector: which keys a scan covers.
///
/// A `prefix` covers keys strictly below it (the prefix key itself is not
/// an entry of the scan); `start` is inclusive and `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawSelector {
    pub prefix: Option<KvKey>,
    pub start: Option<KvKey>,
    pub end: Option<KvKey>,
}

/// Result of a `get`: the entry wrapper with a possibly-absent value.
///
/// The key is always echoed back; `value` and `versionstamp` are both
/// present or both absent.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub key: KvKey,
    pub value: Option<RawValue>,
    pub versionstamp: Option<Versionstamp>,
}

/// One entry yielded by a `list` scan; the value is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct RawListEntry {
    pub key: KvKey,
    pub value: RawValue,
    pub versionstamp: Versionstamp,
}

/// Result of a committed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitResult {
    pub versionstamp: Versionstamp,
}

/// An asynchronous key-value store the typed facade can wrap.
///
/// Implementations define their own error type and their own lazy entry
/// sequence for scans. The facade forwards keys, options, and selectors
/// to these methods unchanged.
#[allow(async_fn_in_trait)]
pub trait HostStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Lazy sequence of entries produced by [`list`](Self::list).
    type Entries: Iterator<Item = Result<RawListEntry, Self::Error>>;

    /// Look up a single key, returning the entry wrapper whether or not a
    /// value is present.
    async fn get(&self, key: &KvKey, options: GetOptions) -> Result<RawEntry, Self::Error>;

    /// Write a value under a key, returning the commit's versionstamp.
    async fn set(
        &self,
        key: &KvKey,
        value: RawValue,
        options: SetOptions,
    ) -> Result<CommitResult, Self::Error>;

    /// Remove a key. Removing an absent key is not an error.
    async fn delete(&self, key: &KvKey) -> Result<(), Self::Error>;

    /// Scan the keys covered by `selector` in key order.
    async fn list(
        &self,
        selector: &RawSelector,
        options: ListOptions,
    ) -> Result<Self::Entries, Self::Error>;
}
