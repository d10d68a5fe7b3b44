//! In-memory reference implementation of the host store contract.
//!
//! `MemoryStore` exists for tests and as an executable description of the
//! behavior the facade expects from a host: echoed keys on misses,
//! monotonic versionstamps, size limits, half-open range scans, and
//! cursor resumption. It holds everything in a `BTreeMap` and persists
//! nothing.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use thiserror::Error;

use crate::key::KvKey;
use crate::logging::trace;

use super::{
    CommitResult, GetOptions, HostStore, ListOptions, RawEntry, RawListEntry, RawSelector,
    RawValue, SetOptions, Versionstamp,
};

/// Largest accepted key, in packed-encoding bytes.
pub const MAX_KEY_SIZE: usize = 2048;

/// Largest accepted value, in serialized bytes.
pub const MAX_VALUE_SIZE: usize = 65536;

/// Errors the in-memory host can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("key is empty")]
    EmptyKey,

    #[error("key too large: {0} bytes (limit 2048)")]
    KeyTooLarge(usize),

    #[error("value too large: {0} bytes (limit 65536)")]
    ValueTooLarge(usize),

    #[error("invalid list cursor: {0}")]
    InvalidCursor(String),
}

#[derive(Debug, Clone)]
struct Stored {
    value: RawValue,
    versionstamp: Versionstamp,
    expires_at: Option<Instant>,
}

impl Stored {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

#[derive(Debug, Default)]
struct Inner {
    entries: BTreeMap<KvKey, Stored>,
    sequence: u64,
}

impl Inner {
    fn purge_expired(&mut self, now: Instant) {
        self.entries.retain(|_, stored| !stored.is_expired(now));
    }
}

/// A `BTreeMap`-backed [`HostStore`].
///
/// Versionstamps increase with every committed write. Entries written
/// with an `expire_in` option are treated as absent once the duration
/// elapses and are dropped from the map on later writes and scans.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-expired) entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        let inner = self.lock();
        inner
            .entries
            .values()
            .filter(|stored| !stored.is_expired(now))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a resumption cursor positioned after `key`.
    ///
    /// Scans treat the cursor as opaque; this is the only way to mint one.
    pub fn cursor_for(key: &KvKey) -> String {
        serde_json::to_string(key).unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_key(key: &KvKey) -> Result<(), MemoryError> {
        if key.is_empty() {
            return Err(MemoryError::EmptyKey);
        }
        let size = key.packed_size();
        if size > MAX_KEY_SIZE {
            return Err(MemoryError::KeyTooLarge(size));
        }
        Ok(())
    }

    fn covered(key: &KvKey, selector: &RawSelector) -> bool {
        if let Some(prefix) = &selector.prefix {
            // The prefix key itself is not part of the scan
            if !key.starts_with(prefix) || key.len() == prefix.len() {
                return false;
            }
        }
        if let Some(start) = &selector.start
            && key < start
        {
            return false;
        }
        if let Some(end) = &selector.end
            && key >= end
        {
            return false;
        }
        true
    }
}

impl HostStore for MemoryStore {
    type Error = MemoryError;
    type Entries = MemoryEntries;

    async fn get(&self, key: &KvKey, _options: GetOptions) -> Result<RawEntry, MemoryError> {
        Self::check_key(key)?;
        let now = Instant::now();
        let inner = self.lock();
        let found = inner
            .entries
            .get(key)
            .filter(|stored| !stored.is_expired(now));
        trace!(key = %key, found = found.is_some(), "memory get");
        Ok(match found {
            Some(stored) => RawEntry {
                key: key.clone(),
                value: Some(stored.value.clone()),
                versionstamp: Some(stored.versionstamp),
            },
            None => RawEntry {
                key: key.clone(),
                value: None,
                versionstamp: None,
            },
        })
    }

    async fn set(
        &self,
        key: &KvKey,
        value: RawValue,
        options: SetOptions,
    ) -> Result<CommitResult, MemoryError> {
        Self::check_key(key)?;
        let size = serde_json::to_vec(&value).map(|bytes| bytes.len()).unwrap_or(0);
        if size > MAX_VALUE_SIZE {
            return Err(MemoryError::ValueTooLarge(size));
        }

        let now = Instant::now();
        let mut inner = self.lock();
        inner.purge_expired(now);
        inner.sequence += 1;
        let versionstamp = Versionstamp::from_sequence(inner.sequence);
        // A duration too large to land on the clock never expires
        let expires_at = options.expire_in.and_then(|d| now.checked_add(d));
        inner.entries.insert(
            key.clone(),
            Stored {
                value,
                versionstamp,
                expires_at,
            },
        );
        trace!(key = %key, versionstamp = %versionstamp, "memory set");
        Ok(CommitResult { versionstamp })
    }

    async fn delete(&self, key: &KvKey) -> Result<(), MemoryError> {
        Self::check_key(key)?;
        let mut inner = self.lock();
        let _removed = inner.entries.remove(key);
        trace!(key = %key, removed = _removed.is_some(), "memory delete");
        Ok(())
    }

    async fn list(
        &self,
        selector: &RawSelector,
        options: ListOptions,
    ) -> Result<MemoryEntries, MemoryError> {
        let after = options
            .cursor
            .as_deref()
            .map(|cursor| {
                serde_json::from_str::<KvKey>(cursor)
                    .map_err(|_| MemoryError::InvalidCursor(cursor.to_string()))
            })
            .transpose()?;

        let now = Instant::now();
        let mut inner = self.lock();
        inner.purge_expired(now);
        let mut matched: Vec<RawListEntry> = inner
            .entries
            .iter()
            .filter(|(key, _)| Self::covered(key, selector))
            .map(|(key, stored)| RawListEntry {
                key: key.clone(),
                value: stored.value.clone(),
                versionstamp: stored.versionstamp,
            })
            .collect();
        drop(inner);

        if options.reverse {
            matched.reverse();
        }
        if let Some(after) = after {
            let descending = options.reverse;
            matched.retain(|entry| {
                if descending {
                    entry.key < after
                } else {
                    entry.key > after
                }
            });
        }
        if let Some(limit) = options.limit {
            matched.truncate(limit);
        }
        trace!(count = matched.len(), "memory list");

        Ok(MemoryEntries {
            entries: matched.into_iter(),
        })
    }
}

/// Entry sequence produced by [`MemoryStore::list`].
#[derive(Debug)]
pub struct MemoryEntries {
    entries: std::vec::IntoIter<RawListEntry>,
}

impl Iterator for MemoryEntries {
    type Item = Result<RawListEntry, MemoryError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}
