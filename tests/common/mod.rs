//! Common test utilities and fixtures.
//!
//! Provides the shared schema used across the integration suite and a
//! recording host store for verifying that the facade delegates every
//! call unchanged.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use typed_kv::prelude::*;

// =============================================================================
// Schema Fixture
// =============================================================================

typed_kv::key_literal! {
    /// First segment of all user keys.
    pub struct Users = "user";
    /// First segment of all order keys.
    pub struct Orders = "order";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub handle: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub user_id: u64,
    pub total: u64,
}

pub struct AppSchema;

// ["user"] and ["user", <number>] hold User records
impl Schema<(Users,)> for AppSchema {
    type Value = User;
}

impl Schema<(Users, u64)> for AppSchema {
    type Value = User;
}

// ["user", <text>] holds a Profile (same category-level shape as above,
// different wildcard category, different value type)
impl Schema<(Users, String)> for AppSchema {
    type Value = Profile;
}

// ["order", <user id>, <order id>] holds an Order
impl Schema<(Orders, u64, u64)> for AppSchema {
    type Value = Order;
}

pub fn user(id: u64) -> User {
    User {
        id,
        name: format!("user-{id}"),
    }
}

// =============================================================================
// Recording Host
// =============================================================================

/// One call observed at the host store boundary, arguments as received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get {
        key: KvKey,
        options: GetOptions,
    },
    Set {
        key: KvKey,
        value: RawValue,
        options: SetOptions,
    },
    Delete {
        key: KvKey,
    },
    List {
        selector: RawSelector,
        options: ListOptions,
    },
}

/// A host store that records every call before delegating to a
/// [`MemoryStore`], so tests can assert the facade forwarded arguments
/// unchanged.
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    calls: Mutex<Vec<Call>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls observed so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, call: Call) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
    }
}

impl HostStore for RecordingStore {
    type Error = MemoryError;
    type Entries = MemoryEntries;

    async fn get(&self, key: &KvKey, options: GetOptions) -> std::result::Result<RawEntry, MemoryError> {
        self.record(Call::Get {
            key: key.clone(),
            options,
        });
        self.inner.get(key, options).await
    }

    async fn set(
        &self,
        key: &KvKey,
        value: RawValue,
        options: SetOptions,
    ) -> std::result::Result<CommitResult, MemoryError> {
        self.record(Call::Set {
            key: key.clone(),
            value: value.clone(),
            options,
        });
        self.inner.set(key, value, options).await
    }

    async fn delete(&self, key: &KvKey) -> std::result::Result<(), MemoryError> {
        self.record(Call::Delete { key: key.clone() });
        self.inner.delete(key).await
    }

    async fn list(
        &self,
        selector: &RawSelector,
        options: ListOptions,
    ) -> std::result::Result<MemoryEntries, MemoryError> {
        self.record(Call::List {
            selector: selector.clone(),
            options: options.clone(),
        });
        self.inner.list(selector, options).await
    }
}
