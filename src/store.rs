//! The typed facade over a host store.
//!
//! [`TypedStore`] narrows the host's four operations against a declared
//! schema. All narrowing happens in the signatures; at runtime every
//! operation lowers its typed key (and selector) to the runtime form,
//! delegates to the host unchanged, and converts the value across the
//! boundary. The facade adds no retries, caching, or ordering of its own.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::host::{
    CommitResult, GetOptions, HostStore, ListOptions, RawListEntry, RawSelector, SetOptions,
    Versionstamp,
};
use crate::key::{KvKey, TypedKey};
use crate::logging::debug;
use crate::schema::{DynamicSchema, Schema};

/// Result of a typed `get`: the entry wrapper with a possibly-absent value.
#[derive(Debug, Clone, PartialEq)]
pub struct MaybeEntry<V> {
    pub key: KvKey,
    pub value: Option<V>,
    pub versionstamp: Option<Versionstamp>,
}

impl<V> MaybeEntry<V> {
    /// Discard the metadata and keep the value, if any.
    pub fn into_value(self) -> Option<V> {
        self.value
    }
}

/// One entry yielded by a typed `list`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V> {
    pub key: KvKey,
    pub value: V,
    pub versionstamp: Versionstamp,
}

/// A typed list selector.
///
/// Mirrors the host's selector forms: a prefix scan, a prefix scan
/// bounded on one side, or a half-open key range. `P` is the shape of
/// the prefix key and `K` the shape of the bounding keys; a prefix is a
/// shorter shape than the keys it covers, so the two are independent.
/// The entry value type of a `list` resolves from `K` (from `P` for a
/// plain prefix scan, where the two coincide).
///
/// Prefer the constructors ([`prefix`](Self::prefix),
/// [`prefix_start`](Self::prefix_start), [`prefix_end`](Self::prefix_end),
/// [`range`](Self::range)); they pin the shape parameters so the
/// unbounded one never has to be spelled out.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector<P, K = P> {
    /// All keys strictly under `prefix`.
    Prefix(P),
    /// Keys under `prefix`, starting at `start` (inclusive).
    PrefixStart { prefix: P, start: K },
    /// Keys under `prefix`, up to `end` (exclusive).
    PrefixEnd { prefix: P, end: K },
    /// Keys in `[start, end)`.
    Range { start: K, end: K },
}

impl<K: TypedKey> Selector<K> {
    /// Select all keys strictly under `prefix`.
    pub fn prefix(prefix: K) -> Self {
        Selector::Prefix(prefix)
    }

    /// Select keys in `[start, end)`.
    pub fn range(start: K, end: K) -> Self {
        Selector::Range { start, end }
    }
}

impl<P: TypedKey, K: TypedKey> Selector<P, K> {
    /// Select keys under `prefix`, starting at `start` (inclusive).
    pub fn prefix_start(prefix: P, start: K) -> Self {
        Selector::PrefixStart { prefix, start }
    }

    /// Select keys under `prefix`, up to `end` (exclusive).
    pub fn prefix_end(prefix: P, end: K) -> Self {
        Selector::PrefixEnd { prefix, end }
    }

    /// Lower to the runtime selector handed to the host.
    pub fn into_raw(self) -> RawSelector {
        match self {
            Selector::Prefix(prefix) => RawSelector {
                prefix: Some(prefix.into_key()),
                ..RawSelector::default()
            },
            Selector::PrefixStart { prefix, start } => RawSelector {
                prefix: Some(prefix.into_key()),
                start: Some(start.into_key()),
                end: None,
            },
            Selector::PrefixEnd { prefix, end } => RawSelector {
                prefix: Some(prefix.into_key()),
                start: None,
                end: Some(end.into_key()),
            },
            Selector::Range { start, end } => RawSelector {
                prefix: None,
                start: Some(start.into_key()),
                end: Some(end.into_key()),
            },
        }
    }
}

/// Lazy sequence of typed entries from a `list`.
///
/// Wraps the host's own entry sequence and decodes each value as it is
/// consumed, so decode failures surface per entry without aborting the
/// scan.
#[derive(Debug)]
pub struct Entries<I, V> {
    inner: I,
    _value: PhantomData<fn() -> V>,
}

impl<I, E, V> Iterator for Entries<I, V>
where
    I: Iterator<Item = std::result::Result<RawListEntry, E>>,
    E: std::error::Error + 'static,
    V: DeserializeOwned,
{
    type Item = std::result::Result<Entry<V>, Error<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = match self.inner.next()? {
            Ok(raw) => raw,
            Err(e) => return Some(Err(Error::Host(e))),
        };
        let RawListEntry {
            key,
            value,
            versionstamp,
        } = raw;
        match serde_json::from_value(value) {
            Ok(value) => Some(Ok(Entry {
                key,
                value,
                versionstamp,
            })),
            Err(source) => Some(Err(Error::Decode { key, source })),
        }
    }
}

/// A schema-typed view of a host store.
///
/// `S` is a schema marker type; each of its [`Schema`] impls admits one
/// key shape and fixes the value type flowing through `get`, `set`,
/// `delete`, and `list` for keys of that shape. The default schema,
/// [`DynamicSchema`], admits every key shape with dynamic values.
///
/// For keys outside the schema (or to override the resolved type), use
/// [`get_with`](Self::get_with) and [`list_with`](Self::list_with).
#[derive(Debug)]
pub struct TypedStore<H, S = DynamicSchema> {
    host: H,
    _schema: PhantomData<fn() -> S>,
}

impl<H, S> TypedStore<H, S>
where
    H: HostStore,
{
    /// Wrap a host store. The schema exists only in the type parameter.
    pub fn new(host: H) -> Self {
        Self {
            host,
            _schema: PhantomData,
        }
    }

    /// The wrapped host store.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Unwrap the host store.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Re-view the same host under a different schema.
    pub fn with_schema<S2>(self) -> TypedStore<H, S2> {
        TypedStore::new(self.host)
    }

    /// Look up `key`, resolving the value type from the schema.
    pub async fn get<K>(
        &self,
        key: K,
        options: GetOptions,
    ) -> Result<MaybeEntry<S::Value>, Error<H::Error>>
    where
        K: TypedKey,
        S: Schema<K>,
        S::Value: DeserializeOwned,
    {
        self.get_with::<S::Value, K>(key, options).await
    }

    /// Look up `key` with a caller-supplied value type.
    ///
    /// Accepts any typed key, declared in the schema or not; this is the
    /// unconstrained fallback for unmatched keys.
    pub async fn get_with<V, K>(
        &self,
        key: K,
        options: GetOptions,
    ) -> Result<MaybeEntry<V>, Error<H::Error>>
    where
        V: DeserializeOwned,
        K: TypedKey,
    {
        let key = key.into_key();
        debug!(key = %key, "get");
        let raw = self.host.get(&key, options).await.map_err(Error::Host)?;
        let value = match raw.value {
            Some(value) => Some(serde_json::from_value(value).map_err(|source| Error::Decode {
                key: raw.key.clone(),
                source,
            })?),
            None => None,
        };
        Ok(MaybeEntry {
            key: raw.key,
            value,
            versionstamp: raw.versionstamp,
        })
    }

    /// Write `value` under `key`. The value must be of the schema-resolved
    /// type for the key's shape; anything else fails to type-check.
    pub async fn set<K>(
        &self,
        key: K,
        value: &S::Value,
        options: SetOptions,
    ) -> Result<CommitResult, Error<H::Error>>
    where
        K: TypedKey,
        S: Schema<K>,
        S::Value: Serialize,
    {
        let key = key.into_key();
        debug!(key = %key, "set");
        let raw = serde_json::to_value(value).map_err(|source| Error::Encode {
            key: key.clone(),
            source,
        })?;
        self.host.set(&key, raw, options).await.map_err(Error::Host)
    }

    /// Remove `key`. Only keys of a declared shape can be deleted.
    pub async fn delete<K>(&self, key: K) -> Result<(), Error<H::Error>>
    where
        K: TypedKey,
        S: Schema<K>,
    {
        let key = key.into_key();
        debug!(key = %key, "delete");
        self.host.delete(&key).await.map_err(Error::Host)
    }

    /// Scan the keys covered by `selector`, resolving the entry value
    /// type from the selector's bounding-key shape.
    pub async fn list<P, K>(
        &self,
        selector: Selector<P, K>,
        options: ListOptions,
    ) -> Result<Entries<H::Entries, S::Value>, Error<H::Error>>
    where
        P: TypedKey,
        K: TypedKey,
        S: Schema<K>,
        S::Value: DeserializeOwned,
    {
        self.list_with::<S::Value, P, K>(selector, options).await
    }

    /// Scan with a caller-supplied entry value type.
    pub async fn list_with<V, P, K>(
        &self,
        selector: Selector<P, K>,
        options: ListOptions,
    ) -> Result<Entries<H::Entries, V>, Error<H::Error>>
    where
        V: DeserializeOwned,
        P: TypedKey,
        K: TypedKey,
    {
        let selector = selector.into_raw();
        debug!(selector = ?selector, "list");
        let inner = self
            .host
            .list(&selector, options)
            .await
            .map_err(Error::Host)?;
        Ok(Entries {
            inner,
            _value: PhantomData,
        })
    }
}
