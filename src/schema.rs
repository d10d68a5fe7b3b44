//! Schema declaration: mapping key shapes to value shapes.
//!
//! A schema is a caller-defined marker type carrying one [`Schema`] impl
//! per declared key shape. The impls form a closed list of
//! (key shape, value shape) associations that the compiler resolves at
//! each call site; nothing about the schema survives to runtime.

use crate::key::TypedKey;

/// One schema entry: keys of shape `K` hold values of type `Self::Value`.
///
/// Key shapes are tuple types of [`Segment`](crate::key::Segment)s, with
/// literal positions pinned by [`key_literal!`](crate::key_literal) markers
/// and wildcard positions left as the primitive types. Because a concrete
/// key like `(Users, 42u64)` has the tuple type `(Users, u64)`, the
/// compiler abstracts wildcard segments to their category for free, and
/// every key literal of a declared shape resolves to exactly one entry.
/// Two entries may share a category-level shape and differ in a literal
/// position; those are distinct tuple types and never collide.
///
/// # Example
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use typed_kv::Schema;
///
/// typed_kv::key_literal! {
///     pub struct Users = "user";
/// }
///
/// #[derive(Debug, Serialize, Deserialize)]
/// pub struct User {
///     pub id: u64,
///     pub name: String,
/// }
///
/// pub struct AppSchema;
///
/// // ["user", <any number>] holds a User
/// impl Schema<(Users, u64)> for AppSchema {
///     type Value = User;
/// }
/// ```
///
/// A `set` with a value that does not conform to the declared shape is
/// rejected at compile time:
///
/// ```compile_fail
/// use serde::{Deserialize, Serialize};
/// use typed_kv::{MemoryStore, Schema, SetOptions, TypedStore};
///
/// typed_kv::key_literal! {
///     pub struct Users = "user";
/// }
///
/// #[derive(Debug, Serialize, Deserialize)]
/// pub struct User {
///     pub id: u64,
///     pub name: String,
/// }
///
/// pub struct AppSchema;
///
/// impl Schema<(Users, u64)> for AppSchema {
///     type Value = User;
/// }
///
/// let store: TypedStore<MemoryStore, AppSchema> = TypedStore::new(MemoryStore::new());
/// // ["user", 7] holds a User, not a String
/// let _ = store.set((Users, 7u64), &"oops".to_string(), SetOptions::default());
/// ```
///
/// So is an operation on a key shape the schema never declared:
///
/// ```compile_fail
/// use typed_kv::{MemoryStore, Schema, TypedStore};
///
/// typed_kv::key_literal! {
///     pub struct Users = "user";
/// }
///
/// pub struct AppSchema;
///
/// impl Schema<(Users, u64)> for AppSchema {
///     type Value = String;
/// }
///
/// let store: TypedStore<MemoryStore, AppSchema> = TypedStore::new(MemoryStore::new());
/// // ["user", <text>] is not a declared shape
/// let _ = store.delete((Users, "alice".to_string()));
/// ```
pub trait Schema<K: TypedKey> {
    /// The value shape stored under keys of shape `K`.
    type Value;
}

/// The empty schema: no declared entries, every key shape allowed.
///
/// All keys resolve to [`serde_json::Value`], the unconstrained fallback
/// for stores used without declarations. It is the default schema
/// parameter of [`TypedStore`](crate::TypedStore).
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicSchema;

impl<K: TypedKey> Schema<K> for DynamicSchema {
    type Value = serde_json::Value;
}
