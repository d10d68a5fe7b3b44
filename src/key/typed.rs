//! Type-level key shapes.
//!
//! A key shape is a tuple type whose elements implement [`Segment`]. The
//! tuple's type identifies which schema entry governs the key; the tuple's
//! value supplies the concrete segments. Wildcard positions use the
//! primitive types directly (`u64` for "any number", `String` for "any
//! text"), so `(Users, 7u64)` and `(Users, 99u64)` share the shape
//! `(Users, u64)` and resolve to the same schema entry.

use super::part::{KeyPart, KvKey};

/// A type usable as one segment of a typed key.
///
/// Implemented for the text and number primitives (wildcard segments) and
/// for the zero-sized marker types declared with [`key_literal!`](crate::key_literal).
pub trait Segment {
    /// The runtime segment this value contributes to the key.
    fn into_part(self) -> KeyPart;
}

impl Segment for String {
    fn into_part(self) -> KeyPart {
        KeyPart::Text(self)
    }
}

impl Segment for &str {
    fn into_part(self) -> KeyPart {
        KeyPart::Text(self.to_string())
    }
}

impl Segment for u64 {
    fn into_part(self) -> KeyPart {
        KeyPart::Number(self)
    }
}

impl Segment for u32 {
    fn into_part(self) -> KeyPart {
        KeyPart::Number(self.into())
    }
}

impl Segment for u16 {
    fn into_part(self) -> KeyPart {
        KeyPart::Number(self.into())
    }
}

impl Segment for u8 {
    fn into_part(self) -> KeyPart {
        KeyPart::Number(self.into())
    }
}

impl Segment for usize {
    fn into_part(self) -> KeyPart {
        KeyPart::Number(self as u64)
    }
}

/// An ordered tuple of [`Segment`]s convertible into a runtime [`KvKey`].
///
/// Implemented for tuples of arity 1 through 8. Segment order and arity
/// are preserved by the conversion.
pub trait TypedKey {
    fn into_key(self) -> KvKey;
}

macro_rules! impl_typed_key {
    ($(($($seg:ident : $idx:tt),+);)+) => {$(
        impl<$($seg: Segment),+> TypedKey for ($($seg,)+) {
            fn into_key(self) -> KvKey {
                KvKey::new(vec![$(self.$idx.into_part()),+])
            }
        }
    )+};
}

impl_typed_key! {
    (A: 0);
    (A: 0, B: 1);
    (A: 0, B: 1, C: 2);
    (A: 0, B: 1, C: 2, D: 3);
    (A: 0, B: 1, C: 2, D: 3, E: 4);
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
}

/// Declare zero-sized marker types for literal key segments.
///
/// Each marker contributes a fixed text or number segment to a key and,
/// at the type level, pins that position of the key shape to the literal.
///
/// # Example
///
/// ```
/// typed_kv::key_literal! {
///     /// First segment of all user keys.
///     pub struct Users = "user";
///     pub struct Orders = "order";
/// }
///
/// use typed_kv::{KeyPart, KvKey, TypedKey};
///
/// let key: KvKey = (Users, 42u64).into_key();
/// assert_eq!(key.parts(), &[KeyPart::from("user"), KeyPart::from(42u64)]);
/// ```
#[macro_export]
macro_rules! key_literal {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident = $value:literal;)+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::key::Segment for $name {
            fn into_part(self) -> $crate::key::KeyPart {
                $crate::key::KeyPart::from($value)
            }
        }
    )+};
}
