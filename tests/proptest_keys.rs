//! Property-based tests for key ordering, prefix, and versionstamp laws.

use proptest::prelude::*;
use typed_kv::{KeyPart, KvKey, TypedKey, Versionstamp};

#[cfg(feature = "memory")]
use typed_kv::MemoryStore;

fn key_part() -> impl Strategy<Value = KeyPart> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(KeyPart::Text),
        any::<u64>().prop_map(KeyPart::Number),
    ]
}

fn kv_key() -> impl Strategy<Value = KvKey> {
    prop::collection::vec(key_part(), 1..5).prop_map(KvKey::new)
}

proptest! {
    #[test]
    fn extension_starts_with_its_prefix(base in kv_key(), ext in key_part()) {
        let extended: KvKey = base
            .parts()
            .iter()
            .cloned()
            .chain(std::iter::once(ext))
            .collect();

        prop_assert!(extended.starts_with(&base));
        prop_assert!(!base.starts_with(&extended));
    }

    #[test]
    fn prefix_sorts_before_every_extension(base in kv_key(), ext in key_part()) {
        let extended: KvKey = base
            .parts()
            .iter()
            .cloned()
            .chain(std::iter::once(ext))
            .collect();

        prop_assert!(base < extended);
    }

    #[test]
    fn starts_with_is_reflexive_and_empty_prefixed(key in kv_key()) {
        prop_assert!(key.starts_with(&key));
        prop_assert!(key.starts_with(&KvKey::default()));
    }

    #[test]
    fn typed_tuples_lower_to_their_segments(text in "[a-z]{1,8}", n in any::<u64>()) {
        let key = (text.clone(), n).into_key();
        prop_assert_eq!(
            key.parts(),
            &[KeyPart::Text(text), KeyPart::Number(n)]
        );
    }

    #[test]
    fn versionstamp_text_roundtrip(bytes in any::<[u8; 10]>()) {
        let v = Versionstamp::new(bytes);
        let text = v.to_string();
        prop_assert_eq!(text.len(), 20);
        prop_assert_eq!(Versionstamp::parse(&text), Ok(v));
    }

    #[test]
    fn versionstamp_order_follows_sequence(a in any::<u64>(), b in any::<u64>()) {
        let va = Versionstamp::from_sequence(a);
        let vb = Versionstamp::from_sequence(b);
        prop_assert_eq!(a.cmp(&b), va.cmp(&vb));
    }
}

#[cfg(feature = "memory")]
proptest! {
    #[test]
    fn cursor_encoding_roundtrips(key in kv_key()) {
        let cursor = MemoryStore::cursor_for(&key);
        let decoded: KvKey = serde_json::from_str(&cursor)
            .map_err(|e| proptest::test_runner::TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(decoded, key);
    }
}
