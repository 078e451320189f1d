use std::collections::BTreeSet;

use assoc_array::{assoc, AssociativeArray, Error, DEFAULT_CAPACITY};
use proptest::prelude::*;
use rstest::rstest;

fn build(pairs: &[(u8, i32)]) -> AssociativeArray<u8, i32> {
    let mut sut: AssociativeArray<u8, i32> = AssociativeArray::new();
    for &(k, v) in pairs {
        sut.set(k, v).expect("non-null keys are accepted");
    }
    sut
}

fn distinct_keys(pairs: &[(u8, i32)]) -> Vec<u8> {
    let mut seen = BTreeSet::new();
    pairs
        .iter()
        .map(|&(k, _)| k)
        .filter(|k| seen.insert(*k))
        .collect()
}

proptest! {
    #[test]
    fn prop_set_then_get(pairs in prop::collection::vec(any::<(u8, i32)>(), 0..64), key in any::<u8>(), value in any::<i32>()) {
        let mut sut = build(&pairs);
        sut.set(key, value).unwrap();

        prop_assert_eq!(sut.get(&key), Ok(&value));
        prop_assert!(sut.has_key(&key));
    }

    #[test]
    fn prop_keys_are_unique_and_in_first_insertion_order(pairs in prop::collection::vec(any::<(u8, i32)>(), 0..64)) {
        let sut = build(&pairs);
        let keys = sut.keys().copied().collect::<Vec<_>>();

        prop_assert_eq!(sut.size(), keys.len());
        prop_assert_eq!(keys, distinct_keys(&pairs));
    }

    #[test]
    fn prop_update_does_not_change_size(pairs in prop::collection::vec(any::<(u8, i32)>(), 1..64), v1 in any::<i32>(), v2 in any::<i32>()) {
        let mut sut = build(&pairs);
        let key = pairs[0].0;

        sut.set(key, v1).unwrap();
        let size = sut.size();
        sut.set(key, v2).unwrap();

        prop_assert_eq!(sut.size(), size);
        prop_assert_eq!(sut.get(&key), Ok(&v2));
    }

    #[test]
    fn prop_remove_shrinks_by_one_and_preserves_order(pairs in prop::collection::vec(any::<(u8, i32)>(), 1..64), index in any::<prop::sample::Index>()) {
        let mut sut = build(&pairs);
        let mut expected = sut.keys().copied().collect::<Vec<_>>();
        let victim = expected.remove(index.index(expected.len()));
        let size = sut.size();

        prop_assert!(sut.remove(&victim).is_some());

        prop_assert_eq!(sut.size(), size - 1);
        prop_assert_eq!(sut.keys().copied().collect::<Vec<_>>(), expected);
        prop_assert_eq!(sut.get(&victim), Err(Error::KeyNotFound));
    }

    #[test]
    fn prop_remove_missing_key_is_a_no_op(pairs in prop::collection::vec((0u8..128, any::<i32>()), 0..64), missing in 128u8..) {
        let mut sut = build(&pairs);
        let before = sut.clone();
        let capacity = sut.capacity();

        prop_assert_eq!(sut.remove(&missing), None);
        prop_assert_eq!(sut.remove(None::<&u8>), None);

        prop_assert_eq!(&sut, &before);
        prop_assert_eq!(sut.capacity(), capacity);
    }

    #[test]
    fn prop_clone_is_independent(pairs in prop::collection::vec(any::<(u8, i32)>(), 1..64), key in any::<u8>(), value in any::<i32>()) {
        let original = build(&pairs);
        let snapshot = original.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>();

        let mut copy = original.clone();
        copy.set(key, value).unwrap();
        copy.remove(&pairs[0].0);

        for (k, v) in &snapshot {
            prop_assert_eq!(original.get(k), Ok(v));
        }
        prop_assert_eq!(original.size(), snapshot.len());
    }

    #[test]
    fn prop_capacity_never_shrinks(pairs in prop::collection::vec(any::<(u8, i32)>(), 0..128), removals in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut sut: AssociativeArray<u8, i32> = AssociativeArray::new();
        let mut capacity = sut.capacity();

        for &(k, v) in &pairs {
            sut.set(k, v).unwrap();
            prop_assert!(sut.capacity() >= capacity);
            prop_assert!(sut.size() <= sut.capacity());
            capacity = sut.capacity();
        }
        for k in &removals {
            sut.remove(k);
            prop_assert_eq!(sut.capacity(), capacity);
        }
    }
}

#[rstest]
fn null_key_semantics() {
    let mut sut: AssociativeArray<&str, &str> = AssociativeArray::new();
    sut.set("present", "v").unwrap();

    assert_eq!(sut.set(None::<&str>, "v"), Err(Error::NullKey));
    assert_eq!(sut.get(None::<&str>), Err(Error::NullKey));
    assert!(!sut.has_key(None::<&str>));
    assert_eq!(sut.remove(None::<&str>), None);
    assert_eq!(sut.size(), 1, "Expected null-key calls to leave the array untouched");
}

#[rstest]
fn failed_calls_leave_state_untouched() {
    let mut sut = assoc! { "a" => 1, "b" => 2 };
    let before = sut.clone();
    let capacity = sut.capacity();

    assert_eq!(sut.get("z"), Err(Error::KeyNotFound));
    assert_eq!(sut.get_mut("z"), Err(Error::KeyNotFound));
    assert_eq!(sut.set(None::<&str>, 3), Err(Error::NullKey));

    assert_eq!(sut, before);
    assert_eq!(sut.capacity(), capacity);
}

#[rstest]
fn growth_is_transparent() {
    let mut sut: AssociativeArray<String, usize> = AssociativeArray::new();

    for i in 0..=DEFAULT_CAPACITY {
        sut.set(format!("key{i}"), i).unwrap();
    }

    assert_eq!(sut.size(), DEFAULT_CAPACITY + 1);
    assert!(sut.capacity() >= DEFAULT_CAPACITY * 2);
    for i in 0..=DEFAULT_CAPACITY {
        assert_eq!(sut.get(format!("key{i}").as_str()), Ok(&i));
    }
}

#[rstest]
fn rendering_follows_storage_order() {
    let mut sut: AssociativeArray<&str, i32> = AssociativeArray::new();
    sut.set("a", 1).unwrap();
    sut.set("b", 2).unwrap();
    assert_eq!(sut.to_string(), "{a:1, b:2}");

    sut.set("c", 3).unwrap();
    sut.remove("a");
    sut.set("a", 4).unwrap();
    assert_eq!(sut.to_string(), "{b:2, c:3, a:4}");
}
