//! The composition laws the builder algebra promises.

use alloc::vec::Vec;

use quickcheck::QuickCheck;

use crate::Json;

fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

#[test]
fn empty_is_a_two_sided_identity() {
    fn prop(x: Json) -> bool {
        Json::empty().append(x.clone()) == x && x.clone().append(Json::empty()) == x
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Json) -> bool);
}

#[test]
fn append_is_associative() {
    fn prop(x: Json, y: Json, z: Json) -> bool {
        let left = x.clone().append(y.clone()).append(z.clone());
        let right = x.append(y.append(z));
        left == right
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Json, Json, Json) -> bool);
}

#[test]
fn collecting_fragments_folds_under_append() {
    fn prop(frags: Vec<Json>) -> bool {
        let collected: Json = frags.iter().cloned().collect();
        let folded = frags
            .into_iter()
            .fold(Json::empty(), |acc, frag| acc.append(frag));
        collected == folded
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<Json>) -> bool);
}

#[test]
fn default_is_empty() {
    assert_eq!(Json::default(), Json::empty());
    assert!(Json::empty().into_bytes().is_empty());
}
