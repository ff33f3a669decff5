//! Random fragment generation for property tests.

use alloc::{string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::{Json, list, map, scalar};

/// Fragments are generated only through the public combinators, the same
/// way callers can obtain them.
impl Arbitrary for Json {
    fn arbitrary(g: &mut Gen) -> Self {
        gen_fragment(g, 3)
    }
}

fn gen_fragment(g: &mut Gen, depth: usize) -> Json {
    let choice = if depth == 0 {
        0
    } else {
        usize::arbitrary(g) % 3
    };
    match choice {
        0 => scalar(String::arbitrary(g)),
        1 => {
            let len = usize::arbitrary(g) % 4;
            let items: Vec<Json> = (0..len).map(|_| gen_fragment(g, depth - 1)).collect();
            list(items)
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let entries: Vec<(String, Json)> = (0..len)
                .map(|_| (String::arbitrary(g), gen_fragment(g, depth - 1)))
                .collect();
            map(entries)
        }
    }
}
