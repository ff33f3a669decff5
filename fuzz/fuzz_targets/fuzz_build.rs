#![no_main]
use arbitrary::Arbitrary;
use jsonweld::{Json, list, map, scalar};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

/// A string-only document shape, covering the builder's entire input
/// domain: string scalars, lists, and maps with arbitrary keys.
#[derive(Debug, Arbitrary)]
enum Doc {
    Scalar(String),
    List(Vec<Doc>),
    Map(Vec<(String, Doc)>),
}

fn build(doc: &Doc) -> Json {
    match doc {
        Doc::Scalar(s) => scalar(s.as_str()),
        Doc::List(items) => list(items.iter().map(build)),
        Doc::Map(entries) => map(entries.iter().map(|(k, v)| (k.as_str(), build(v)))),
    }
}

fn expected(doc: &Doc) -> Value {
    match doc {
        Doc::Scalar(s) => Value::String(s.clone()),
        Doc::List(items) => Value::Array(items.iter().map(expected).collect()),
        Doc::Map(entries) => {
            // Later duplicates win, matching how serde_json resolves
            // repeated keys when parsing.
            let mut object = serde_json::Map::new();
            for (key, value) in entries {
                object.insert(key.clone(), expected(value));
            }
            Value::Object(object)
        }
    }
}

fuzz_target!(|doc: Doc| {
    let rendered = build(&doc).into_bytes();
    let parsed: Value = serde_json::from_slice(&rendered).expect("builder output must reparse");
    assert_eq!(parsed, expected(&doc));
});
