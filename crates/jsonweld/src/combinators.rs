//! Structural combinators assembling compound JSON values.

use alloc::string::String;

use crate::{escape::escape_onto, fragment::Json, markup::Markup};

/// Builds a JSON string value from markup-safe text.
///
/// The markup is rendered to raw text, escaped, and wrapped in quotes.
/// Total: any input yields a valid string fragment.
///
/// ```rust
/// # use jsonweld::scalar;
/// assert_eq!(scalar("line\nbreak").to_string(), r#""line\nbreak""#);
/// ```
#[must_use]
pub fn scalar(markup: impl Markup) -> Json {
    let text = markup.render();
    let mut buf = String::with_capacity(text.len() + 2);
    buf.push('"');
    escape_onto(&text, &mut buf);
    buf.push('"');
    Json::from_raw(buf)
}

/// Builds a JSON array from value fragments.
///
/// An empty sequence yields the literal `[]`; otherwise elements appear in
/// iteration order with exactly one comma between consecutive elements.
/// Elements are complete value fragments already, so nothing is escaped
/// here.
///
/// ```rust
/// # use jsonweld::{list, scalar};
/// assert_eq!(list([]).to_string(), "[]");
/// assert_eq!(list([scalar("a"), scalar("b")]).to_string(), r#"["a","b"]"#);
/// ```
#[must_use]
pub fn list<I>(items: I) -> Json
where
    I: IntoIterator<Item = Json>,
{
    let mut buf = String::from("[");
    let mut first = true;
    for item in items {
        if !first {
            buf.push(',');
        }
        first = false;
        buf.push_str(item.as_raw());
    }
    buf.push(']');
    Json::from_raw(buf)
}

/// Builds a JSON object from `(key, value)` entries.
///
/// An empty sequence yields the literal `{}`. Keys are plain strings (not
/// markup) and are escaped and quoted exactly like scalar bodies; values
/// are complete fragments. Entry order is preserved and duplicate keys are
/// passed through as given: the output is then syntactically valid but
/// semantically ambiguous, which is the caller's to avoid.
///
/// ```rust
/// # use jsonweld::{map, scalar};
/// let frag = map([("z", scalar("1")), ("a", scalar("2"))]);
/// assert_eq!(frag.to_string(), r#"{"z":"1","a":"2"}"#);
/// ```
#[must_use]
pub fn map<K, I>(entries: I) -> Json
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, Json)>,
{
    let mut buf = String::from("{");
    let mut first = true;
    for (key, value) in entries {
        if !first {
            buf.push(',');
        }
        first = false;
        buf.push('"');
        escape_onto(key.as_ref(), &mut buf);
        buf.push_str("\":");
        buf.push_str(value.as_raw());
    }
    buf.push('}');
    Json::from_raw(buf)
}
