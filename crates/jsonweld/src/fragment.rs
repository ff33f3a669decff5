//! The opaque fragment type and its composition algebra.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::body::JsonBody;

/// A syntactically complete piece of JSON text.
///
/// A `Json` value always holds text matching the JSON grammar's *value*
/// production. The field is private and the only constructors are
/// [`scalar`](crate::scalar), [`list`](crate::list), [`map`](crate::map),
/// [`Json::empty`], and composition of existing fragments, so raw caller
/// text can never enter the output without passing through
/// [`escape`](crate::escape) first.
///
/// Fragments compose under [`Json::append`], which is associative with
/// [`Json::empty`] as the two-sided identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Json {
    buf: String,
}

impl Json {
    /// Wraps text already known to be valid JSON.
    ///
    /// Must stay crate-private: exposing it would let callers inject
    /// unescaped text and void the well-formedness guarantee.
    pub(crate) fn from_raw(buf: String) -> Self {
        Self { buf }
    }

    pub(crate) fn as_raw(&self) -> &str {
        &self.buf
    }

    /// The identity fragment, contributing no bytes to the output.
    #[must_use]
    pub fn empty() -> Self {
        Self { buf: String::new() }
    }

    /// Concatenates two fragments.
    ///
    /// No escaping or validation happens here; both sides are already valid
    /// JSON text, and concatenation is only performed where the grammar
    /// permits it (by the combinators, or on caller fragments that are
    /// themselves complete values).
    #[must_use]
    pub fn append(mut self, other: Json) -> Json {
        self.buf.push_str(&other.buf);
        self
    }

    /// Renders the finished fragment to its UTF-8 byte representation.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.into_bytes()
    }

    /// Renders the finished fragment and tags it as a JSON response body.
    ///
    /// This is a relabeling of the same bytes [`Json::into_bytes`] would
    /// produce, not a transformation.
    #[must_use]
    pub fn into_body(self) -> JsonBody {
        JsonBody::new(self.buf.into_bytes())
    }
}

impl Default for Json {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Folds a sequence of fragments under [`Json::append`].
impl FromIterator<Json> for Json {
    fn from_iter<I: IntoIterator<Item = Json>>(iter: I) -> Self {
        let mut buf = String::new();
        for frag in iter {
            buf.push_str(&frag.buf);
        }
        Self { buf }
    }
}
