//! Response-body tagging for finished JSON output.

use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::fragment::Json;

/// Finished JSON output, tagged as a response body.
///
/// A `JsonBody` is a zero-cost relabeling of the bytes a finished
/// [`Json`] fragment renders to: wrapping performs no copy and no
/// transformation, it only gives the bytes a distinct type so downstream
/// response code cannot confuse them with other content kinds.
#[derive(Clone, PartialEq, Eq)]
pub struct JsonBody(Vec<u8>);

impl JsonBody {
    /// The media type downstream response code should advertise for this
    /// body.
    pub const CONTENT_TYPE: &'static str = "application/json";

    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The body bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Unwraps the body into its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length of the body in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the body is empty.
    ///
    /// Only the body of the empty fragment is; every combinator-built value
    /// renders to at least two bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Json> for JsonBody {
    fn from(fragment: Json) -> Self {
        fragment.into_body()
    }
}

impl AsRef<[u8]> for JsonBody {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for JsonBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("JsonBody").field(&BStr::new(&self.0)).finish()
    }
}
