//! Incremental construction of well-formed JSON text from typed fragments.
//!
//! The only ways to obtain a [`Json`] fragment are the [`scalar`], [`list`],
//! and [`map`] combinators and composition of existing fragments, and every
//! piece of literal text those accept is routed through the JSON string
//! escaper first. Malformed or improperly escaped output is therefore ruled
//! out by construction rather than by runtime checks.
//!
//! ```rust
//! use jsonweld::{list, map, scalar};
//!
//! let body = map([("foo", list([scalar("bar"), scalar("baz")]))]).into_body();
//! assert_eq!(body.as_bytes(), br#"{"foo":["bar","baz"]}"#);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod body;
mod combinators;
mod escape;
mod fragment;
mod markup;

#[cfg(test)]
mod tests;

pub use body::JsonBody;
pub use combinators::{list, map, scalar};
pub use escape::escape;
pub use fragment::Json;
pub use markup::Markup;

#[doc(hidden)]
pub use alloc::vec;

/// Macro to build a JSON object fragment from `key => value` pairs.
///
/// Keys are plain string expressions and values are [`Json`] fragments.
/// Entry order is kept exactly as written, the same as [`map`].
///
/// ```rust
/// extern crate alloc;
/// # use jsonweld::{object, scalar};
/// let user = object! {
///     "name" => scalar("Ada"),
///     "role" => scalar("admin"),
/// };
/// assert_eq!(user.to_string(), r#"{"name":"Ada","role":"admin"}"#);
/// assert_eq!(object! {}.to_string(), "{}");
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::map(::core::iter::empty::<(&str, $crate::Json)>())
    };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {
        $crate::map($crate::vec![ $( ($key, $value) ),+ ])
    };
}

/// Macro to build a JSON array fragment from [`Json`] element expressions.
///
/// ```rust
/// extern crate alloc;
/// # use jsonweld::{array, scalar};
/// let tags = array![scalar("a"), scalar("b")];
/// assert_eq!(tags.to_string(), r#"["a","b"]"#);
/// assert_eq!(array![].to_string(), "[]");
/// ```
#[macro_export]
macro_rules! array {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::list($crate::vec![ $( $item ),* ])
    };
}
