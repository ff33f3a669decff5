//! Boundary to the upstream markup representation.

use alloc::{borrow::Cow, string::String};

/// A source of markup-safe text.
///
/// Implementors represent text that an upstream markup layer has already
/// protected against HTML-entity injection. The single operation extracts
/// the raw rendered text so [`scalar`](crate::scalar) can apply JSON-level
/// escaping to it. Nothing else about the markup representation is assumed
/// here, in particular not that rendering is free of external effects.
///
/// Plain string types implement the trait as identity renders, so raw text
/// can flow in directly where no markup layer is involved.
pub trait Markup {
    /// Renders the markup to raw text.
    fn render(&self) -> Cow<'_, str>;
}

impl Markup for str {
    fn render(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Markup for String {
    fn render(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Markup for Cow<'_, str> {
    fn render(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl<M: Markup + ?Sized> Markup for &M {
    fn render(&self) -> Cow<'_, str> {
        (**self).render()
    }
}
