//! Seams between the helper logic and a concrete document.
//!
//! The browser binding implements these over `web-sys`; tests implement them
//! over in-memory fakes. Every method takes `&self`: handles are shared views of
//! nodes owned by the document, and mutation goes through the document.

use crate::error::Result;

/// Anything whose text content can be replaced (elements and text nodes).
pub trait TextSink {
    fn set_text_content(&self, text: &str);
}

/// A live element owned by the host document.
pub trait ElementHandle: TextSink {
    /// Tag name as the host reports it (e.g. `DIV` for HTML documents).
    fn tag_name(&self) -> String;

    fn set_inner_html(&self, markup: &str);

    // Class tokens arrive normalized: non-empty, no whitespace, no repeats.
    fn add_class_tokens(&self, tokens: &[&str]) -> Result<()>;
    fn remove_class_tokens(&self, tokens: &[&str]) -> Result<()>;
    fn contains_class(&self, token: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str) -> Result<()>;
    fn remove_attribute(&self, name: &str) -> Result<()>;
    fn has_attribute(&self, name: &str) -> bool;

    /// Inline style declaration for `property`; `""` when unset.
    fn inline_style(&self, property: &str) -> String;
    fn set_inline_style(&self, property: &str, value: &str) -> Result<()>;

    /// Cascade-resolved value for `property`, or `None` when the host has no
    /// styling engine to ask.
    fn computed_style(&self, property: &str) -> Option<String>;

    /// Display value remembered by the last `hide` that overwrote a custom one.
    fn stashed_display(&self) -> Option<String>;
    /// Replace (or with `None`, clear) the remembered display value.
    fn stash_display(&self, value: Option<&str>);
}

/// Measures a tag's default display in the live document.
pub trait DisplayProbe {
    /// Create an unstyled `tag_name` element, attach it under the document
    /// body, read its computed `display`, then detach it.
    ///
    /// Returns `None` when no styling engine is available to measure with.
    fn probe_display(&self, tag_name: &str) -> Option<String>;
}

impl<P: DisplayProbe + ?Sized> DisplayProbe for &P {
    fn probe_display(&self, tag_name: &str) -> Option<String> {
        (**self).probe_display(tag_name)
    }
}
