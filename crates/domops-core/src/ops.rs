//! Element operations.
//!
//! The stateless helpers are free functions over [`ElementHandle`]; show, hide
//! and toggle need a [`DisplayCache`] and live on [`DomOps`].

use crate::cache::DisplayCache;
use crate::channel::Channel;
use crate::classes::class_tokens;
use crate::constants::{DISPLAY_NONE, VISIBILITY_VISIBLE};
use crate::error::Result;
use crate::host::{DisplayProbe, ElementHandle, TextSink};
use crate::text::TextValue;

#[inline]
pub fn set_text(node: &impl TextSink, value: impl Into<TextValue>) {
    node.set_text_content(value.into().as_text());
}

/// Replace the element's markup verbatim. Sanitizing is the caller's job.
#[inline]
pub fn set_html(el: &impl ElementHandle, markup: &str) {
    el.set_inner_html(markup);
}

pub fn add_class(el: &impl ElementHandle, names: &[&str]) -> Result<()> {
    let tokens = class_tokens(names);
    if tokens.is_empty() {
        return Ok(());
    }
    el.add_class_tokens(&tokens)
}

pub fn remove_class(el: &impl ElementHandle, names: &[&str]) -> Result<()> {
    let tokens = class_tokens(names);
    if tokens.is_empty() {
        return Ok(());
    }
    el.remove_class_tokens(&tokens)
}

/// Remove `prev` (skipped when empty), then add `next`.
pub fn switch_class(el: &impl ElementHandle, prev: &[&str], next: &[&str]) -> Result<()> {
    remove_class(el, prev)?;
    add_class(el, next)
}

#[inline]
pub fn has_class(el: &impl ElementHandle, name: &str) -> bool {
    el.contains_class(name)
}

/// Ensure `name` is present with an empty value, clearing any existing value.
#[inline]
pub fn add_attribute(el: &impl ElementHandle, name: &str) -> Result<()> {
    el.set_attribute(name, "")
}

#[inline]
pub fn remove_attribute(el: &impl ElementHandle, name: &str) -> Result<()> {
    el.remove_attribute(name)
}

#[inline]
pub fn set_attribute(
    el: &impl ElementHandle,
    name: &str,
    value: impl Into<TextValue>,
) -> Result<()> {
    el.set_attribute(name, value.into().as_text())
}

#[inline]
pub fn get_attribute(el: &impl ElementHandle, name: &str) -> Option<String> {
    el.attribute(name)
}

#[inline]
pub fn has_attribute(el: &impl ElementHandle, name: &str) -> bool {
    el.has_attribute(name)
}

/// Whether `el` is hidden on `channel`: its inline or computed value is the
/// channel's hidden value. Detached elements have no computed style, so the
/// inline declaration has to count as well.
pub fn is_hidden(el: &impl ElementHandle, channel: Channel) -> bool {
    let property = channel.property();
    let hidden = channel.hidden_value();
    if el.inline_style(property) == hidden {
        return true;
    }
    el.computed_style(property).is_some_and(|v| v == hidden)
}

/// Hide an element on `channel`.
///
/// On the display channel a custom inline display (anything but empty or
/// `none`) is stashed on the element so that [`DomOps::show`] can put it
/// back. Hiding twice keeps the first stash, and a failed write stashes nothing.
pub fn hide(el: &impl ElementHandle, channel: Channel) -> Result<()> {
    let previous = el.inline_style(channel.property());
    el.set_inline_style(channel.property(), channel.hidden_value())?;
    // Stash only once the element is actually hidden
    if channel == Channel::Display && !previous.is_empty() && previous != DISPLAY_NONE {
        el.stash_display(Some(&previous));
    }
    Ok(())
}

/// Show/hide/toggle bound to one document's [`DisplayCache`].
///
/// Each instance owns its cache, so independent documents (or tests) never
/// share measurements.
#[derive(Debug)]
pub struct DomOps<P> {
    probe: P,
    cache: DisplayCache,
}

impl<P: DisplayProbe> DomOps<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            cache: DisplayCache::new(),
        }
    }

    #[inline]
    pub fn cache(&self) -> &DisplayCache {
        &self.cache
    }

    #[inline]
    pub fn default_display_for(&self, tag_name: &str) -> String {
        self.cache.default_display_for(&self.probe, tag_name)
    }

    #[inline]
    pub fn hide(&self, el: &impl ElementHandle, channel: Channel) -> Result<()> {
        hide(el, channel)
    }

    /// Show an element on `channel`.
    ///
    /// Display: only an inline value of `none` or empty is replaced, by the
    /// value stashed by [`hide`] when there is one, else by the tag's default
    /// display. Any other inline value is left as is.
    pub fn show(&self, el: &impl ElementHandle, channel: Channel) -> Result<()> {
        match channel {
            Channel::Visibility => el.set_inline_style(channel.property(), VISIBILITY_VISIBLE),
            Channel::Display => {
                let current = el.inline_style(channel.property());
                if !current.is_empty() && current != DISPLAY_NONE {
                    return Ok(());
                }
                let display = match el.stashed_display() {
                    Some(stashed) => {
                        el.stash_display(None);
                        stashed
                    }
                    None => self.default_display_for(&el.tag_name()),
                };
                el.set_inline_style(channel.property(), &display)
            }
        }
    }

    /// Flip an element between shown and hidden, reading the current state from
    /// the live document every time.
    pub fn toggle(&self, el: &impl ElementHandle, channel: Channel) -> Result<()> {
        if is_hidden(el, channel) {
            self.show(el, channel)
        } else {
            self.hide(el, channel)
        }
    }

    #[inline]
    pub fn is_hidden(&self, el: &impl ElementHandle, channel: Channel) -> bool {
        is_hidden(el, channel)
    }
}
