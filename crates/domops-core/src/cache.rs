use std::cell::RefCell;

use fnv::FnvHashMap;

use crate::constants::{DISPLAY_NONE, FALLBACK_DISPLAY};
use crate::host::DisplayProbe;

/// Memoized default display value per tag name.
///
/// A tag's default display is a user-agent constant, so entries are written once
/// and never recomputed or evicted. Tag names are keys exactly as supplied.
#[derive(Debug, Default)]
pub struct DisplayCache {
    entries: RefCell<FnvHashMap<String, String>>,
}

impl DisplayCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default display for `tag_name`, measuring with `probe` on first use.
    ///
    /// Cached tags return without touching the document. A measured `"none"` (or
    /// empty) value, and an unavailable styling engine, both resolve to
    /// [`FALLBACK_DISPLAY`].
    pub fn default_display_for(&self, probe: &impl DisplayProbe, tag_name: &str) -> String {
        if let Some(display) = self.entries.borrow().get(tag_name) {
            return display.clone();
        }

        let display = match probe.probe_display(tag_name) {
            Some(measured) if measured.is_empty() || measured == DISPLAY_NONE => {
                FALLBACK_DISPLAY.to_string()
            }
            Some(measured) => measured,
            None => {
                log::warn!(
                    "[display-cache] no computed style for <{}>, using {}",
                    tag_name,
                    FALLBACK_DISPLAY
                );
                FALLBACK_DISPLAY.to_string()
            }
        };
        log::debug!("[display-cache] {} -> {}", tag_name, display);
        self.entries
            .borrow_mut()
            .insert(tag_name.to_string(), display.clone());
        display
    }

    #[inline]
    pub fn cached(&self, tag_name: &str) -> Option<String> {
        self.entries.borrow().get(tag_name).cloned()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedProbe {
        display: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl DisplayProbe for FixedProbe {
        fn probe_display(&self, _tag_name: &str) -> Option<String> {
            self.calls.set(self.calls.get() + 1);
            self.display.map(str::to_string)
        }
    }

    fn probe(display: Option<&'static str>) -> FixedProbe {
        FixedProbe {
            display,
            calls: Cell::new(0),
        }
    }

    #[test]
    fn measures_once_per_tag() {
        let cache = DisplayCache::new();
        let p = probe(Some("inline"));
        assert_eq!(cache.default_display_for(&p, "SPAN"), "inline");
        assert_eq!(cache.default_display_for(&p, "SPAN"), "inline");
        assert_eq!(p.calls.get(), 1);
        assert_eq!(cache.cached("SPAN").as_deref(), Some("inline"));
    }

    #[test]
    fn none_and_empty_measurements_become_block() {
        let cache = DisplayCache::new();
        assert_eq!(cache.default_display_for(&probe(Some("none")), "TEMPLATE"), "block");
        assert_eq!(cache.default_display_for(&probe(Some("")), "X-WIDGET"), "block");
    }

    #[test]
    fn unavailable_styling_falls_back_and_is_memoized() {
        let cache = DisplayCache::new();
        let p = probe(None);
        assert_eq!(cache.default_display_for(&p, "DIV"), "block");
        assert_eq!(cache.default_display_for(&p, "DIV"), "block");
        assert_eq!(p.calls.get(), 1);
    }

    #[test]
    fn tag_case_is_significant() {
        let cache = DisplayCache::new();
        let p = probe(Some("table"));
        cache.default_display_for(&p, "table");
        cache.default_display_for(&p, "TABLE");
        assert_eq!(cache.len(), 2);
        assert_eq!(p.calls.get(), 2);
    }
}
