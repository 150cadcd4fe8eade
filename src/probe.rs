use domops_core::DisplayProbe;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::PROBE_PROPERTY;

/// Measures default display values in a live document by briefly attaching an
/// unstyled element of the tag under `<body>`.
#[derive(Clone, Debug)]
pub struct DocumentProbe {
    document: web::Document,
}

impl DocumentProbe {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    // Ok(None): nothing to measure with (no window, no body, no computed style).
    fn measure(&self, tag_name: &str) -> Result<Option<String>, JsValue> {
        let Some(window) = self.document.default_view() else {
            return Ok(None);
        };
        let Some(body) = self.document.body() else {
            return Ok(None);
        };

        let probe = self.document.create_element(tag_name)?;
        body.append_child(&probe)?;
        // Computed style is live: read it while attached, then detach on every path.
        let display = window.get_computed_style(&probe).map(|computed| {
            computed.and_then(|style| style.get_property_value(PROBE_PROPERTY).ok())
        });
        probe.remove();
        display
    }
}

impl DisplayProbe for DocumentProbe {
    fn probe_display(&self, tag_name: &str) -> Option<String> {
        match self.measure(tag_name) {
            Ok(display) => display,
            Err(e) => {
                log::debug!("[probe] <{}> could not be measured: {:?}", tag_name, e);
                None
            }
        }
    }
}
