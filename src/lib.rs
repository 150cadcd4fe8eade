#![cfg(target_arch = "wasm32")]
//! Browser DOM helpers: text, classes, attributes, markup, and show/hide/toggle
//! that restores an element's natural display.
//!
//! The rules live in `domops-core`; this crate binds them to `web-sys` and
//! exports them to JavaScript.

mod bindings;
mod constants;
mod dom;
mod logging;
mod probe;
mod session;

pub use bindings::{class_names_from_js, text_value_from_js, JsDomOps};
pub use dom::{window_document, WebElement, WebNode};
pub use domops_core::{ops, Channel, DisplayCache, DomError, DomOps, TextValue};
pub use logging::init_logging;
pub use probe::DocumentProbe;
pub use session::{for_document, for_window, WebDomOps};
