//! JavaScript surface.
//!
//! Values arrive untyped; they are coerced here with the same rules the Rust
//! API applies (`null`, `undefined`, `false` and `NaN` write `""`). Class
//! arguments may be a single value or an array; each entry is coerced the same
//! way.

use std::fmt::Display;

use domops_core::{ops, Channel, TextValue};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom::{WebElement, WebNode};
use crate::session::{for_document, for_window, WebDomOps};

fn js_error(err: impl Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Coerce an arbitrary JavaScript value the way `String(value)` would, except
/// that `null`, `undefined`, `false` and `NaN` become blank.
pub fn text_value_from_js(value: &JsValue) -> TextValue {
    if value.is_null() || value.is_undefined() {
        return TextValue::Absent;
    }
    if let Some(b) = value.as_bool() {
        return b.into();
    }
    if let Some(n) = value.as_f64() {
        if n.is_nan() {
            return TextValue::Absent;
        }
        // Let the engine format numbers; the Rust rendering is only a fallback
        return js_sys::Number::from(n)
            .to_string(10)
            .map(|s| TextValue::from(String::from(s)))
            .unwrap_or_else(|_| n.into());
    }
    if let Some(s) = value.as_string() {
        return s.into();
    }
    if let Some(big) = value.dyn_ref::<js_sys::BigInt>() {
        return big
            .to_string(10)
            .map(|s| TextValue::from(String::from(s)))
            .unwrap_or_default();
    }
    if let Some(symbol) = value.dyn_ref::<js_sys::Symbol>() {
        return String::from(symbol.to_string()).into();
    }
    match value.dyn_ref::<js_sys::Object>() {
        Some(obj) => String::from(obj.to_string()).into(),
        None => TextValue::Absent,
    }
}

/// Class names from a string, an array, or any other value coerced like text.
/// Blank entries are dropped.
pub fn class_names_from_js(value: &JsValue) -> Vec<String> {
    let entries: Vec<JsValue> = match value.dyn_ref::<js_sys::Array>() {
        Some(array) => array.iter().collect(),
        None => vec![value.clone()],
    };
    entries
        .iter()
        .map(text_value_from_js)
        .filter(|v| !v.is_blank())
        .map(TextValue::into_text)
        .collect()
}

#[inline]
fn as_strs(names: &[String]) -> Vec<&str> {
    names.iter().map(String::as_str).collect()
}

fn channel(name: Option<String>) -> Result<Channel, JsValue> {
    Channel::parse_optional(name.as_deref()).map_err(js_error)
}

#[wasm_bindgen(js_name = setText)]
pub fn set_text(node: &web::Node, value: JsValue) {
    ops::set_text(&WebNode(node), text_value_from_js(&value));
}

#[wasm_bindgen(js_name = setHtml)]
pub fn set_html(el: &web::Element, content: &str) {
    ops::set_html(&WebElement(el), content);
}

#[wasm_bindgen(js_name = addClass)]
pub fn add_class(el: &web::Element, names: JsValue) -> Result<(), JsValue> {
    let names = class_names_from_js(&names);
    ops::add_class(&WebElement(el), &as_strs(&names)).map_err(js_error)
}

#[wasm_bindgen(js_name = removeClass)]
pub fn remove_class(el: &web::Element, names: JsValue) -> Result<(), JsValue> {
    let names = class_names_from_js(&names);
    ops::remove_class(&WebElement(el), &as_strs(&names)).map_err(js_error)
}

#[wasm_bindgen(js_name = switchClass)]
pub fn switch_class(el: &web::Element, prev: JsValue, next: JsValue) -> Result<(), JsValue> {
    let prev = class_names_from_js(&prev);
    let next = class_names_from_js(&next);
    ops::switch_class(&WebElement(el), &as_strs(&prev), &as_strs(&next)).map_err(js_error)
}

#[wasm_bindgen(js_name = hasClass)]
pub fn has_class(el: &web::Element, name: &str) -> bool {
    ops::has_class(&WebElement(el), name)
}

#[wasm_bindgen(js_name = addAttribute)]
pub fn add_attribute(el: &web::Element, name: &str) -> Result<(), JsValue> {
    ops::add_attribute(&WebElement(el), name).map_err(js_error)
}

#[wasm_bindgen(js_name = removeAttribute)]
pub fn remove_attribute(el: &web::Element, name: &str) -> Result<(), JsValue> {
    ops::remove_attribute(&WebElement(el), name).map_err(js_error)
}

#[wasm_bindgen(js_name = setAttribute)]
pub fn set_attribute(el: &web::Element, name: &str, value: JsValue) -> Result<(), JsValue> {
    ops::set_attribute(&WebElement(el), name, text_value_from_js(&value)).map_err(js_error)
}

#[wasm_bindgen(js_name = getAttribute)]
pub fn get_attribute(el: &web::Element, name: &str) -> Option<String> {
    ops::get_attribute(&WebElement(el), name)
}

#[wasm_bindgen(js_name = hasAttribute)]
pub fn has_attribute(el: &web::Element, name: &str) -> bool {
    ops::has_attribute(&WebElement(el), name)
}

/// Show/hide/toggle with a display cache scoped to one document.
#[wasm_bindgen(js_name = DomOps)]
pub struct JsDomOps {
    inner: WebDomOps,
}

#[wasm_bindgen(js_class = DomOps)]
impl JsDomOps {
    /// Bind to `document`, or to the current window's document when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(document: Option<web::Document>) -> Result<JsDomOps, JsValue> {
        let inner = match document {
            Some(document) => for_document(document),
            None => for_window().map_err(js_error)?,
        };
        Ok(JsDomOps { inner })
    }

    pub fn hide(&self, el: &web::Element, channel_name: Option<String>) -> Result<(), JsValue> {
        self.inner
            .hide(&WebElement(el), channel(channel_name)?)
            .map_err(js_error)
    }

    pub fn show(&self, el: &web::Element, channel_name: Option<String>) -> Result<(), JsValue> {
        self.inner
            .show(&WebElement(el), channel(channel_name)?)
            .map_err(js_error)
    }

    pub fn toggle(&self, el: &web::Element, channel_name: Option<String>) -> Result<(), JsValue> {
        self.inner
            .toggle(&WebElement(el), channel(channel_name)?)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = isHidden)]
    pub fn is_hidden(
        &self,
        el: &web::Element,
        channel_name: Option<String>,
    ) -> Result<bool, JsValue> {
        Ok(self.inner.is_hidden(&WebElement(el), channel(channel_name)?))
    }

    #[wasm_bindgen(js_name = defaultDisplayFor)]
    pub fn default_display_for(&self, tag_name: &str) -> String {
        self.inner.default_display_for(tag_name)
    }

    #[wasm_bindgen(js_name = cachedTagCount)]
    pub fn cached_tag_count(&self) -> usize {
        self.inner.cache().len()
    }
}
