use domops_core::{DomError, ElementHandle, Result, TextSink};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::DISPLAY_STASH_KEY;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Wrap a rejected DOM call, keeping the exception's name and message.
pub(crate) fn platform_error(err: JsValue) -> DomError {
    let message = match err.dyn_ref::<js_sys::Error>() {
        Some(e) => format!("{}: {}", String::from(e.name()), String::from(e.message())),
        None => format!("{:?}", err),
    };
    log::debug!("[dom] platform error: {}", message);
    DomError::Platform(message)
}

/// Any node whose text can be replaced, text nodes included.
#[derive(Clone, Copy, Debug)]
pub struct WebNode<'a>(pub &'a web::Node);

impl TextSink for WebNode<'_> {
    #[inline]
    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Borrowed view of a live element, implementing the core element seam.
#[derive(Clone, Copy, Debug)]
pub struct WebElement<'a>(pub &'a web::Element);

impl WebElement<'_> {
    // HTML and SVG elements carry inline style; anything else has none.
    fn style(&self) -> Option<web::CssStyleDeclaration> {
        if let Some(html) = self.0.dyn_ref::<web::HtmlElement>() {
            return Some(html.style());
        }
        self.0.dyn_ref::<web::SvgElement>().map(|svg| svg.style())
    }

    fn stash_key() -> JsValue {
        JsValue::from_str(DISPLAY_STASH_KEY)
    }
}

impl TextSink for WebElement<'_> {
    #[inline]
    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

impl ElementHandle for WebElement<'_> {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn set_inner_html(&self, markup: &str) {
        self.0.set_inner_html(markup);
    }

    fn add_class_tokens(&self, tokens: &[&str]) -> Result<()> {
        let list = self.0.class_list();
        for token in tokens {
            list.add_1(token).map_err(platform_error)?;
        }
        Ok(())
    }

    fn remove_class_tokens(&self, tokens: &[&str]) -> Result<()> {
        let list = self.0.class_list();
        for token in tokens {
            list.remove_1(token).map_err(platform_error)?;
        }
        Ok(())
    }

    fn contains_class(&self, token: &str) -> bool {
        self.0.class_list().contains(token)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.0.set_attribute(name, value).map_err(platform_error)
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        self.0.remove_attribute(name).map_err(platform_error)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    fn inline_style(&self, property: &str) -> String {
        self.style()
            .and_then(|s| s.get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_inline_style(&self, property: &str, value: &str) -> Result<()> {
        match self.style() {
            Some(s) => s.set_property(property, value).map_err(platform_error),
            None => Err(DomError::Platform(format!(
                "<{}> has no inline style",
                self.0.tag_name()
            ))),
        }
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        let window = self.0.owner_document()?.default_view()?;
        let style = window.get_computed_style(self.0).ok()??;
        style.get_property_value(property).ok()
    }

    fn stashed_display(&self) -> Option<String> {
        let target: &JsValue = self.0.as_ref();
        Reflect::get(target, &Self::stash_key())
            .ok()
            .and_then(|v| v.as_string())
    }

    fn stash_display(&self, value: Option<&str>) {
        let target: &Object = self.0.as_ref();
        // Expando writes only fail on frozen objects, which elements never are
        match value {
            Some(v) => {
                _ = Reflect::set(target, &Self::stash_key(), &JsValue::from_str(v));
            }
            None => {
                _ = Reflect::delete_property(target, &Self::stash_key());
            }
        }
    }
}
