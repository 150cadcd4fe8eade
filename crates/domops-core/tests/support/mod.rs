// In-memory stand-ins for a styled document, used by the host-side tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use domops_core::{DisplayProbe, DomError, ElementHandle, Result, TextSink};

/// User-agent display defaults, keyed by upper-case tag name.
fn ua_display(tag: &str) -> &'static str {
    match tag.to_ascii_uppercase().as_str() {
        "SPAN" | "A" | "EM" | "STRONG" => "inline",
        "TABLE" => "table",
        "LI" => "list-item",
        "TEMPLATE" | "SCRIPT" | "HEAD" => "none",
        _ => "block",
    }
}

#[derive(Default)]
struct DocState {
    styling: bool,
    // tag -> display rules from an author stylesheet
    sheet: HashMap<String, String>,
    probes: usize,
    body_children: usize,
}

/// Shared document: stylesheet, probe instrumentation and body occupancy.
#[derive(Clone)]
pub struct FakeDocument {
    state: Rc<RefCell<DocState>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(DocState {
                styling: true,
                ..DocState::default()
            })),
        }
    }

    /// A document with no styling engine: nothing can be measured.
    pub fn unstyled() -> Self {
        let doc = Self::new();
        doc.state.borrow_mut().styling = false;
        doc
    }

    pub fn set_rule(&self, tag: &str, display: &str) {
        self.state
            .borrow_mut()
            .sheet
            .insert(tag.to_ascii_uppercase(), display.to_string());
    }

    pub fn probe_count(&self) -> usize {
        self.state.borrow().probes
    }

    pub fn body_children(&self) -> usize {
        self.state.borrow().body_children
    }

    pub fn create_element(&self, tag: &str) -> FakeElement {
        FakeElement {
            doc: self.clone(),
            tag: tag.to_ascii_uppercase(),
            attached: Cell::new(true),
            text: RefCell::new(String::new()),
            html: RefCell::new(String::new()),
            classes: RefCell::new(Vec::new()),
            attributes: RefCell::new(Vec::new()),
            inline: RefCell::new(HashMap::new()),
            stash: RefCell::new(None),
            reject_style: Cell::new(false),
        }
    }

    fn cascade_display(&self, tag: &str) -> String {
        let state = self.state.borrow();
        state
            .sheet
            .get(tag)
            .cloned()
            .unwrap_or_else(|| ua_display(tag).to_string())
    }
}

impl DisplayProbe for FakeDocument {
    fn probe_display(&self, tag_name: &str) -> Option<String> {
        let mut state = self.state.borrow_mut();
        state.probes += 1;
        if !state.styling {
            return None;
        }
        state.body_children += 1;
        let tag = tag_name.to_ascii_uppercase();
        let display = state
            .sheet
            .get(&tag)
            .cloned()
            .unwrap_or_else(|| ua_display(&tag).to_string());
        state.body_children -= 1;
        Some(display)
    }
}

pub struct FakeElement {
    doc: FakeDocument,
    tag: String,
    attached: Cell<bool>,
    pub text: RefCell<String>,
    pub html: RefCell<String>,
    classes: RefCell<Vec<String>>,
    attributes: RefCell<Vec<(String, String)>>,
    inline: RefCell<HashMap<String, String>>,
    stash: RefCell<Option<String>>,
    reject_style: Cell<bool>,
}

impl FakeElement {
    pub fn detach(&self) {
        self.attached.set(false);
    }

    pub fn class_names(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    /// Direct inline style write, as a caller would do via `el.style`.
    pub fn set_style(&self, property: &str, value: &str) {
        self.inline
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }

    pub fn style(&self, property: &str) -> String {
        self.inline_style(property)
    }

    /// Make every subsequent style write fail, as a frozen declaration would.
    pub fn reject_style_writes(&self) {
        self.reject_style.set(true);
    }
}

impl TextSink for FakeElement {
    fn set_text_content(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
        self.html.borrow_mut().clear();
    }
}

impl ElementHandle for FakeElement {
    fn tag_name(&self) -> String {
        self.tag.clone()
    }

    fn set_inner_html(&self, markup: &str) {
        *self.html.borrow_mut() = markup.to_string();
    }

    fn add_class_tokens(&self, tokens: &[&str]) -> Result<()> {
        let mut classes = self.classes.borrow_mut();
        for token in tokens {
            if token.is_empty() {
                return Err(DomError::Platform("SyntaxError: empty token".into()));
            }
            if !classes.iter().any(|c| c == token) {
                classes.push(token.to_string());
            }
        }
        Ok(())
    }

    fn remove_class_tokens(&self, tokens: &[&str]) -> Result<()> {
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(DomError::Platform("SyntaxError: empty token".into()));
        }
        self.classes
            .borrow_mut()
            .retain(|c| !tokens.contains(&c.as_str()));
        Ok(())
    }

    fn contains_class(&self, token: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == token)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        if name.is_empty() {
            return Err(DomError::Platform("InvalidCharacterError".into()));
        }
        let mut attributes = self.attributes.borrow_mut();
        match attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        self.attributes.borrow_mut().retain(|(n, _)| n != name);
        Ok(())
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes.borrow().iter().any(|(n, _)| n == name)
    }

    fn inline_style(&self, property: &str) -> String {
        self.inline
            .borrow()
            .get(property)
            .cloned()
            .unwrap_or_default()
    }

    fn set_inline_style(&self, property: &str, value: &str) -> Result<()> {
        if self.reject_style.get() {
            return Err(DomError::Platform("NoModificationAllowedError".into()));
        }
        self.set_style(property, value);
        Ok(())
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        if !self.doc.state.borrow().styling {
            return None;
        }
        if !self.attached.get() {
            return Some(String::new());
        }
        let inline = self.inline_style(property);
        if !inline.is_empty() {
            return Some(inline);
        }
        match property {
            "display" => Some(self.doc.cascade_display(&self.tag)),
            "visibility" => Some("visible".to_string()),
            _ => Some(String::new()),
        }
    }

    fn stashed_display(&self) -> Option<String> {
        self.stash.borrow().clone()
    }

    fn stash_display(&self, value: Option<&str>) {
        *self.stash.borrow_mut() = value.map(str::to_string);
    }
}

/// A bare text node.
#[derive(Default)]
pub struct FakeText {
    pub data: RefCell<String>,
}

impl TextSink for FakeText {
    fn set_text_content(&self, text: &str) {
        *self.data.borrow_mut() = text.to_string();
    }
}
