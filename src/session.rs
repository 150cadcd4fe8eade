use anyhow::anyhow;
use domops_core::DomOps;
use web_sys as web;

use crate::probe::DocumentProbe;

/// Show/hide/toggle bound to one browser document and its display cache.
pub type WebDomOps = DomOps<DocumentProbe>;

#[inline]
pub fn for_document(document: web::Document) -> WebDomOps {
    DomOps::new(DocumentProbe::new(document))
}

pub fn for_window() -> anyhow::Result<WebDomOps> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    Ok(for_document(document))
}
