//! Handoff of the `PageContext` from the SSR shell to the hydrating app.
//!
//! DESIGN
//! ======
//! The server renders the context as JSON inside a
//! `<script type="application/json">` element. `<` is escaped as `\u003c` so
//! user-controlled strings cannot close the script element early.

#[cfg(test)]
#[path = "page_props_test.rs"]
mod page_props_test;

use crate::state::page::PageContext;

/// `id` of the script element carrying the payload.
pub const ELEMENT_ID: &str = "page-context";

/// Serialize `page` for embedding in HTML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(page: &PageContext) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(page)?;
    Ok(json.replace('<', "\\u003c"))
}

/// Parse a payload produced by [`encode`].
///
/// # Errors
///
/// Returns an error if `raw` is not a valid `PageContext` document.
pub fn decode(raw: &str) -> Result<PageContext, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Read the embedded payload from the current document.
///
/// Falls back to an anonymous context when the element is missing or
/// malformed, matching what the server renders without an auth header.
#[cfg(feature = "hydrate")]
pub fn read_embedded() -> PageContext {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        log::warn!("page context element #{ELEMENT_ID} missing");
        return PageContext::default();
    };
    decode(&raw).unwrap_or_else(|err| {
        log::warn!("page context payload malformed: {err}");
        PageContext::default()
    })
}
