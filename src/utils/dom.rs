//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL path (e.g. `/docs/a.txt`).
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push a new URL path onto the browser history without reloading.
pub fn push_pathname(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

// =============================================================================
// Document Head
// =============================================================================

/// Set the document title.
pub fn set_document_title(title: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
    {
        document.set_title(title);
    }
}

/// Point the document's favicon link at the given URL.
///
/// Creates the `<link rel="icon">` element if the page doesn't have one.
pub fn set_favicon(href: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    let existing = document
        .query_selector("link[rel~='icon']")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlLinkElement>().ok());

    let link = match existing {
        Some(link) => link,
        None => {
            let Some(head) = document.head() else { return };
            let Ok(el) = document.create_element("link") else {
                return;
            };
            let Ok(link) = el.dyn_into::<web_sys::HtmlLinkElement>() else {
                return;
            };
            link.set_rel("icon");
            let _ = head.append_child(&link);
            link
        }
    };

    link.set_href(href);
}

/// Apply the theme as a `data-theme` attribute on the document element.
///
/// The stylesheet keys its color variables off this attribute.
pub fn set_theme_attribute(dark: bool) {
    if let Some(document) = window().and_then(|w| w.document())
        && let Some(root) = document.document_element()
    {
        let _ = root.set_attribute("data-theme", if dark { "dark" } else { "light" });
    }
}

// =============================================================================
// Clipboard
// =============================================================================

/// Copy text to the clipboard.
///
/// Resolves to `true` on success. Clipboard access can be denied by the
/// browser; the caller decides how to surface failure.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = window() else { return false };
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
}
