//! Client-side download artifact generation.
//!
//! Turns the aggregator's URL list into a downloadable text file using a
//! Blob object URL and a synthetic anchor click. This is the collaborator
//! boundary for "download folder contents": the core only produces the list.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Url};

/// Errors from building the download artifact.
#[derive(Debug, Clone)]
pub enum DownloadError {
    /// Browser document not available
    NoDocument,
    /// Blob or object URL creation failed
    BlobCreationFailed,
    /// Anchor element creation failed
    AnchorCreationFailed,
}

impl std::fmt::Display for DownloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDocument => write!(f, "Browser document not available"),
            Self::BlobCreationFailed => write!(f, "Failed to create download blob"),
            Self::AnchorCreationFailed => write!(f, "Failed to create download link"),
        }
    }
}

impl std::error::Error for DownloadError {}

/// Save a list of download URLs as `{folder_name}_download_urls.txt`.
///
/// Joins the URLs with newlines into a `text/plain` blob and triggers the
/// browser's download flow. The caller is expected to have checked for an
/// empty list already (an empty artifact is useless to the user).
pub fn save_url_list(folder_name: &str, urls: &[String]) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DownloadError::NoDocument)?;

    let content = urls.join("\n");
    let parts = js_sys::Array::new();
    parts.push(&content.into());

    let options = BlobPropertyBag::new();
    options.set_type("text/plain;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| DownloadError::BlobCreationFailed)?;
    let object_url =
        Url::create_object_url_with_blob(&blob).map_err(|_| DownloadError::BlobCreationFailed)?;

    let anchor = document
        .create_element("a")
        .map_err(|_| DownloadError::AnchorCreationFailed)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| DownloadError::AnchorCreationFailed)?;
    anchor.set_href(&object_url);
    anchor.set_download(&format!("{}_download_urls.txt", folder_name));

    // The anchor must be in the document for click() to work everywhere.
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
    } else {
        anchor.click();
    }

    let _ = Url::revoke_object_url(&object_url);
    Ok(())
}
