//! Browser side effects: scrolling, focus, blocking alerts and file downloads.
//!
//! Outside the browser these are logged no-ops, except downloads which land in the
//! user's download directory.

use crate::shared::errors::{AppError, Result};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Download("No document available".to_string()))
}

/// Scroll a container so its newest content is visible
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_bottom(container_id: &str) {
    if let Ok(document) = document() {
        if let Some(container) = document.get_element_by_id(container_id) {
            container.set_scroll_top(container.scroll_height());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_bottom(_container_id: &str) {}

/// Move keyboard focus to an element
#[cfg(target_arch = "wasm32")]
pub fn focus(element_id: &str) {
    let element = document()
        .ok()
        .and_then(|d| d.get_element_by_id(element_id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());

    if let Some(element) = element {
        if let Err(e) = element.focus() {
            tracing::debug!("Failed to focus #{}: {:?}", element_id, e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn focus(_element_id: &str) {}

/// Blocking `window.alert`
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    tracing::warn!(alert = message, "Alert (no browser window)");
}

/// Offer `contents` as a JSON file download named `file_name`
#[cfg(target_arch = "wasm32")]
pub fn download_json(file_name: &str, contents: &str) -> Result<()> {
    let js_error = |e: wasm_bindgen::JsValue| AppError::Download(format!("{:?}", e));

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| AppError::Download("No document body".to_string()))?;
    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| AppError::Download("Failed to create anchor".to_string()))?;

    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error)?;
    web_sys::Url::revoke_object_url(&url).map_err(js_error)?;

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download_json(file_name: &str, contents: &str) -> Result<()> {
    let dir = dirs::download_dir()
        .or_else(|| std::env::current_dir().ok())
        .ok_or_else(|| AppError::Download("No download directory".to_string()))?;
    let path = dir.join(file_name);
    std::fs::write(&path, contents)?;
    tracing::info!(path = %path.display(), "Chat export saved");
    Ok(())
}
