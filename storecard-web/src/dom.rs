use storecard_core::PurchaseSurface;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

#[derive(Debug, Error)]
pub enum WebError {
    #[error("`window` is unavailable outside a browser context")]
    NoWindow,
    #[error("`document` is unavailable")]
    NoDocument,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("popup was blocked when opening {0}")]
    PopupBlocked(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns [`WebError::NoWindow`] when executed outside a browser context.
pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Returns an error when the window or its document cannot be accessed.
pub fn document() -> Result<Document, WebError> {
    window()?.document().ok_or(WebError::NoDocument)
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Open `url` in a new browsing context without waiting on it.
///
/// # Errors
/// Returns an error if the window is unavailable, the call throws, or a popup blocker
/// swallowed the new context.
pub fn open_in_new_tab(url: &str) -> Result<(), WebError> {
    match window()?.open_with_url_and_target(url, "_blank")? {
        Some(_) => Ok(()),
        None => Err(WebError::PopupBlocked(url.to_string())),
    }
}

/// Show a blocking alert dialog.
///
/// # Errors
/// Returns an error if the window is unavailable or the alert call throws.
pub fn alert(message: &str) -> Result<(), WebError> {
    window()?.alert_with_message(message)?;
    Ok(())
}

/// Purchase side effects backed by `window.open` and `window.alert`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserSurface;

impl PurchaseSurface for BrowserSurface {
    fn open_link(&self, link: &str) {
        log::info!("opening payment link {link}");
        if let Err(err) = open_in_new_tab(link) {
            log::error!("failed to open payment link: {err}");
            console_error(&format!("Failed to open payment link: {err}"));
        }
    }

    fn notify(&self, message: &str) {
        if let Err(err) = alert(message) {
            log::error!("failed to show purchase notice: {err}");
            console_error(&format!("Failed to show purchase notice: {err}"));
        }
    }
}
