//! Error handling for browser bindings

use pdfpro_app::NavigationError;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Errors raised while talking to the browser
#[derive(Error, Debug)]
pub enum WebError {
    /// A browser global (window, document) is missing.
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),

    /// JavaScript interop error.
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// Hash navigation failed.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// The host-provided converter rejected the batch.
    #[error("conversion failed: {0}")]
    Conversion(String),
}

impl WebError {
    /// Best-effort message extraction from a thrown JS value
    pub fn js_message(value: &JsValue) -> String {
        if let Some(message) = value.as_string() {
            return message;
        }
        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            return String::from(error.message());
        }
        "Unknown JavaScript error".to_string()
    }
}

impl From<JsValue> for WebError {
    fn from(js_val: JsValue) -> Self {
        WebError::JavaScript(Self::js_message(&js_val))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result type for browser operations
pub type WebResult<T> = Result<T, WebError>;
