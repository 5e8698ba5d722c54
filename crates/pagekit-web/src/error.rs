//! Error handling for the browser shell

use pagekit_core::PageError;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors raised while booting against the live document.
#[derive(Error, Debug)]
pub enum WebError {
    /// JavaScript interop error.
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// No `window.document` in this global scope.
    #[error("no document available")]
    NoDocument,
}

impl From<JsValue> for WebError {
    fn from(js_val: JsValue) -> Self {
        WebError::JavaScript(describe(&js_val))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Map a rejected DOM call into the core error type.
pub(crate) fn dom_error(js_val: JsValue) -> PageError {
    PageError::Dom(describe(&js_val))
}

fn describe(js_val: &JsValue) -> String {
    js_val
        .as_string()
        .unwrap_or_else(|| format!("{js_val:?}"))
}

/// Result type for browser operations
pub type WebResult<T> = Result<T, WebError>;
