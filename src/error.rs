//! API Errors
//!
//! Everything that can go wrong between a component and the backend.
//! Components log these and carry on; none of them reach the page.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The fetch promise rejected (offline, DNS, CORS...)
    #[error("network error: {0}")]
    Network(String),
    /// Cancelled because the owning component went away
    #[error("request aborted")]
    Aborted,
    #[error("unexpected status: {code} {text}")]
    Status { code: u16, text: String },
    #[error("decode error: {0}")]
    Decode(String),
    /// A browser API needed to build or send the request failed
    #[error("browser error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Classify a rejected fetch promise
    pub fn network(err: JsValue) -> Self {
        if is_abort(&err) {
            Self::Aborted
        } else {
            Self::Network(describe(&err))
        }
    }
}

impl From<JsValue> for ApiError {
    fn from(err: JsValue) -> Self {
        if is_abort(&err) {
            Self::Aborted
        } else {
            Self::Browser(describe(&err))
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

fn is_abort(err: &JsValue) -> bool {
    err.dyn_ref::<web_sys::DomException>()
        .map_or(false, |e| e.name() == "AbortError")
}

fn describe(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        String::from(e.message())
    } else if let Some(s) = err.as_string() {
        s
    } else {
        format!("{:?}", err)
    }
}
