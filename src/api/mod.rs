//! Backend API Bindings
//!
//! Browser fetch wrappers for the storefront backend, organized by resource.

mod item;

use std::fmt;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, AbortSignal, Request, Response};

use crate::error::ApiError;

pub use item::*;

/// Status line of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseStatus {
    pub code: u16,
    pub text: String,
}

impl ResponseStatus {
    fn of(response: &Response) -> Self {
        Self {
            code: response.status(),
            text: response.status_text(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    pub fn into_error(self) -> ApiError {
        ApiError::Status {
            code: self.code,
            text: self.text,
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} {}", self.code, self.text)
        }
    }
}

/// Abort handle for the requests of one component instance.
/// Aborting is permanent: the component is going away.
pub struct RequestScope {
    controller: Option<AbortController>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self {
            controller: AbortController::new().ok(),
        }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    pub fn abort(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.controller
            .as_ref()
            .map_or(false, |controller| controller.signal().aborted())
    }
}

async fn send(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(ApiError::network)?;
    Ok(value.dyn_into::<Response>()?)
}

async fn read_text(response: &Response) -> Result<String, ApiError> {
    let text = JsFuture::from(response.text()?)
        .await
        .map_err(ApiError::network)?;
    text.as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))
}
