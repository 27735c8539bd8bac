//! API Configuration
//!
//! Base URL of the storefront backend. A WASM bundle has no process
//! environment, so the variable is read when the bundle is built.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Used when `STOREFRONT_API_URL` is unset or empty
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9000";

/// Characters escaped in a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::new(option_env!("STOREFRONT_API_URL").unwrap_or_default())
    }

    /// Blank input falls back to the default; trailing slashes are dropped
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_BASE_URL } else { trimmed };
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    pub fn image_url(&self, image_name: &str) -> String {
        format!(
            "{}/image/{}",
            self.base_url,
            utf8_percent_encode(image_name, PATH_SEGMENT)
        )
    }
}
