//! Application Context
//!
//! Shared settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ApiConfig;

/// App-wide settings provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    /// Backend location for every component
    pub config: ApiConfig,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

/// Backend config from context, or from the build environment when the
/// component is mounted outside the app shell
pub fn use_api_config() -> ApiConfig {
    use_context::<AppContext>()
        .map(|ctx| ctx.config)
        .unwrap_or_else(ApiConfig::from_env)
}
