//! Storefront App
//!
//! Page shell: the listing form above the item grid.

use leptos::prelude::*;

use crate::components::{ItemList, Listing};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::logging;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    logging::info("App", &format!("API base URL: {}", config.base_url()));
    provide_context(AppContext::new(config));

    // Raised by a finished listing, lowered once the grid has reloaded
    let (reload, set_reload) = signal(true);

    view! {
        <div>
            <header class="Title">
                <p>
                    <b>"Storefront"</b>
                </p>
            </header>
            <div>
                <Listing on_listing_completed=move |_| set_reload.set(true) />
            </div>
            <div>
                <ItemList reload=reload on_load_completed=move |_| set_reload.set(false) />
            </div>
        </div>
    }
}
