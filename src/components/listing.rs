//! Listing Component
//!
//! Form for putting a new item up for sale: name, category and a photo,
//! posted to `POST /items` as multipart.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use crate::api::{self, RequestScope};
use crate::context::use_api_config;
use crate::error::ApiError;
use crate::logging;
use crate::preview;
use crate::submission::{ListingForm, CATEGORY_FIELD, IMAGE_FIELD, NAME_FIELD};

const TAG: &str = "Listing";

/// New item form
#[component]
pub fn Listing(
    /// Called after the server answers a submission
    #[prop(optional, into)]
    on_listing_completed: Option<Callback<()>>,
) -> impl IntoView {
    let config = use_api_config();
    let (form, set_form) = signal_local(ListingForm::<File>::default());
    let scope = StoredValue::new_local(RequestScope::new());

    on_cleanup(move || {
        scope.try_with_value(RequestScope::abort);
    });

    let on_value_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let (field, value) = (input.name(), input.value());
        set_form.update(|form| form.edit_text(&field, value));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = preview::first_file(&input);
        let ticket = set_form
            .try_update(|form| form.select_image(file.clone()))
            .unwrap_or_default();

        let Some(file) = file else {
            return;
        };
        spawn_local(async move {
            match preview::read_data_url(&file).await {
                Ok(uri) => {
                    set_form.try_update(|form| form.show_preview(ticket, uri));
                }
                Err(e) => logging::warn(TAG, &format!("preview error: {}", e)),
            }
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(current) = set_form.try_update(ListingForm::begin_submit).flatten() else {
            logging::warn(TAG, "submission blocked: name and image are required");
            return;
        };

        let config = config.clone();
        let signal = scope.try_with_value(RequestScope::signal).flatten();

        spawn_local(async move {
            let result = api::create_item(&config, &current, signal.as_ref()).await;
            if scope.try_with_value(RequestScope::is_aborted).unwrap_or(true) {
                return;
            }
            match &result {
                Ok(created) => {
                    logging::info(TAG, &format!("POST status: {}", created.status));
                    if !created.status.is_success() {
                        logging::error(TAG, &format!("POST rejected: {}", created.status.clone().into_error()));
                    }
                    if let Some(message) = &created.message {
                        logging::info(TAG, message);
                    }
                }
                Err(ApiError::Aborted) => {}
                Err(e) => logging::error(TAG, &format!("POST error: {}", e)),
            }
            let notify = set_form.try_update(|form| form.settle(&result)).unwrap_or(false);
            if notify {
                if let Some(callback) = on_listing_completed {
                    callback.try_run(());
                }
            }
        });
    };

    view! {
        <div class="Listing">
            <form on:submit=on_submit data-state=move || form.with(|form| form.phase.as_str())>
                <div>
                    <input
                        type="text"
                        name=NAME_FIELD
                        id=NAME_FIELD
                        placeholder="name"
                        required
                        prop:value=move || form.with(|form| form.draft.name.clone())
                        on:input=on_value_change
                    />
                    <input
                        type="text"
                        name=CATEGORY_FIELD
                        id=CATEGORY_FIELD
                        placeholder="category"
                        prop:value=move || form.with(|form| form.draft.category.clone())
                        on:input=on_value_change
                    />
                    <input
                        type="file"
                        name=IMAGE_FIELD
                        id=IMAGE_FIELD
                        required
                        on:change=on_file_change
                    />
                    {move || form.with(|form| form.preview.clone()).map(|src| view! {
                        <img src=src alt="Preview" style="width: 100px; height: 100px;" />
                    })}
                    <button type="submit">"List this item"</button>
                </div>
            </form>
        </div>
    }
}
