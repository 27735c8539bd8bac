//! Item Endpoints
//!
//! `GET /items` and `POST /items`.

use web_sys::{AbortSignal, File, FormData, Request, RequestInit, RequestMode};

use super::{read_text, send, ResponseStatus};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{self, Item};
use crate::submission::{Draft, Part};

/// Outcome of a create call that reached the server
#[derive(Debug, Clone, PartialEq)]
pub struct Created {
    pub status: ResponseStatus,
    pub message: Option<String>,
}

pub async fn list_items(config: &ApiConfig, signal: Option<&AbortSignal>) -> Result<Vec<Item>, ApiError> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    init.set_signal(signal);

    let request = Request::new_with_str_and_init(&config.items_url(), &init)?;
    let headers = request.headers();
    headers.set("Accept", "application/json")?;
    headers.set("Content-Type", "application/json")?;

    let response = send(&request).await?;
    let status = ResponseStatus::of(&response);
    if !status.is_success() {
        return Err(status.into_error());
    }
    let body = read_text(&response).await?;
    models::decode_item_list(&body)
}

/// Post a draft as multipart. Any HTTP response counts as `Ok`; the caller
/// decides what a non-2xx status means.
pub async fn create_item(
    config: &ApiConfig,
    draft: &Draft<File>,
    signal: Option<&AbortSignal>,
) -> Result<Created, ApiError> {
    let form = form_data(draft)?;

    // No content-type: the browser adds the multipart boundary itself.
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_body(&form);
    init.set_signal(signal);

    let request = Request::new_with_str_and_init(&config.items_url(), &init)?;
    let response = send(&request).await?;
    let status = ResponseStatus::of(&response);
    let message = match read_text(&response).await {
        Ok(body) => models::decode_create_message(&body),
        Err(ApiError::Aborted) => return Err(ApiError::Aborted),
        Err(_) => None,
    };
    Ok(Created { status, message })
}

fn form_data(draft: &Draft<File>) -> Result<FormData, ApiError> {
    let form = FormData::new()?;
    for part in draft.parts() {
        match part {
            Part::Text { field, value } => form.append_with_str(field, value)?,
            Part::File { field, file } => form.append_with_blob_and_filename(field, file, &file.name())?,
        }
    }
    Ok(form)
}
