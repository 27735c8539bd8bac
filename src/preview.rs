//! Image Preview
//!
//! Reads a picked file into a `data:` URI for a local `<img>` preview.

use js_sys::Promise;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, HtmlInputElement};

use crate::error::ApiError;

/// First file of a file input; the rest of a multi-selection is ignored
pub fn first_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

pub async fn read_data_url(file: &File) -> Result<String, ApiError> {
    let reader = FileReader::new()?;
    let done = Promise::new(&mut |resolve, _reject| {
        let on_loadend = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        reader.set_onloadend(Some(on_loadend.unchecked_ref()));
    });

    reader.read_as_data_url(file)?;
    JsFuture::from(done).await?;

    // loadend also fires on failure, with no result
    reader
        .result()?
        .as_string()
        .filter(|uri| !uri.is_empty())
        .ok_or_else(|| ApiError::Browser(format!("could not read {}", file.name())))
}
