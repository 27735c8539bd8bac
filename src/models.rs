//! Frontend Models
//!
//! Wire types for the storefront backend.

use serde::Deserialize;

use crate::error::ApiError;

/// Item as listed by `GET /items`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    /// Some backend builds leave the id out of listings
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub image_name: String,
}

/// Body of `GET /items`. An empty catalogue may come back as `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemListResponse {
    #[serde(default)]
    pub items: Option<Vec<Item>>,
}

impl ItemListResponse {
    pub fn into_items(self) -> Vec<Item> {
        self.items.unwrap_or_default()
    }
}

/// Body of `POST /items`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateItemResponse {
    #[serde(default)]
    pub message: Option<String>,
}

pub fn decode_item_list(body: &str) -> Result<Vec<Item>, ApiError> {
    let response: ItemListResponse = serde_json::from_str(body)?;
    Ok(response.into_items())
}

/// Server message from a create response, if the body carries one
pub fn decode_create_message(body: &str) -> Option<String> {
    serde_json::from_str::<CreateItemResponse>(body)
        .ok()
        .and_then(|response| response.message)
        .filter(|message| !message.is_empty())
}
