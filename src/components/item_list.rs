//! Item List Component
//!
//! Fetches the catalogue from `GET /items` and renders it as a grid of
//! tiles. The page turns pink while the list is on screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RequestScope};
use crate::config::ApiConfig;
use crate::context::use_api_config;
use crate::error::ApiError;
use crate::logging;
use crate::models::Item;

const TAG: &str = "ItemList";

/// Page background while the list is mounted
pub const PAGE_BACKGROUND: &str = "#FFC0CB";

/// Render data for one item
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Position first: ids are not guaranteed unique, or present
    pub key: (usize, u32),
    pub name: String,
    pub category: String,
    pub image_url: String,
}

pub fn tiles(config: &ApiConfig, items: &[Item]) -> Vec<Tile> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Tile {
            key: (index, item.id),
            name: item.name.clone(),
            category: item.category.clone(),
            image_url: config.image_url(&item.image_name),
        })
        .collect()
}

/// A fetch happens when the flag is true and was not already true
pub fn should_fetch(previous: Option<bool>, reload: bool) -> bool {
    reload && previous != Some(true)
}

/// Store a fetch result. Returns true when the completion callback is due:
/// the list was replaced in full. Failures leave it untouched.
pub fn apply_listing(items: &mut Vec<Item>, result: Result<Vec<Item>, ApiError>) -> bool {
    match result {
        Ok(loaded) => {
            *items = loaded;
            true
        }
        Err(_) => false,
    }
}

/// Item grid
#[component]
pub fn ItemList(
    /// Fetch when this becomes true
    #[prop(into, default = Signal::stored(true))]
    reload: Signal<bool>,
    /// Called once after each successful fetch
    #[prop(optional, into)]
    on_load_completed: Option<Callback<()>>,
) -> impl IntoView {
    let config = use_api_config();
    let (items, set_items) = signal(Vec::<Item>::new());
    let scope = StoredValue::new_local(RequestScope::new());

    leptos_theme::use_body_style("background-color", PAGE_BACKGROUND);
    on_cleanup(move || {
        scope.try_with_value(RequestScope::abort);
    });

    let fetch_config = config.clone();
    let fetch_items = move || {
        let config = fetch_config.clone();
        let signal = scope.try_with_value(RequestScope::signal).flatten();
        spawn_local(async move {
            let result = api::list_items(&config, signal.as_ref()).await;
            // Gone while the request was in flight
            if scope.try_with_value(RequestScope::is_aborted).unwrap_or(true) {
                return;
            }
            match &result {
                Ok(loaded) => logging::info(TAG, &format!("GET success: {} items", loaded.len())),
                Err(ApiError::Aborted) => {}
                Err(e) => logging::error(TAG, &format!("GET error: {}", e)),
            }
            let notify = set_items
                .try_update(|items| apply_listing(items, result))
                .unwrap_or(false);
            if notify {
                if let Some(callback) = on_load_completed {
                    callback.try_run(());
                }
            }
        });
    };

    Effect::new(move |previous: Option<bool>| {
        let reload = reload.get();
        if should_fetch(previous, reload) {
            fetch_items();
        }
        reload
    });

    view! {
        <div style="display: flex; flex-direction: row; flex-wrap: wrap; justify-content: center;">
            <For
                each=move || tiles(&config, &items.get())
                key=|tile| tile.key
                children=|tile| {
                    view! {
                        <div class="ItemList" style="margin: 10px;">
                            <img
                                src=tile.image_url
                                alt=tile.name.clone()
                                style="width: 120px; height: 120px;"
                            />
                            <p>
                                <span>"Name: " {tile.name}</span>
                                <br />
                                <span>"Category: " {tile.category}</span>
                            </p>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, category: &str, image_name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            category: category.to_string(),
            image_name: image_name.to_string(),
        }
    }

    #[test]
    fn one_tile_per_item() {
        let config = ApiConfig::new("http://127.0.0.1:9000");
        let items = vec![
            item(1, "jacket", "fashion", "a1.jpg"),
            item(2, "Widget", "Tools", "b2.jpg"),
            item(3, "kettle", "kitchen", "c3.jpg"),
        ];

        let tiles = tiles(&config, &items);
        assert_eq!(tiles.len(), 3);
        assert_eq!(
            tiles[1],
            Tile {
                key: (1, 2),
                name: "Widget".to_string(),
                category: "Tools".to_string(),
                image_url: "http://127.0.0.1:9000/image/b2.jpg".to_string(),
            }
        );
        for (tile, item) in tiles.iter().zip(&items) {
            assert_eq!(tile.image_url, config.image_url(&item.image_name));
        }
    }

    #[test]
    fn duplicate_ids_still_get_distinct_keys() {
        let config = ApiConfig::new("http://127.0.0.1:9000");
        let items = vec![item(0, "a", "", "a.jpg"), item(0, "b", "", "b.jpg")];
        let tiles = tiles(&config, &items);
        assert_ne!(tiles[0].key, tiles[1].key);
    }

    #[test]
    fn empty_listing_has_no_tiles() {
        assert!(tiles(&ApiConfig::new(""), &[]).is_empty());
    }

    #[test]
    fn successful_fetch_replaces_list_and_notifies_once() {
        let mut items = vec![item(1, "old", "", "old.jpg"), item(2, "older", "", "older.jpg")];
        let loaded = vec![item(7, "Widget", "Tools", "w.jpg")];

        let mut notifications = 0;
        if apply_listing(&mut items, Ok(loaded.clone())) {
            notifications += 1;
        }
        assert_eq!(items, loaded);
        assert_eq!(notifications, 1);
    }

    #[test]
    fn last_fetch_wins_without_merging() {
        let mut items = Vec::new();
        apply_listing(&mut items, Ok(vec![item(1, "a", "", "a.jpg"), item(1, "a", "", "a.jpg")]));
        assert_eq!(items.len(), 2);

        apply_listing(&mut items, Ok(Vec::new()));
        assert!(items.is_empty());
    }

    #[test]
    fn failed_fetch_keeps_list_and_skips_callback() {
        let before = vec![item(1, "jacket", "fashion", "a1.jpg")];
        for err in [
            ApiError::Network("Failed to fetch".to_string()),
            ApiError::Status { code: 500, text: "Internal Server Error".to_string() },
            ApiError::Decode("expected value".to_string()),
            ApiError::Aborted,
        ] {
            let mut items = before.clone();
            assert!(!apply_listing(&mut items, Err(err)));
            assert_eq!(items, before);
        }
    }

    #[test]
    fn fetches_on_mount_when_reload_is_true() {
        assert!(should_fetch(None, true));
        assert!(!should_fetch(None, false));
    }

    #[test]
    fn fetches_only_on_false_to_true() {
        assert!(should_fetch(Some(false), true));
        assert!(!should_fetch(Some(true), true));
        assert!(!should_fetch(Some(true), false));
        assert!(!should_fetch(Some(false), false));
    }

    #[test]
    fn toggle_sequence_fetches_once_per_rising_edge() {
        let flags = [true, true, false, true, true, false, false, true];
        let mut previous = None;
        let mut fetches = 0;
        for reload in flags {
            if should_fetch(previous, reload) {
                fetches += 1;
            }
            previous = Some(reload);
        }
        assert_eq!(fetches, 3);
    }
}
