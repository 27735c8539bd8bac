//! UI Components
//!
//! The storefront's two screens.

mod item_list;
mod listing;

pub use item_list::ItemList;
pub use listing::Listing;
