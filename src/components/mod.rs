//! UI Components
//!
//! Reusable Leptos components.

mod error_banner;
mod item_list;
mod item_row;
mod new_item_form;

pub use error_banner::ErrorBanner;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
