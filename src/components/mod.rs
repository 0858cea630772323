//! UI Components
//!
//! Reusable Leptos components.

mod alert_notification;
mod item_list;
mod list_item;
mod new_item_form;

pub use alert_notification::AlertNotification;
pub use item_list::ItemList;
pub use list_item::ListItem;
pub use new_item_form::NewItemForm;
