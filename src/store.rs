//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! helper writes the full list through to storage, so the persisted snapshot
//! always matches the in-memory list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{self, Item};
use crate::storage;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All list items, in insertion order
    pub items: Vec<Item>,
    /// Next item identifier; session-scoped, monotonic, never reused
    pub next_id: u32,
}

impl AppState {
    /// Restore the persisted snapshot, or fall back to the seed list when
    /// nothing usable has been stored yet.
    pub fn restore() -> Self {
        let items = match storage::load() {
            Some(saved) => {
                web_sys::console::log_1(
                    &format!("[STORE] Restored {} saved items", saved.len()).into(),
                );
                models::items_from_snapshot(saved)
            }
            None => models::seed_items(),
        };
        let next_id = items.len() as u32 + 1;
        Self { items, next_id }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Write the current list through to storage
fn persist(store: &AppStore) {
    storage::save(&models::snapshot_of(&store.items().read_untracked()));
}

/// Append a new item with a fresh identifier and persist
pub fn store_add_item(store: &AppStore, text: String) {
    let id = store.next_id().get_untracked();
    store.next_id().set(id + 1);
    store.items().write().push(Item::new(id, text));
    persist(store);
}

/// Flip an item's completed flag and persist
pub fn store_toggle_item(store: &AppStore, item_id: u32) {
    store
        .items()
        .write()
        .iter_mut()
        .find(|item| item.id == item_id)
        .map(|item| item.completed = !item.completed);
    persist(store);
}

/// Remove an item from the store by ID and persist
pub fn store_remove_item(store: &AppStore, item_id: u32) {
    store.items().write().retain(|item| item.id != item_id);
    persist(store);
}
