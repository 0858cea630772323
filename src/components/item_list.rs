//! Item List Component
//!
//! Projects the store's items onto the visible list.

use leptos::prelude::*;

use crate::components::ListItem;
use crate::store::{use_app_store, AppStateStoreFields};

/// The ordered list of items
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="item-list">
            <For
                each=move || store.items().get()
                key=|item| item.id
                children=move |item| view! { <ListItem item=item /> }
            />
        </ul>
    }
}
