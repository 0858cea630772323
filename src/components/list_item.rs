//! List Item Component
//!
//! A single row with checkbox, text and delete button.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AlertContext;
use crate::models::Item;
use crate::store::{store_remove_item, store_toggle_item, use_app_store};

/// How long the exit transition plays before the row is detached
const REMOVE_ANIMATION_MS: u32 = 300;

/// A single item row in the list
#[component]
pub fn ListItem(item: Item) -> impl IntoView {
    let store = use_app_store();
    let alert = use_context::<AlertContext>().expect("AlertContext should be provided");

    let id = item.id;
    let completed = item.completed;
    let text = item.text.clone();
    let (removing, set_removing) = signal(false);

    let delete_item = move |_| {
        set_removing.set(true);
        spawn_local(async move {
            // Let the fade/slide transition finish before removing the row
            TimeoutFuture::new(REMOVE_ANIMATION_MS).await;
            store_remove_item(&store, id);
            alert.show();
        });
    };

    view! {
        <li class=move || if removing.get() { "list-item removing" } else { "list-item" }>
            <input
                type="checkbox"
                class="item-checkbox"
                checked=completed
                on:change=move |_| store_toggle_item(&store, id)
            />

            // Text node rendering keeps user text inert as markup
            <span class="item-text">{text}</span>

            <button class="btn-delete" aria-label="Delete item" on:click=delete_item>
                "🗑"
            </button>
        </li>
    }
}
