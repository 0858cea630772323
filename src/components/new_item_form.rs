//! New Item Form Component
//!
//! Form for adding new list items, with empty-input validation.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::normalize_text;
use crate::store::{store_add_item, use_app_store};

/// Form with a text input and a submit button
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(text) = normalize_text(&new_text.get()) else {
            // Blocking validation message, then hand focus back; no mutation
            let _ = window().alert_with_message("Please add a valid item!");
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
            return;
        };

        store_add_item(&store, text);
        set_new_text.set(String::new());
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <div class="input-wrapper">
                <input
                    type="text"
                    node_ref=input_ref
                    placeholder="Add a new item..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_text.set(input.value());
                    }
                />
                <button type="submit" class="btn-add">"Add"</button>
            </div>
        </form>
    }
}
