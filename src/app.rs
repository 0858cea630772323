//! QuickList Frontend App
//!
//! Root component: restores persisted state and lays out the widget.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AlertNotification, ItemList, NewItemForm};
use crate::context::AlertContext;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // LocalStorage is synchronous, so state is restored before first render
    let store: AppStore = Store::new(AppState::restore());

    // Provide context to all children
    provide_context(store);
    provide_context(AlertContext::new());

    view! {
        <main class="app-layout">
            <h1>"QuickList"</h1>

            <NewItemForm />

            <ItemList />

            <p class="item-count">{move || format!("{} items", store.items().get().len())}</p>

            <AlertNotification />
        </main>
    }
}
