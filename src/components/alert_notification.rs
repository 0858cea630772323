//! Alert Notification Component
//!
//! Transient banner acknowledging a deletion, with a manual close button.

use leptos::prelude::*;

use crate::context::AlertContext;

/// Auto-dismissing alert banner
#[component]
pub fn AlertNotification() -> impl IntoView {
    let alert = use_context::<AlertContext>().expect("AlertContext should be provided");

    view! {
        <div
            class=move || if alert.visible.get() { "alert show" } else { "alert" }
            role="status"
        >
            <span class="alert-text">"Item removed from the list."</span>
            <button class="alert-close" aria-label="Dismiss notification" on:click=move |_| alert.dismiss()>
                "×"
            </button>
        </div>
    }
}
