//! Navigation Bar Component
//!
//! Switches between the top-level views.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields, View};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="bg-white shadow-sm">
            <div class="container mx-auto px-4 flex gap-2 py-2">
                {View::ALL.iter().map(|(target, label)| {
                    let target = *target;
                    let is_active = move || store.active_view().get() == target;
                    view! {
                        <button
                            class=move || if is_active() {
                                "px-3 py-2 rounded font-medium bg-blue-600 text-white"
                            } else {
                                "px-3 py-2 rounded font-medium text-gray-700 hover:bg-gray-100"
                            }
                            aria-current=move || is_active().then_some("page")
                            on:click=move |_| store.active_view().set(target)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </nav>
    }
}
