//! Dashboard Filters Component
//!
//! Time period and category selects backed by the app store.

use leptos::prelude::*;

use crate::models::{Category, TimePeriod};
use crate::store::{use_app_store, AppStateStoreFields};

const SELECT_CLASS: &str = "border rounded py-2 px-3 text-gray-700 bg-white";

#[component]
pub fn DashboardFilters() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="max-w-4xl mx-auto px-4 pt-4 flex gap-4">
            <label class="flex flex-col text-sm text-gray-600">
                "Tidsperiod"
                <select
                    class=SELECT_CLASS
                    prop:value=move || store.time_period().get().as_str()
                    on:change=move |ev| {
                        let period = TimePeriod::parse(&event_target_value(&ev)).unwrap_or_default();
                        store.time_period().set(period);
                    }
                >
                    {TimePeriod::ALL_OPTIONS.iter().map(|(period, label)| view! {
                        <option value=period.as_str()>{*label}</option>
                    }).collect_view()}
                </select>
            </label>
            <label class="flex flex-col text-sm text-gray-600">
                "Kategori"
                <select
                    class=SELECT_CLASS
                    prop:value=move || store.category().get().as_str()
                    on:change=move |ev| {
                        let category = Category::parse(&event_target_value(&ev)).unwrap_or_default();
                        store.category().set(category);
                    }
                >
                    {Category::ALL_OPTIONS.iter().map(|(category, label)| view! {
                        <option value=category.as_str()>{*label}</option>
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}
