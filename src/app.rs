//! DigiNativa Frontend App
//!
//! Navigation shell around the landing page, feature screen and dashboard.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DashboardFilters, FeatureManagement, LandingPage, NavBar, ProgressDashboard};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, View};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(config));
    let store = Store::new(AppState::default());
    provide_context(store);

    let time_period = Signal::derive(move || store.time_period().get());
    let category = Signal::derive(move || store.category().get());

    view! {
        <div class="min-h-screen bg-gray-50">
            <NavBar />
            {move || match store.active_view().get() {
                View::Landing => view! { <LandingPage /> }.into_any(),
                View::Features => view! { <FeatureManagement /> }.into_any(),
                View::Dashboard => view! {
                    <DashboardFilters />
                    <ProgressDashboard time_period=time_period category=category />
                }.into_any(),
            }}
        </div>
    }
}
