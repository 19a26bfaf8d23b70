//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, TimePeriod};

/// Top-level views reachable from the navigation bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Landing,
    Features,
    Dashboard,
}

impl View {
    pub const ALL: &'static [(View, &'static str)] = &[
        (View::Landing, "Hem"),
        (View::Features, "Funktioner"),
        (View::Dashboard, "Framsteg"),
    ];
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Currently shown view
    pub active_view: View,
    /// Dashboard time period filter
    pub time_period: TimePeriod,
    /// Dashboard category filter
    pub category: Category,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
