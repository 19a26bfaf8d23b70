//! Status Badge Component

use leptos::prelude::*;

use crate::format::status_badge_class;
use crate::models::FeatureStatus;

/// Colored pill showing a feature's raw status
#[component]
pub fn StatusBadge(status: FeatureStatus) -> impl IntoView {
    let class = format!("px-2 py-1 rounded-full text-sm {}", status_badge_class(&status));
    view! { <span class=class>{status.to_string()}</span> }
}
