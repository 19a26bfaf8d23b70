//! Loading Indicator Component

use leptos::prelude::*;

/// Centered spinner with a screen-reader label
#[component]
pub fn LoadingIndicator(
    /// Height class of the centering container
    #[prop(default = "min-h-screen")]
    height_class: &'static str,
    /// Border color class of the spinner
    #[prop(default = "border-blue-700")]
    spinner_color: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("flex justify-center items-center {}", height_class) role="status">
            <div class=format!("animate-spin rounded-full h-12 w-12 border-b-2 {}", spinner_color)></div>
            <span class="sr-only">"Laddar..."</span>
        </div>
    }
}
