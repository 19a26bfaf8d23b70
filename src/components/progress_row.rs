//! Progress Row Component
//!
//! One category with its completed/total counts and a progress bar.

use leptos::prelude::*;

use crate::format::{progress_value_attr, progress_width_style};
use crate::models::ProgressDetail;

#[component]
pub fn ProgressRow(detail: ProgressDetail) -> impl IntoView {
    let percentage = detail.progress_percentage;

    view! {
        <div class="border-b border-gray-200 pb-4">
            <div class="flex justify-between items-center mb-2">
                <span class="text-gray-700">{detail.category.clone()}</span>
                <span class="text-sm text-gray-500">
                    {format!("{} av {}", detail.completed, detail.total)}
                </span>
            </div>
            <div class="w-full bg-gray-200 rounded-full h-2.5">
                <div
                    class="bg-blue-600 h-2.5 rounded-full"
                    style=progress_width_style(percentage)
                    role="progressbar"
                    aria-valuenow=progress_value_attr(percentage)
                    aria-valuemin="0"
                    aria-valuemax="100"
                ></div>
            </div>
        </div>
    }
}
