//! Summary Panel Component

use leptos::prelude::*;

use crate::format::{completion_rate, long_date};
use crate::models::ProgressSummary;

#[component]
pub fn SummaryPanel(summary: ProgressSummary) -> impl IntoView {
    let last_activity = summary
        .last_activity
        .as_deref()
        .map(long_date)
        .unwrap_or_else(|| "–".to_string());

    view! {
        <section aria-label="Översikt" class="bg-white rounded-lg shadow-sm p-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <div>
                    <h2 class="text-sm text-gray-500">"Genomförda"</h2>
                    <p class="text-2xl font-bold text-blue-600">{summary.total_completed}</p>
                </div>
                <div>
                    <h2 class="text-sm text-gray-500">"Pågående"</h2>
                    <p class="text-2xl font-bold text-orange-500">{summary.total_in_progress}</p>
                </div>
                <div>
                    <h2 class="text-sm text-gray-500">"Genomförandegrad"</h2>
                    <p class="text-2xl font-bold text-green-600">{completion_rate(summary.completion_rate)}</p>
                </div>
            </div>
            <p class="text-sm text-gray-500 mt-4">"Senaste aktivitet: " {last_activity}</p>
        </section>
    }
}
