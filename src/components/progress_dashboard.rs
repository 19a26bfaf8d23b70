//! Progress Dashboard Component
//!
//! Summary metrics plus per-category progress bars. Both payloads are
//! fetched on every filter change and committed in a single state write.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{LoadingIndicator, ProgressRow, SummaryPanel};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::{Category, ProgressDetail, ProgressSummary, TimePeriod};
use crate::query::{LoadState, RequestTracker};

/// Shown for any failed dashboard fetch
pub const DASHBOARD_ERROR: &str = "Det gick inte att hämta framstegsdata. Försök igen senare.";

/// Everything the dashboard renders once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub summary: ProgressSummary,
    pub details: Vec<ProgressDetail>,
}

async fn load_dashboard(
    base: &str,
    time_period: TimePeriod,
    category: Category,
) -> Result<DashboardData, ApiError> {
    let summary = api::fetch_progress_summary(base).await?;
    let details = api::fetch_progress_details(base, time_period, category).await?;
    Ok(DashboardData { summary, details })
}

/// Collapse a load result into the render state; the cause of a failure is
/// only logged
fn settle(result: Result<DashboardData, ApiError>) -> LoadState<DashboardData> {
    match result {
        Ok(data) => LoadState::Loaded(data),
        Err(e) => {
            log::error!("[Dashboard] Error fetching progress data: {:?}", e);
            LoadState::Failed(DASHBOARD_ERROR.to_string())
        }
    }
}

#[component]
pub fn ProgressDashboard(
    #[prop(into)] time_period: Signal<TimePeriod>,
    #[prop(into)] category: Signal<Category>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::<DashboardData>::Loading);
    let tracker = StoredValue::new(RequestTracker::default());

    // Reload whenever a filter changes
    Effect::new(move |_| {
        let period = time_period.get();
        let category = category.get();
        let ticket = tracker.write_value().begin();
        set_state.set(LoadState::Loading);
        let base = ctx.api_base();
        log::info!("[Dashboard] Loading progress ({}, {})", period.as_str(), category.as_str());

        spawn_local(async move {
            let result = load_dashboard(&base, period, category).await;
            if !tracker.try_with_value(|t| t.is_current(ticket)).unwrap_or(false) {
                log::debug!("[Dashboard] Dropping stale response ({}, {})", period.as_str(), category.as_str());
                return;
            }
            set_state.set(settle(result));
        });
    });

    view! {
        {move || match state.get() {
            LoadState::Loading => view! {
                <LoadingIndicator height_class="min-h-[400px]" spinner_color="border-blue-600" />
            }.into_any(),
            LoadState::Failed(message) => view! {
                <div role="alert" class="bg-red-50 border-l-4 border-red-500 p-4 my-4">
                    <p class="text-red-700">{message}</p>
                </div>
            }.into_any(),
            LoadState::Loaded(data) => view! {
                <div class="max-w-4xl mx-auto p-4 space-y-6">
                    <h1 class="text-2xl font-semibold text-gray-800 mb-6">"Din framstegsdashboard"</h1>

                    <SummaryPanel summary=data.summary />

                    <section
                        aria-label="Detaljerad framstegsöversikt"
                        class="bg-white rounded-lg shadow-sm p-6"
                    >
                        <h2 class="text-lg font-semibold text-gray-800 mb-4">"Detaljerad översikt"</h2>
                        <div class="space-y-4">
                            {data.details
                                .into_iter()
                                .map(|detail| view! { <ProgressRow detail=detail /> })
                                .collect_view()}
                        </div>
                    </section>
                </div>
            }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> DashboardData {
        let summary: ProgressSummary = serde_json::from_str(
            r#"{"total_completed": 25, "total_in_progress": 10, "completion_rate": 0.456,
                "last_activity": "2024-02-20T15:45:00Z"}"#,
        )
        .unwrap();
        DashboardData {
            summary,
            details: vec![ProgressDetail {
                category: "courses".to_string(),
                completed: 5,
                total: 10,
                progress_percentage: 50.0,
            }],
        }
    }

    #[test]
    fn test_settle_success_keeps_both_payloads() {
        let state = settle(Ok(sample_data()));
        let data = state.data().unwrap();
        assert_eq!(data.summary.total_completed, 25);
        assert_eq!(data.details.len(), 1);
        assert_eq!(crate::format::completion_rate(data.summary.completion_rate), "45.6%");
    }

    #[test]
    fn test_settle_failure_hides_cause() {
        let state = settle(Err(ApiError::status(500, r#"{"detail": "Failed to retrieve progress summary"}"#)));
        assert_eq!(state, LoadState::Failed(DASHBOARD_ERROR.to_string()));
        assert!(state.data().is_none());

        let state = settle(Err(ApiError::Network("Failed to fetch".to_string())));
        assert_eq!(state, LoadState::Failed(DASHBOARD_ERROR.to_string()));
    }
}
