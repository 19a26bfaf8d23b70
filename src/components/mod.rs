//! UI Components
//!
//! Reusable Leptos components.

mod loading_indicator;
mod status_badge;
mod nav_bar;
mod landing_page;
mod feature_form;
mod feature_table;
mod feature_detail;
mod pagination_bar;
mod feature_management;
mod summary_panel;
mod progress_row;
mod dashboard_filters;
mod progress_dashboard;

pub use loading_indicator::LoadingIndicator;
pub use status_badge::StatusBadge;
pub use nav_bar::NavBar;
pub use landing_page::LandingPage;
pub use feature_form::FeatureForm;
pub use feature_table::FeatureTable;
pub use feature_detail::FeatureDetail;
pub use pagination_bar::PaginationBar;
pub use feature_management::FeatureManagement;
pub use summary_panel::SummaryPanel;
pub use progress_row::ProgressRow;
pub use dashboard_filters::DashboardFilters;
pub use progress_dashboard::ProgressDashboard;
