//! Dashboard Endpoints

use crate::error::ApiError;
use crate::models::{Category, ProgressDetail, ProgressDetailsResponse, ProgressSummary, TimePeriod};
use super::{build_url, get_json};

pub const PROGRESS_PATH: &str = "/api/v1/dashboard/progress";
pub const PROGRESS_DETAILS_PATH: &str = "/api/v1/dashboard/progress/details";

pub fn progress_details_url(base: &str, time_period: TimePeriod, category: Category) -> String {
    build_url(
        base,
        PROGRESS_DETAILS_PATH,
        &[
            ("time_period", time_period.as_str().to_string()),
            ("category", category.as_str().to_string()),
        ],
    )
}

pub async fn fetch_progress_summary(base: &str) -> Result<ProgressSummary, ApiError> {
    get_json(&build_url(base, PROGRESS_PATH, &[])).await
}

pub async fn fetch_progress_details(
    base: &str,
    time_period: TimePeriod,
    category: Category,
) -> Result<Vec<ProgressDetail>, ApiError> {
    let response: ProgressDetailsResponse = get_json(&progress_details_url(base, time_period, category)).await?;
    Ok(response.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_details_url_carries_filters() {
        assert_eq!(
            progress_details_url("", TimePeriod::Week, Category::Quizzes),
            "/api/v1/dashboard/progress/details?time_period=week&category=quizzes"
        );
        assert_eq!(
            progress_details_url("", TimePeriod::default(), Category::default()),
            "/api/v1/dashboard/progress/details?time_period=all&category=all"
        );
    }
}
