//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Feature lifecycle status.
///
/// Unknown server values are kept verbatim so they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FeatureStatus {
    Active,
    Inactive,
    #[default]
    Pending,
    Other(String),
}

/// Status options offered by the creation form
pub const FEATURE_STATUSES: &[FeatureStatus] = &[
    FeatureStatus::Pending,
    FeatureStatus::Active,
    FeatureStatus::Inactive,
];

impl FeatureStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
            Self::Other(value) => value,
        }
    }

    /// Swedish label for the form's status select
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Aktiv",
            Self::Inactive => "Inaktiv",
            Self::Pending => "Väntande",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for FeatureStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "pending" => Self::Pending,
            _ => Self::Other(value),
        }
    }
}

impl From<FeatureStatus> for String {
    fn from(status: FeatureStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for FeatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: FeatureStatus,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One page of the feature list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturePage {
    pub features: Vec<Feature>,
    pub total_count: u32,
    pub page: u32,
    pub page_size: u32,
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CreateFeaturePayload {
    pub name: String,
    pub description: String,
    pub status: FeatureStatus,
}

/// Aggregate progress metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub total_completed: u32,
    pub total_in_progress: u32,
    /// Ratio in [0, 1]
    pub completion_rate: f64,
    #[serde(default)]
    pub last_activity: Option<String>,
}

/// Per-category progress breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressDetail {
    pub category: String,
    #[serde(alias = "completed_count")]
    pub completed: u32,
    #[serde(alias = "total_count")]
    pub total: u32,
    /// Precomputed percentage in [0, 100]
    #[serde(alias = "completion_percentage")]
    pub progress_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressDetailsResponse {
    pub items: Vec<ProgressDetail>,
}

/// Time period filter for the progress details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Day,
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl TimePeriod {
    pub const ALL_OPTIONS: &'static [(TimePeriod, &'static str)] = &[
        (TimePeriod::All, "Hela perioden"),
        (TimePeriod::Day, "Idag"),
        (TimePeriod::Week, "Denna vecka"),
        (TimePeriod::Month, "Denna månad"),
        (TimePeriod::Year, "Detta år"),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL_OPTIONS
            .iter()
            .map(|(period, _)| *period)
            .find(|period| period.as_str() == value)
    }
}

/// Category filter for the progress details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Courses,
    Assignments,
    Quizzes,
    Projects,
    #[default]
    All,
}

impl Category {
    pub const ALL_OPTIONS: &'static [(Category, &'static str)] = &[
        (Category::All, "Alla kategorier"),
        (Category::Courses, "Kurser"),
        (Category::Assignments, "Uppgifter"),
        (Category::Quizzes, "Quiz"),
        (Category::Projects, "Projekt"),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::Assignments => "assignments",
            Self::Quizzes => "quizzes",
            Self::Projects => "projects",
            Self::All => "all",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL_OPTIONS
            .iter()
            .map(|(category, _)| *category)
            .find(|category| category.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_page_decodes() {
        let json = r#"{
            "features": [
                {"id": "a1", "name": "Onboarding", "description": "Intro", "status": "active",
                 "created_at": "2024-02-20T10:30:00Z", "updated_at": null},
                {"id": "a2", "name": "Quiz", "description": "Test", "status": "deprecated",
                 "created_at": "2024-02-21T08:00:00"}
            ],
            "total_count": 25,
            "page": 1,
            "page_size": 10
        }"#;

        let page: FeaturePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.features.len(), 2);
        assert_eq!(page.features[0].status, FeatureStatus::Active);
        assert_eq!(page.features[1].status, FeatureStatus::Other("deprecated".to_string()));
        assert_eq!(page.features[1].updated_at, None);
        assert_eq!(page.total_count, 25);
    }

    #[test]
    fn test_create_payload_serializes_status_as_string() {
        let payload = CreateFeaturePayload {
            name: "Ny".to_string(),
            description: "Beskrivning".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Ny", "description": "Beskrivning", "status": "pending"})
        );
    }

    #[test]
    fn test_progress_detail_accepts_server_field_names() {
        let json = r#"{"items": [{"category": "courses", "completed_count": 5, "total_count": 10,
            "completion_percentage": 50.0, "last_completed_at": "2024-02-20T10:30:00Z"}]}"#;
        let response: ProgressDetailsResponse = serde_json::from_str(json).unwrap();
        let detail = &response.items[0];
        assert_eq!(detail.completed, 5);
        assert_eq!(detail.total, 10);
        assert_eq!(detail.progress_percentage, 50.0);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(TimePeriod::parse("week"), Some(TimePeriod::Week));
        assert_eq!(TimePeriod::parse("decade"), None);
        assert_eq!(Category::parse("quizzes"), Some(Category::Quizzes));
        assert_eq!(Category::default().as_str(), "all");
        assert_eq!(FeatureStatus::Pending.label(), "Väntande");
    }
}
