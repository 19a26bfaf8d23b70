//! Feature Endpoints

use crate::error::ApiError;
use crate::models::{CreateFeaturePayload, Feature, FeaturePage};
use super::{build_url, get_json, path_segment, post_json};

pub const FEATURES_PATH: &str = "/api/v1/features";

/// URL for one page of the feature list
pub fn features_url(base: &str, page: u32, page_size: u32) -> String {
    build_url(
        base,
        FEATURES_PATH,
        &[("page", page.to_string()), ("page_size", page_size.to_string())],
    )
}

pub fn feature_url(base: &str, id: &str) -> String {
    build_url(base, &format!("{}/{}", FEATURES_PATH, path_segment(id)), &[])
}

pub async fn fetch_features(base: &str, page: u32, page_size: u32) -> Result<FeaturePage, ApiError> {
    get_json(&features_url(base, page, page_size)).await
}

pub async fn fetch_feature(base: &str, id: &str) -> Result<Feature, ApiError> {
    get_json(&feature_url(base, id)).await
}

pub async fn create_feature(base: &str, payload: &CreateFeaturePayload) -> Result<Feature, ApiError> {
    post_json(&build_url(base, FEATURES_PATH, &[]), payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_url() {
        assert_eq!(features_url("", 2, 10), "/api/v1/features?page=2&page_size=10");
    }

    #[test]
    fn test_feature_url() {
        assert_eq!(
            feature_url("http://localhost:8000", "digital-onboarding"),
            "http://localhost:8000/api/v1/features/digital-onboarding"
        );
    }
}
