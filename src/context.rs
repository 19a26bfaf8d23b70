//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::FeaturePage;
use crate::query::{QueryCache, QueryKey};

/// Cache scope for feature list pages
pub const FEATURES_SCOPE: &str = "features";

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Feature list pages, survives navigating away from the screen
    feature_cache: StoredValue<QueryCache<FeaturePage>>,
    /// Bumped when cached feature lists are invalidated - read
    pub features_version: ReadSignal<u64>,
    /// Bumped when cached feature lists are invalidated - write
    set_features_version: WriteSignal<u64>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (features_version, set_features_version) = signal(0u64);
        Self {
            config: StoredValue::new(config),
            feature_cache: StoredValue::new(QueryCache::new()),
            features_version,
            set_features_version,
        }
    }

    pub fn api_base(&self) -> String {
        self.config.with_value(|config| config.api_base_url.clone())
    }

    pub fn page_size(&self) -> u32 {
        self.config.with_value(|config| config.page_size)
    }

    /// Cached page, stale or not
    pub fn cached_features(&self, page: u32) -> Option<FeaturePage> {
        let key = QueryKey::new(FEATURES_SCOPE, page);
        self.feature_cache.with_value(|cache| cache.get(&key).cloned())
    }

    pub fn store_features(&self, page: u32, data: FeaturePage) {
        self.feature_cache
            .update_value(|cache| cache.insert(QueryKey::new(FEATURES_SCOPE, page), data));
    }

    /// Drop every cached page and trigger a refetch of the visible one
    pub fn invalidate_features(&self) {
        let mut dropped = 0;
        let mut version = 0;
        self.feature_cache.update_value(|cache| {
            dropped = cache.invalidate_scope(FEATURES_SCOPE);
            version = cache.version();
        });
        log::debug!("[CTX] Invalidated {} cached feature pages", dropped);
        self.set_features_version.set(version);
    }
}

/// Get the app context, provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_page(page: u32) -> FeaturePage {
        FeaturePage {
            features: Vec::new(),
            total_count: 0,
            page,
            page_size: 10,
        }
    }

    #[test]
    fn test_invalidate_drops_every_page_and_bumps_version() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(AppConfig::default());
            ctx.store_features(1, empty_page(1));
            ctx.store_features(2, empty_page(2));
            assert_eq!(ctx.cached_features(2), Some(empty_page(2)));
            assert_eq!(ctx.features_version.get_untracked(), 0);

            ctx.invalidate_features();
            assert_eq!(ctx.cached_features(1), None);
            assert_eq!(ctx.cached_features(2), None);
            assert_eq!(ctx.features_version.get_untracked(), 1);

            ctx.store_features(1, empty_page(1));
            ctx.invalidate_features();
            assert_eq!(ctx.cached_features(1), None);
            assert_eq!(ctx.features_version.get_untracked(), 2);
        });
    }
}
