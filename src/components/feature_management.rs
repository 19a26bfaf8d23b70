//! Feature Management Screen
//!
//! Creation form plus a paginated table of features. Pages are served from
//! the app-wide query cache and always revalidated.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FeatureDetail, FeatureForm, FeatureTable, LoadingIndicator, PaginationBar};
use crate::context::use_app_context;
use crate::models::FeaturePage;
use crate::pagination::Pager;
use crate::query::{LoadState, QueryState, RequestTracker};

#[component]
pub fn FeatureManagement() -> impl IntoView {
    let ctx = use_app_context();
    let page_size = ctx.page_size();

    let (page, set_page) = signal(1u32);
    let (query, set_query) = signal(QueryState::<FeaturePage>::default());
    let (selected, set_selected) = signal::<Option<String>>(None);
    let tracker = StoredValue::new(RequestTracker::default());

    // Load the current page on mount, on page change and on invalidation
    Effect::new(move |_| {
        let page = page.get();
        let version = ctx.features_version.get();
        let ticket = tracker.write_value().begin();
        set_query.update(|q| q.start(ctx.cached_features(page)));
        let base = ctx.api_base();
        log::info!("[Features] Loading page {} (cache version {})", page, version);

        spawn_local(async move {
            let result = api::fetch_features(&base, page, page_size).await;
            if !tracker.try_with_value(|t| t.is_current(ticket)).unwrap_or(false) {
                log::debug!("[Features] Dropping stale response for page {}", page);
                return;
            }
            match result {
                Ok(data) => {
                    log::info!("[Features] Loaded {} of {} features", data.features.len(), data.total_count);
                    ctx.store_features(page, data.clone());
                    set_query.update(|q| q.resolve(data));
                }
                Err(e) => {
                    log::error!("[Features] Error loading page {}: {:?}", page, e);
                    set_query.update(|q| q.reject(e.to_string()));
                }
            }
        });
    });

    // Only rebuild the screen when the branch changes, so form input survives refetches
    let phase = Memo::new(move |_| query.with(|q| q.view().phase()));
    let rows = Memo::new(move |_| {
        query.with(|q| q.data().map(|data| data.features.clone()).unwrap_or_default())
    });
    let pager = Memo::new(move |_| query.with(|q| Pager::new(page.get(), q.data(), page_size)));
    let fetching = Memo::new(move |_| query.with(|q| q.is_fetching()));

    view! {
        {move || match phase.get() {
            LoadState::Loading => view! { <LoadingIndicator /> }.into_any(),
            LoadState::Failed(message) => view! {
                <div
                    role="alert"
                    class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative"
                >
                    <strong class="font-bold">"Ett fel uppstod! "</strong>
                    <span class="block sm:inline">{message}</span>
                </div>
            }.into_any(),
            LoadState::Loaded(()) => view! {
                <div class="container mx-auto px-4 py-8">
                    <h1 class="text-2xl font-bold mb-6">"Funktionshantering"</h1>

                    <FeatureForm />

                    <div
                        class="bg-white shadow-md rounded px-8 pt-6 pb-8"
                        aria-busy=move || fetching.get().to_string()
                    >
                        <h2 class="text-xl font-semibold mb-4">"Befintliga funktioner"</h2>
                        <FeatureTable
                            rows=rows
                            on_select=move |id: String| set_selected.set(Some(id))
                        />
                        <PaginationBar pager=pager set_page=set_page />
                    </div>

                    <FeatureDetail
                        feature_id=selected
                        on_close=move || set_selected.set(None)
                    />
                </div>
            }.into_any(),
        }}
    }
}
