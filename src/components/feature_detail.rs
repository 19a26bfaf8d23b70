//! Feature Detail Component
//!
//! Panel showing a single feature fetched by id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::StatusBadge;
use crate::context::use_app_context;
use crate::format::short_date;
use crate::models::Feature;
use crate::query::{LoadState, RequestTracker};

#[component]
pub fn FeatureDetail(
    feature_id: ReadSignal<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (detail, set_detail) = signal(LoadState::<Feature>::Loading);
    let tracker = StoredValue::new(RequestTracker::default());

    Effect::new(move |_| {
        let Some(id) = feature_id.get() else {
            return;
        };
        let ticket = tracker.write_value().begin();
        set_detail.set(LoadState::Loading);
        let base = ctx.api_base();

        spawn_local(async move {
            let result = api::fetch_feature(&base, &id).await;
            if !tracker.try_with_value(|t| t.is_current(ticket)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(feature) => set_detail.set(LoadState::Loaded(feature)),
                Err(e) => {
                    log::error!("[FeatureDetail] Error loading {}: {:?}", id, e);
                    set_detail.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    });

    view! {
        <Show when=move || feature_id.get().is_some()>
            <section aria-label="Funktionsdetaljer" class="bg-white shadow-md rounded px-8 pt-6 pb-8 mt-8">
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-xl font-semibold">"Detaljer"</h2>
                    <button
                        type="button"
                        class="text-gray-500 hover:text-gray-800"
                        aria-label="Stäng"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
                {move || match detail.get() {
                    LoadState::Loading => view! {
                        <p role="status" class="text-gray-500">"Laddar..."</p>
                    }.into_any(),
                    LoadState::Failed(message) => view! {
                        <p role="alert" class="text-red-700">{message}</p>
                    }.into_any(),
                    LoadState::Loaded(feature) => view! {
                        <dl class="grid grid-cols-2 gap-2">
                            <dt class="font-bold">"Id"</dt>
                            <dd>{feature.id.clone()}</dd>
                            <dt class="font-bold">"Namn"</dt>
                            <dd>{feature.name.clone()}</dd>
                            <dt class="font-bold">"Beskrivning"</dt>
                            <dd>{feature.description.clone()}</dd>
                            <dt class="font-bold">"Status"</dt>
                            <dd><StatusBadge status=feature.status.clone() /></dd>
                            <dt class="font-bold">"Skapad"</dt>
                            <dd>{short_date(&feature.created_at)}</dd>
                            <dt class="font-bold">"Uppdaterad"</dt>
                            <dd>{feature.updated_at.as_deref().map(short_date).unwrap_or_else(|| "–".to_string())}</dd>
                        </dl>
                    }.into_any(),
                }}
            </section>
        </Show>
    }
}
