//! Feature Form Component
//!
//! Creates a feature, then invalidates the cached feature list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, AppContext};
use crate::models::{CreateFeaturePayload, FeatureStatus, FEATURE_STATUSES};

const INPUT_CLASS: &str = "shadow appearance-none border rounded w-full py-2 px-3 text-gray-700 leading-tight focus:outline-none focus:shadow-outline";
const LABEL_CLASS: &str = "block text-gray-700 text-sm font-bold mb-2";

/// Reset the form and refetch the list after a successful create
fn on_created(ctx: AppContext, set_draft: WriteSignal<CreateFeaturePayload>) {
    set_draft.set(CreateFeaturePayload::default());
    ctx.invalidate_features();
}

#[component]
pub fn FeatureForm() -> impl IntoView {
    let ctx = use_app_context();

    let (draft, set_draft) = signal(CreateFeaturePayload::default());
    let (saving, set_saving) = signal(false);
    let (save_error, set_save_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let payload = draft.get_untracked();
        let base = ctx.api_base();
        set_saving.set(true);
        set_save_error.set(None);

        spawn_local(async move {
            match api::create_feature(&base, &payload).await {
                Ok(created) => {
                    log::info!("[FeatureForm] Created feature {} ({})", created.id, created.name);
                    on_created(ctx, set_draft);
                }
                Err(e) => {
                    log::error!("[FeatureForm] Error creating feature: {:?}", e);
                    set_save_error.set(Some(e.to_string()));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="bg-white shadow-md rounded px-8 pt-6 pb-8 mb-8" on:submit=on_submit>
            <div class="mb-4">
                <label for="name" class=LABEL_CLASS>"Namn"</label>
                <input
                    id="name"
                    type="text"
                    class=INPUT_CLASS
                    required=true
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| set_draft.update(|d| d.name = event_target_value(&ev))
                />
            </div>

            <div class="mb-4">
                <label for="description" class=LABEL_CLASS>"Beskrivning"</label>
                <textarea
                    id="description"
                    class=INPUT_CLASS
                    rows="3"
                    required=true
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| set_draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="mb-4">
                <label for="status" class=LABEL_CLASS>"Status"</label>
                <select
                    id="status"
                    class=INPUT_CLASS
                    prop:value=move || draft.with(|d| d.status.to_string())
                    on:change=move |ev| {
                        set_draft.update(|d| d.status = FeatureStatus::from(event_target_value(&ev)))
                    }
                >
                    {FEATURE_STATUSES.iter().map(|option| view! {
                        <option value=option.as_str()>{option.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            {move || save_error.get().map(|message| view! {
                <p role="alert" class="text-red-700 text-sm mb-4">{message}</p>
            })}

            <button
                type="submit"
                disabled=move || saving.get()
                class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline disabled:opacity-50"
            >
                {move || if saving.get() { "Sparar..." } else { "Skapa funktion" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::{Feature, FeaturePage};

    fn first_page() -> FeaturePage {
        FeaturePage {
            features: vec![Feature {
                id: "a1".to_string(),
                name: "Onboarding".to_string(),
                description: "Intro".to_string(),
                status: FeatureStatus::Active,
                created_at: "2024-02-20T10:30:00Z".to_string(),
                updated_at: None,
            }],
            total_count: 1,
            page: 1,
            page_size: 10,
        }
    }

    #[test]
    fn test_created_feature_clears_form_and_refetches_list() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(AppConfig::default());
            ctx.store_features(1, first_page());
            let (draft, set_draft) = signal(CreateFeaturePayload {
                name: "Quiz".to_string(),
                description: "Veckans quiz".to_string(),
                status: FeatureStatus::Active,
            });
            let version = ctx.features_version.get_untracked();

            on_created(ctx, set_draft);

            let cleared = draft.get_untracked();
            assert_eq!(cleared.name, "");
            assert_eq!(cleared.description, "");
            assert_eq!(cleared.status, FeatureStatus::Pending);
            assert_eq!(ctx.features_version.get_untracked(), version + 1);
            assert_eq!(ctx.cached_features(1), None);
        });
    }
}
