//! Feature Table Component

use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::format::short_date;
use crate::models::Feature;

#[component]
pub fn FeatureTable(
    rows: Memo<Vec<Feature>>,
    /// Called with the id of the clicked feature
    #[prop(into)]
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full table-auto">
                <thead>
                    <tr class="bg-gray-100">
                        <th class="px-4 py-2 text-left">"Namn"</th>
                        <th class="px-4 py-2 text-left">"Beskrivning"</th>
                        <th class="px-4 py-2 text-left">"Status"</th>
                        <th class="px-4 py-2 text-left">"Skapad"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|feature| feature.id.clone()
                        children=move |feature| {
                            let id = feature.id.clone();
                            view! {
                                <tr class="border-b">
                                    <td class="px-4 py-2">
                                        <button
                                            type="button"
                                            class="text-blue-700 hover:underline text-left"
                                            on:click=move |_| on_select.run(id.clone())
                                        >
                                            {feature.name.clone()}
                                        </button>
                                    </td>
                                    <td class="px-4 py-2">{feature.description.clone()}</td>
                                    <td class="px-4 py-2">
                                        <StatusBadge status=feature.status.clone() />
                                    </td>
                                    <td class="px-4 py-2">{short_date(&feature.created_at)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
