//! Landing Page Component
//!
//! Welcome card with a click counter.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    let (count, set_count) = signal(0u32);

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
            <div class="container mx-auto px-4 py-16">
                <div class="text-center">
                    <h1 class="text-4xl font-bold text-gray-900 mb-6">"DigiNativa"</h1>
                    <p class="text-xl text-gray-600 mb-8">
                        "Interaktiv Kommunal Utbildningsplattform"
                    </p>
                    <div class="bg-white rounded-lg shadow-lg p-8 max-w-md mx-auto">
                        <h2 class="text-2xl font-semibold mb-4">"Välkommen"</h2>
                        <p class="text-gray-600 mb-6">
                            "DigiNativa AI Team är redo att leverera kommunal utbildning!"
                        </p>
                        <button
                            class="bg-blue-600 hover:bg-blue-700 text-white font-medium py-2 px-4 rounded-lg transition-colors"
                            on:click=move |_| set_count.update(|n| *n += 1)
                        >
                            "Klick räknare: " {move || count.get()}
                        </button>
                    </div>
                    <div class="mt-8 text-sm text-gray-500">
                        "🤖 Bygg automatiskt av DigiNativa AI Team"
                    </div>
                </div>
            </div>
        </div>
    }
}
