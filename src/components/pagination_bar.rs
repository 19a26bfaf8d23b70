//! Pagination Bar Component

use leptos::prelude::*;

use crate::pagination::Pager;

const NAV_BUTTON_CLASS: &str = "bg-gray-200 hover:bg-gray-300 text-gray-800 font-bold py-2 px-4 rounded disabled:opacity-50";

#[component]
pub fn PaginationBar(pager: Memo<Pager>, set_page: WriteSignal<u32>) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center mt-4">
            <button
                class=NAV_BUTTON_CLASS
                disabled=move || !pager.get().has_previous
                on:click=move |_| set_page.update(|page| *page = page.saturating_sub(1).max(1))
            >
                "Föregående"
            </button>
            <span>{move || pager.get().label()}</span>
            <button
                class=NAV_BUTTON_CLASS
                disabled=move || !pager.get().has_next
                on:click=move |_| set_page.update(|page| *page += 1)
            >
                "Nästa"
            </button>
        </div>
    }
}
