use leptos::prelude::*;

/// Free-text FAQ search input bound to `value`.
#[component]
pub fn FaqSearchBar(value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="faq-search">
            <label for="faq-search-input" class="sr-only">
                "Search FAQs"
            </label>
            <input
                id="faq-search-input"
                type="text"
                placeholder="Search by keyword, question, or tag..."
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
            />
        </div>
    }
}
