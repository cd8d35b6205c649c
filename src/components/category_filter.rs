use leptos::prelude::*;

use crate::faq::counts::CategoryCounts;
use crate::faq::models::CategoryFilter;

/// One chip per category, each showing its role-visible count.
#[component]
pub fn CategoryChips(
    categories: Vec<CategoryFilter>,
    selected: RwSignal<CategoryFilter>,
    #[prop(into)] counts: Signal<CategoryCounts>,
) -> impl IntoView {
    view! {
        <div class="faq-category-filter" role="tablist" aria-label="FAQ categories">
            {categories
                .into_iter()
                .map(|category| {
                    let name = category.as_str().to_string();
                    let count_key = name.clone();
                    let is_active = {
                        let category = category.clone();
                        move || selected.with(|current| *current == category)
                    };
                    let aria_active = is_active.clone();

                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || aria_active().to_string()
                            class=move || if is_active() { "faq-chip active" } else { "faq-chip" }
                            on:click=move |_| selected.set(category.clone())
                        >
                            {name}
                            <span class="faq-chip-count">
                                {move || counts.with(|c| c.get_or_zero(&count_key))}
                            </span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
