use std::sync::Arc;

use leptos::prelude::*;

use crate::components::category_filter::CategoryChips;
use crate::components::faq_accordion::FaqAccordion;
use crate::components::search_bar::FaqSearchBar;
use crate::faq::catalog::FaqCatalog;
use crate::faq::counts::CategoryCounts;
use crate::faq::filter::FaqQuery;
use crate::faq::models::{CategoryFilter, FaqEntry};
use crate::faq::role::ViewerRole;

/// Reactive state behind the FAQ page.
///
/// Counts follow the role only; the filtered list follows role, category and
/// search term.
#[derive(Clone, Copy)]
pub struct FaqPageState {
    pub search_term: RwSignal<String>,
    pub selected: RwSignal<CategoryFilter>,
    pub counts: Memo<CategoryCounts>,
    pub filtered: Memo<Vec<FaqEntry>>,
}

impl FaqPageState {
    pub fn new(catalog: Arc<FaqCatalog>, role: Signal<ViewerRole>) -> Self {
        let search_term = RwSignal::new(String::new());
        let selected = RwSignal::new(CategoryFilter::All);

        let counts = {
            let catalog = catalog.clone();
            Memo::new(move |_| catalog.counts(role.get()))
        };

        let filtered = Memo::new(move |_| {
            let query = FaqQuery::new(selected.get(), role.get(), search_term.get());
            catalog
                .filter(&query)
                .into_iter()
                .cloned()
                .collect::<Vec<FaqEntry>>()
        });

        Self {
            search_term,
            selected,
            counts,
            filtered,
        }
    }
}

/// FAQ browser: search box, category chips and the filtered accordion.
///
/// Expects an `Arc<FaqCatalog>` in context.
#[component]
pub fn FaqPage(#[prop(into)] role: Signal<ViewerRole>) -> impl IntoView {
    let catalog = expect_context::<Arc<FaqCatalog>>();
    let categories = catalog.categories().to_vec();
    let FaqPageState {
        search_term,
        selected,
        counts,
        filtered,
    } = FaqPageState::new(catalog, role);

    view! {
        <div class="faq-page">
            <header class="faq-header">
                <h1>"FAQs"</h1>
                <p>"Answers to common questions about tickets, tracking, and using the platform."</p>
            </header>

            <section class="faq-controls">
                <FaqSearchBar value=search_term />
                <CategoryChips
                    categories=categories
                    selected=selected
                    counts=counts
                />
            </section>

            <Show
                when=move || filtered.with(|items| !items.is_empty())
                fallback=|| {
                    view! {
                        <section class="faq-empty-state">
                            <h2>"No FAQs found"</h2>
                            <p>
                                "Try a different keyword or category, or create a ticket for direct support."
                            </p>
                        </section>
                    }
                }
            >
                <FaqAccordion items=filtered />
            </Show>

            <section class="faq-cta">
                <h2>"Still need help?"</h2>
                <p>"Create a new ticket and our team will assist you directly."</p>
                <a href="/" class="faq-cta-button">
                    "Create a new ticket"
                </a>
            </section>
        </div>
    }
}
