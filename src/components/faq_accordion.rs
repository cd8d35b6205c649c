use leptos::prelude::*;

use crate::faq::answer::{parse_answer, AnswerBlock};
use crate::faq::models::FaqEntry;

/// Expandable list of FAQs; at most one item is open at a time.
#[component]
pub fn FaqAccordion(#[prop(into)] items: Signal<Vec<FaqEntry>>) -> impl IntoView {
    let expanded = RwSignal::new(None::<String>);

    view! {
        <div class="faq-accordion">
            <For
                each=move || items.get()
                key=|item| item.id.clone()
                children=move |item: FaqEntry| view! { <FaqItem item=item expanded=expanded /> }
            />
        </div>
    }
}

#[component]
fn FaqItem(item: FaqEntry, expanded: RwSignal<Option<String>>) -> impl IntoView {
    let button_id = format!("faq-button-{}", item.id);
    let panel_id = format!("faq-panel-{}", item.id);

    let is_expanded = {
        let id = item.id.clone();
        move || expanded.with(|current| current.as_deref() == Some(id.as_str()))
    };
    let aria_expanded = is_expanded.clone();
    let icon_expanded = is_expanded.clone();
    let panel_expanded = is_expanded.clone();

    let id = item.id.clone();
    let toggle = move |_| {
        expanded.update(|current| {
            if current.as_deref() == Some(id.as_str()) {
                *current = None;
            } else {
                *current = Some(id.clone());
            }
        })
    };

    view! {
        <section class="faq-item">
            <h2 class="faq-item-heading">
                <button
                    id=button_id.clone()
                    type="button"
                    class="faq-item-trigger"
                    aria-expanded=move || aria_expanded().to_string()
                    aria-controls=panel_id.clone()
                    on:click=toggle
                >
                    <span>{item.question.clone()}</span>
                    <span class="faq-item-icon" aria-hidden="true">
                        {move || if icon_expanded() { "-" } else { "+" }}
                    </span>
                </button>
            </h2>
            <div
                id=panel_id
                role="region"
                aria-labelledby=button_id
                class=move || {
                    if panel_expanded() { "faq-item-panel expanded" } else { "faq-item-panel" }
                }
                hidden=move || !is_expanded()
            >
                <div class="faq-item-answer">{answer_view(&item.answer)}</div>
            </div>
        </section>
    }
}

fn answer_view(answer: &str) -> impl IntoView {
    parse_answer(answer)
        .into_iter()
        .map(|block| match block {
            AnswerBlock::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
            AnswerBlock::BulletList(items) => view! {
                <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
            }
            .into_any(),
        })
        .collect_view()
}
