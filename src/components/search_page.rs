use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::api::search::search_faqs;
use crate::faq::catalog::FaqCatalog;
use crate::faq::models::FaqEntry;
use crate::tickets::models::{
    RawSearchParams, SearchKind, TicketOrdering, TicketSearchParams, TicketStatusFilter,
    TicketSummary,
};

/// How long typing must pause before the search term is committed.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[server]
pub async fn search_tickets(
    q: String,
    status: String,
    ordering: String,
    token: Option<String>,
) -> Result<Vec<TicketSummary>, ServerFnError> {
    use crate::state::AppState;

    let state = leptos::prelude::use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;
    let headers: axum::http::HeaderMap = leptos_axum::extract().await?;

    crate::api::search::page_ticket_search(&state, &headers, q, status, ordering, token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Access token saved in the browser by the login flow.
#[cfg(feature = "hydrate")]
fn stored_access_token() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(crate::api::search::ACCESS_TOKEN_KEY)
        .ok()?
}

/// Server-side renders rely on the `access` cookie instead.
#[cfg(not(feature = "hydrate"))]
fn stored_access_token() -> Option<String> {
    None
}

/// The value to commit once typing settles, if it differs from the current term.
fn pending_query(input: &str, committed: &str) -> Option<String> {
    (input != committed).then(|| input.to_string())
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "faq-chip active"
    } else {
        "faq-chip"
    }
}

fn empty_results() -> AnyView {
    view! {
        <section class="faq-empty-state">
            <h2>"No results found"</h2>
            <p>"No results found"</p>
        </section>
    }
    .into_any()
}

fn ticket_results_view(result: Result<Vec<TicketSummary>, ServerFnError>) -> AnyView {
    match result {
        Err(_) => view! {
            <section class="faq-empty-state">
                <h2>"Something went wrong"</h2>
                <p>"Unable to load tickets."</p>
            </section>
        }
        .into_any(),
        Ok(tickets) if tickets.is_empty() => empty_results(),
        Ok(tickets) => view! {
            <div class="faq-accordion">
                {tickets
                    .into_iter()
                    .map(|ticket| {
                        view! {
                            <div class="faq-item">
                                <div class="faq-item-panel">
                                    <h3 class="faq-item-heading">{ticket.to_string()}</h3>
                                    <p>"Status: " {ticket.status_label()}</p>
                                    <p>"Created: " {ticket.created_date()}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

fn faq_results_view(items: Vec<FaqEntry>) -> AnyView {
    if items.is_empty() {
        return empty_results();
    }

    view! {
        <div class="faq-accordion">
            {items
                .into_iter()
                .map(|faq| {
                    view! {
                        <div class="faq-item">
                            <div class="faq-item-panel">
                                <h3 class="faq-item-heading">{faq.question}</h3>
                                <p>"Category: " {faq.category}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

/// Unified ticket and FAQ search, with its state mirrored in the URL query.
#[component]
pub fn SearchPage() -> impl IntoView {
    let catalog = expect_context::<Arc<FaqCatalog>>();
    let query_map = use_query_map();

    let initial = query_map.with_untracked(|params| {
        TicketSearchParams::normalize(RawSearchParams {
            kind: params.get("type"),
            q: params.get("q"),
            status: params.get("status"),
            ordering: params.get("ordering"),
        })
    });

    let kind = RwSignal::new(initial.kind);
    let input = RwSignal::new(initial.q.clone());
    let query = RwSignal::new(initial.q);
    let status = RwSignal::new(initial.status);
    let ordering = RwSignal::new(initial.ordering);

    let params = Memo::new(move |_| TicketSearchParams {
        kind: kind.get(),
        q: query.get(),
        status: status.get(),
        ordering: ordering.get(),
    });

    Effect::new(move |pending: Option<Option<TimeoutHandle>>| {
        if let Some(Some(handle)) = pending {
            handle.clear();
        }
        let value = pending_query(&input.get(), &query.get_untracked())?;
        set_timeout_with_handle(move || query.set(value), SEARCH_DEBOUNCE).ok()
    });

    let navigate = use_navigate();
    Effect::new(move |_| {
        let target = format!("/search?{}", params.get().page_query());
        navigate(
            &target,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    });

    let tickets = Resource::new(
        move || params.get(),
        |p| async move {
            if p.kind != SearchKind::Tickets {
                return Ok(Vec::new());
            }
            search_tickets(
                p.q,
                p.status.as_str().to_string(),
                p.ordering.as_str().to_string(),
                stored_access_token(),
            )
            .await
        },
    );

    let faq_results = Memo::new(move |_| search_faqs(&catalog, &query.get()));

    view! {
        <div class="faq-page">
            <header class="faq-header">
                <h1>"Search"</h1>
                <p>"Search across tickets and FAQs."</p>
            </header>

            <section class="faq-controls">
                <div class="faq-search">
                    <label for="search-input" class="sr-only">
                        "Search"
                    </label>
                    <input
                        id="search-input"
                        type="text"
                        placeholder="Search tickets or FAQs..."
                        on:input=move |ev| input.set(event_target_value(&ev))
                        prop:value=move || input.get()
                    />
                </div>

                <div class="faq-category-filter">
                    <button
                        type="button"
                        class=move || chip_class(kind.get() == SearchKind::Tickets)
                        on:click=move |_| kind.set(SearchKind::Tickets)
                    >
                        "Tickets"
                    </button>
                    <button
                        type="button"
                        class=move || chip_class(kind.get() == SearchKind::Faqs)
                        on:click=move |_| kind.set(SearchKind::Faqs)
                    >
                        "FAQs"
                    </button>
                </div>

                <Show when=move || kind.get() == SearchKind::Tickets>
                    <div class="faq-category-filter">
                        <label>
                            "Status"
                            <select
                                prop:value=move || status.get().as_str()
                                on:change=move |ev| {
                                    status.set(TicketStatusFilter::normalize(Some(event_target_value(&ev).as_str())))
                                }
                            >
                                {TicketStatusFilter::OPTIONS
                                    .iter()
                                    .map(|option| {
                                        view! { <option value=option.as_str()>{option.label()}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label>
                            "Sort"
                            <select
                                prop:value=move || ordering.get().as_str()
                                on:change=move |ev| {
                                    ordering.set(TicketOrdering::normalize(Some(event_target_value(&ev).as_str())))
                                }
                            >
                                {TicketOrdering::OPTIONS
                                    .iter()
                                    .map(|option| {
                                        view! { <option value=option.as_str()>{option.label()}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                </Show>
            </section>

            {move || match kind.get() {
                SearchKind::Tickets => view! {
                    <Transition fallback=|| view! { <p>"Loading..."</p> }>
                        {move || tickets.get().map(ticket_results_view)}
                    </Transition>
                }
                .into_any(),
                SearchKind::Faqs => faq_results_view(faq_results.get()),
            }}
        </div>
    }
}
