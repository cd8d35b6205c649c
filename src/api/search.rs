use serde::Serialize;

use crate::error::AppError;
use crate::faq::catalog::FaqCatalog;
use crate::faq::filter::FaqQuery;
use crate::faq::models::FaqEntry;
use crate::tickets::client::TicketClient;
use crate::tickets::models::{RawSearchParams, SearchKind, TicketSearchParams, TicketSummary};

/// Local-storage key and cookie name holding the ticket backend access token.
pub const ACCESS_TOKEN_KEY: &str = "access";

/// Response of the unified search endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "results", rename_all = "lowercase")]
pub enum SearchResults {
    Tickets(Vec<TicketSummary>),
    Faqs(Vec<FaqEntry>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Tickets(t) => t.len(),
            SearchResults::Faqs(f) => f.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// FAQ half of the search page: every category, no role restriction.
pub fn search_faqs(catalog: &FaqCatalog, q: &str) -> Vec<FaqEntry> {
    catalog
        .filter(&FaqQuery::search_all(q))
        .into_iter()
        .cloned()
        .collect()
}

/// Core unified search logic behind `GET /api/v1/search`.
pub async fn process_search(
    catalog: &FaqCatalog,
    tickets: Option<&dyn TicketClient>,
    params: &TicketSearchParams,
    bearer: Option<String>,
) -> Result<SearchResults, AppError> {
    match params.kind {
        SearchKind::Faqs => Ok(SearchResults::Faqs(search_faqs(catalog, &params.q))),
        SearchKind::Tickets => Ok(SearchResults::Tickets(
            search_ticket_backend(tickets, params, bearer).await?,
        )),
    }
}

/// Ticket half of the search, failing when no backend is configured.
pub async fn search_ticket_backend(
    tickets: Option<&dyn TicketClient>,
    params: &TicketSearchParams,
    bearer: Option<String>,
) -> Result<Vec<TicketSummary>, AppError> {
    let client =
        tickets.ok_or_else(|| AppError::Internal("Ticket search not configured".into()))?;
    client.search(params, bearer).await
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Option<String> {
    let value = header?.trim();
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Credential for the ticket backend: an explicit token first, then the
/// `Authorization: Bearer` header, then the `access` cookie.
#[cfg(feature = "ssr")]
pub fn request_bearer(explicit: Option<String>, headers: &axum::http::HeaderMap) -> Option<String> {
    explicit
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .or_else(|| {
            bearer_token(
                headers
                    .get(axum::http::header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok()),
            )
        })
        .or_else(|| {
            axum_extra::extract::CookieJar::from_headers(headers)
                .get(ACCESS_TOKEN_KEY)
                .map(|cookie| cookie.value().trim().to_string())
                .filter(|token| !token.is_empty())
        })
}

/// Ticket search as run by the search page's `search_tickets` server function.
#[cfg(feature = "ssr")]
pub async fn page_ticket_search(
    state: &crate::state::AppState,
    headers: &axum::http::HeaderMap,
    q: String,
    status: String,
    ordering: String,
    token: Option<String>,
) -> Result<Vec<TicketSummary>, AppError> {
    let params = TicketSearchParams::normalize(RawSearchParams {
        kind: Some(SearchKind::Tickets.as_str().to_string()),
        q: Some(q),
        status: Some(status),
        ordering: Some(ordering),
    });
    let bearer = request_bearer(token, headers);

    search_ticket_backend(state.ticket_client.as_deref(), &params, bearer).await
}

/// Axum handler for `GET /api/v1/search`.
#[cfg(feature = "ssr")]
pub async fn search_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    headers: axum::http::HeaderMap,
    axum::extract::Query(raw): axum::extract::Query<RawSearchParams>,
) -> Result<axum::Json<SearchResults>, AppError> {
    let params = TicketSearchParams::normalize(raw);
    let bearer = request_bearer(None, &headers);

    let results = process_search(
        &state.catalog,
        state.ticket_client.as_deref(),
        &params,
        bearer,
    )
    .await?;

    tracing::debug!(kind = params.kind.as_str(), results = results.len(), "Search completed");
    Ok(axum::Json(results))
}
