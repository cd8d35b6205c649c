use std::sync::{Arc, Mutex};

use axum::extract::{RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use helpdesk::error::AppError;
use helpdesk::tickets::client::{HttpTicketClient, TicketClient};
use helpdesk::tickets::models::{TicketOrdering, TicketSearchParams, TicketStatusFilter};

/// Query string and `Authorization` header of each request the backend saw.
type Seen = Arc<Mutex<Vec<(Option<String>, Option<String>)>>>;

/// Serve a fixed response at `/api/tickets/` on a random port; returns the API root URL.
async fn spawn_backend(
    status: StatusCode,
    body: &'static str,
    content_type: &'static str,
) -> (String, Seen) {
    let seen: Seen = Arc::default();

    let handler = move |State(seen): State<Seen>,
                        RawQuery(query): RawQuery,
                        headers: HeaderMap| async move {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        seen.lock().unwrap().push((query, auth));
        (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
    };

    let app = Router::new()
        .route("/api/tickets/", get(handler))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api"), seen)
}

fn params() -> TicketSearchParams {
    TicketSearchParams {
        q: "wifi down".into(),
        status: TicketStatusFilter::InProgress,
        ordering: TicketOrdering::Oldest,
        ..Default::default()
    }
}

#[tokio::test]
async fn search_hits_ticket_endpoint_with_query_and_token() {
    let (base_url, seen) = spawn_backend(
        StatusCode::OK,
        r#"[{"id": 9, "type_of_issue": "Wi-Fi", "status": "in_progress", "created_at": "2024-03-05T10:15:00Z"}]"#,
        "application/json",
    )
    .await;
    let client = HttpTicketClient::new(format!("{base_url}/"));

    let tickets = client.search(&params(), Some("tok".into())).await.unwrap();

    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].id, 9);
    assert_eq!(tickets[0].created_date(), "2024-03-05");

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    let (query, auth) = &seen[0];
    let expected_path = params().ticket_api_path();
    let expected_query = expected_path.trim_start_matches("/tickets/?");
    assert_eq!(query.as_deref(), Some(expected_query));
    assert_eq!(auth.as_deref(), Some("Bearer tok"));
}

#[tokio::test]
async fn search_without_token_sends_no_authorization() {
    let (base_url, seen) = spawn_backend(StatusCode::OK, "[]", "application/json").await;
    let client = HttpTicketClient::new(base_url);

    let tickets = client.search(&TicketSearchParams::default(), None).await.unwrap();

    assert!(tickets.is_empty());
    let (query, auth) = seen.lock().unwrap()[0].clone();
    assert_eq!(query.as_deref(), Some("ordering=newest"));
    assert!(auth.is_none());
}

#[tokio::test]
async fn non_array_body_is_an_empty_result() {
    let (base_url, _) = spawn_backend(
        StatusCode::OK,
        r#"{"detail": "no tickets"}"#,
        "application/json",
    )
    .await;
    let client = HttpTicketClient::new(base_url);

    let tickets = client.search(&params(), None).await.unwrap();

    assert!(tickets.is_empty());
}

#[tokio::test]
async fn error_status_carries_response_text() {
    let (base_url, _) = spawn_backend(
        StatusCode::SERVICE_UNAVAILABLE,
        "backend maintenance",
        "text/plain",
    )
    .await;
    let client = HttpTicketClient::new(base_url);

    let err = client.search(&params(), None).await.unwrap_err();

    assert!(matches!(err, AppError::Upstream(msg) if msg == "backend maintenance"));
}

#[tokio::test]
async fn error_status_without_body_reports_code() {
    let (base_url, _) = spawn_backend(StatusCode::UNAUTHORIZED, "", "text/plain").await;
    let client = HttpTicketClient::new(base_url);

    let err = client.search(&params(), None).await.unwrap_err();

    assert!(matches!(err, AppError::Upstream(msg) if msg == "HTTP 401"));
}

#[tokio::test]
async fn unreachable_backend_is_upstream_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = HttpTicketClient::new(format!("http://{addr}/api"));

    let err = client.search(&params(), None).await.unwrap_err();

    assert!(matches!(err, AppError::Upstream(msg) if msg.contains("unreachable")));
}
