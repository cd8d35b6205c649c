use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use helpdesk::error::AppError;
use helpdesk::faq::catalog::FaqCatalog;
use helpdesk::state::AppState;
use helpdesk::tickets::client::TicketClient;
use helpdesk::tickets::models::{TicketSearchParams, TicketSummary};

/// Ticket backend stand-in that returns canned tickets and records each call.
#[derive(Default)]
pub struct RecordingTicketClient {
    pub tickets: Vec<TicketSummary>,
    pub fail_with: Option<String>,
    pub calls: Mutex<Vec<(TicketSearchParams, Option<String>)>>,
}

impl RecordingTicketClient {
    pub fn with_tickets(tickets: Vec<TicketSummary>) -> Self {
        Self {
            tickets,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(TicketSearchParams, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TicketClient for RecordingTicketClient {
    async fn search(
        &self,
        params: &TicketSearchParams,
        bearer: Option<String>,
    ) -> Result<Vec<TicketSummary>, AppError> {
        self.calls.lock().unwrap().push((params.clone(), bearer));
        match &self.fail_with {
            Some(message) => Err(AppError::Upstream(message.clone())),
            None => Ok(self.tickets.clone()),
        }
    }
}

/// Holds the API router and the collaborators it was built from.
pub struct TestEnv {
    pub router: Router,
    pub state: AppState,
    pub catalog: Arc<FaqCatalog>,
    pub tickets: Option<Arc<RecordingTicketClient>>,
}

impl TestEnv {
    /// Router over the built-in FAQ dataset with no ticket backend.
    pub fn start() -> Self {
        Self::build(FaqCatalog::builtin().expect("built-in catalog"), None)
    }

    /// Router over the built-in FAQ dataset with the given ticket backend.
    pub fn with_tickets(client: RecordingTicketClient) -> Self {
        Self::build(
            FaqCatalog::builtin().expect("built-in catalog"),
            Some(Arc::new(client)),
        )
    }

    pub fn build(catalog: FaqCatalog, tickets: Option<Arc<RecordingTicketClient>>) -> Self {
        let catalog = Arc::new(catalog);
        let leptos_options = leptos::prelude::LeptosOptions::builder()
            .output_name("helpdesk")
            .build();

        let app_state = AppState {
            catalog: catalog.clone(),
            ticket_client: tickets
                .clone()
                .map(|client| client as Arc<dyn TicketClient>),
            leptos_options,
        };

        let router = helpdesk::routes::api_router().with_state(app_state.clone());

        Self {
            router,
            state: app_state,
            catalog,
            tickets,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.router.clone())
    }
}

/// Ids of a JSON array of FAQ entries, in response order.
pub fn ids(results: &[serde_json::Value]) -> Vec<String> {
    results
        .iter()
        .map(|r| r["id"].as_str().unwrap_or_default().to_string())
        .collect()
}
