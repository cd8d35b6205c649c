use async_trait::async_trait;

use crate::error::AppError;
use crate::tickets::models::{TicketSearchParams, TicketSummary};

/// Trait for ticket backend lookups, enabling mock testing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketClient: Send + Sync {
    /// Search the caller's tickets. `bearer` is forwarded as the
    /// `Authorization: Bearer` credential when present.
    async fn search(
        &self,
        params: &TicketSearchParams,
        bearer: Option<String>,
    ) -> Result<Vec<TicketSummary>, AppError>;
}

/// REST implementation of the TicketClient against the helpdesk backend API.
#[cfg(feature = "ssr")]
pub struct HttpTicketClient {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "ssr")]
impl HttpTicketClient {
    /// `base_url` is the API root, e.g. `http://localhost:8000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl TicketClient for HttpTicketClient {
    async fn search(
        &self,
        params: &TicketSearchParams,
        bearer: Option<String>,
    ) -> Result<Vec<TicketSummary>, AppError> {
        let url = format!("{}{}", self.base_url, params.ticket_api_path());
        tracing::debug!(%url, "Searching tickets");

        let mut request = self.client.get(&url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Ticket backend unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = if text.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                text
            };
            return Err(AppError::Upstream(message));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid ticket response: {e}")))?;

        parse_ticket_list(body)
    }
}

/// Decode a backend response; anything but a JSON array yields no tickets.
pub fn parse_ticket_list(body: serde_json::Value) -> Result<Vec<TicketSummary>, AppError> {
    if !body.is_array() {
        return Ok(Vec::new());
    }

    serde_json::from_value(body)
        .map_err(|e| AppError::Upstream(format!("Invalid ticket response: {e}")))
}
