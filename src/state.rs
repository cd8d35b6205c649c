use std::sync::Arc;

use serde::Deserialize;

use crate::error::AppError;
use crate::faq::catalog::FaqCatalog;
use crate::tickets::client::{HttpTicketClient, TicketClient};

/// Shared state for the axum router and server functions.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FaqCatalog>,
    pub ticket_client: Option<Arc<dyn TicketClient>>,
    pub leptos_options: leptos::prelude::LeptosOptions,
}

impl axum::extract::FromRef<AppState> for leptos::prelude::LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

/// Runtime configuration, read from `HELPDESK_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// YAML file replacing the built-in FAQ dataset (`HELPDESK_FAQ_DATA_PATH`).
    #[serde(default)]
    pub faq_data_path: Option<String>,
    /// Root of the ticket backend API (`HELPDESK_TICKET_API_URL`).
    #[serde(default)]
    pub ticket_api_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("HELPDESK"))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// The configured FAQ dataset, falling back to the built-in one.
    pub fn load_catalog(&self) -> Result<FaqCatalog, AppError> {
        match &self.faq_data_path {
            Some(path) => FaqCatalog::from_path(path),
            None => FaqCatalog::builtin(),
        }
    }

    pub fn ticket_client(&self) -> Option<Arc<dyn TicketClient>> {
        self.ticket_api_url
            .as_ref()
            .map(|url| Arc::new(HttpTicketClient::new(url.clone())) as Arc<dyn TicketClient>)
    }
}

impl AppState {
    pub fn from_config(
        config: &AppConfig,
        leptos_options: leptos::prelude::LeptosOptions,
    ) -> Result<Self, AppError> {
        let catalog = Arc::new(config.load_catalog()?);
        let ticket_client = config.ticket_client();

        if ticket_client.is_none() {
            tracing::warn!("HELPDESK_TICKET_API_URL not set; ticket search is disabled");
        }

        Ok(Self {
            catalog,
            ticket_client,
            leptos_options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_builtin_catalog() {
        let config = AppConfig::default();
        assert_eq!(config.load_catalog().unwrap().entries().len(), 13);
        assert!(config.ticket_client().is_none());
    }

    #[test]
    fn test_ticket_client_configured() {
        let config = AppConfig {
            ticket_api_url: Some("http://localhost:8000/api".into()),
            ..Default::default()
        };
        assert!(config.ticket_client().is_some());
    }

    #[test]
    fn test_missing_dataset_file_is_an_error() {
        let config = AppConfig {
            faq_data_path: Some("/nonexistent/faqs.yaml".into()),
            ..Default::default()
        };
        assert!(matches!(config.load_catalog(), Err(AppError::Catalog(_))));
    }
}
