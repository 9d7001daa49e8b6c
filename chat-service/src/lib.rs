pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;

use services::ollama_client::OllamaClient;
use std::sync::Arc;

/// Shared application state containing the upstream inference client
#[derive(Clone)]
pub struct AppState {
    pub ollama_client: Arc<OllamaClient>,
}

impl AppState {
    pub fn new(ollama_client: Arc<OllamaClient>) -> Self {
        Self { ollama_client }
    }
}
