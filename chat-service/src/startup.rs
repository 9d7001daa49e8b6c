//! Application startup and lifecycle management.

use crate::AppState;
use crate::config::Settings;
use crate::error::AppError;
use crate::handlers::{app::health_check, chat::chat_handler};
use crate::services::OllamaClient;
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
    allowed_origin: HeaderValue,
}

impl Application {
    /// Build the application with the given settings.
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        let ollama_client = Arc::new(OllamaClient::new(settings.ollama.clone()));
        let state = AppState::new(ollama_client);

        let allowed_origin = settings
            .cors
            .allowed_origin
            .parse::<HeaderValue>()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "Invalid CORS origin '{}': {}",
                    settings.cors.allowed_origin,
                    e
                ))
            })?;

        // Bind listener (port 0 = random port for testing)
        let address = format!("{}:{}", settings.host, settings.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            upstream = %settings.ollama.url,
            model = %settings.ollama.model,
            "Initialized inference client"
        );

        Ok(Self {
            port,
            listener,
            state,
            allowed_origin,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = build_router(self.state, self.allowed_origin);
        axum::serve(self.listener, app).await
    }
}

pub fn build_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    // Credentials are allowed, so methods and headers must mirror the
    // request rather than use wildcards.
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/health", get(health_check))
        .route("/chat", post(chat_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
