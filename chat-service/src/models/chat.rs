use serde::{Deserialize, Serialize};

/// Inbound chat request from the web frontend.
///
/// `user_input` must be non-empty after trimming; the handler rejects
/// whitespace-only input before any upstream call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_input: String,
}

/// Generated text returned to the client. Produced only on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
