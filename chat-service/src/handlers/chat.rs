use crate::AppState;
use crate::error::AppError;
use crate::models::{ChatRequest, ChatResponse};
use axum::{Json, extract::State};

/// Relay a single chat message to the inference service.
///
/// Validation happens before any upstream call: whitespace-only input is
/// rejected with 400. Upstream failures already carry their client-facing
/// status and propagate unchanged.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let user_input = payload.user_input.trim();
    if user_input.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "user_input cannot be empty"
        )));
    }

    let prompt = build_prompt(user_input);
    let response = state.ollama_client.generate(&prompt).await?;

    Ok(Json(ChatResponse { response }))
}

fn build_prompt(user_input: &str) -> String {
    format!("Human: {}\nAI:", user_input)
}

#[cfg(test)]
mod tests {
    use super::build_prompt;

    #[test]
    fn prompt_wraps_input_in_human_ai_template() {
        assert_eq!(build_prompt("hello"), "Human: hello\nAI:");
    }

    #[test]
    fn prompt_preserves_interior_whitespace() {
        assert_eq!(build_prompt("a  b"), "Human: a  b\nAI:");
    }
}
