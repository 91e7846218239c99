// src/domain/llm/service/llm_chat_service.rs
use tracing::debug;

use crate::core::client::llm_client::CompletionService;
use crate::errors::AppResult;

/// Fixed role instruction sent ahead of every composed query.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a kubernetes expert, and will help the user with request below based on the context and info provided";

/// Ask the model one composed diagnostic query. Issued once per turn, never retried.
pub async fn ask_about_pod(completion: &dyn CompletionService, composed_query: &str) -> AppResult<String> {
    let answer = completion.ask(SYSTEM_INSTRUCTION, composed_query).await?;

    debug!("Completion returned {} byte(s)", answer.len());
    Ok(answer)
}
