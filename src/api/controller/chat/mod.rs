use axum::extract::State;
use axum::Json;

use crate::api::dto::session_dto::SubmitMessageRequest;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::session::model::ChatTurn;
use crate::errors::AppError;

pub struct ChatController;

impl ChatController {
    /// Submit one message; responds with the turn appended to history
    pub async fn submit_message(
        State(state): State<AppState>,
        Json(payload): Json<SubmitMessageRequest>,
    ) -> Result<Json<ApiResponse<ChatTurn>>, AppError> {
        let mut session = state.session.lock().await;
        to_json(session.submit(&payload.message).await)
    }

    /// Transcript in append order
    pub async fn get_history(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<ChatTurn>>>, AppError> {
        let session = state.session.lock().await;
        to_json(Ok(session.history().turns().to_vec()))
    }
}
