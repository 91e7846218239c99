use axum::{
    routing::{get, post, put},
    Router,
};

use crate::api::controller::chat::ChatController;
use crate::api::controller::session::SessionSelectionController;
use crate::app_state::AppState;

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(SessionSelectionController::get_session))
        .route("/namespace", put(SessionSelectionController::select_namespace))
        .route("/pod", put(SessionSelectionController::select_pod))
        .route("/options", put(SessionSelectionController::update_options))
        .route("/messages", post(ChatController::submit_message))
        .route("/history", get(ChatController::get_history))
}
