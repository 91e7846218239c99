use axum::{routing::get, Router};

use crate::api::controller::session::SessionSelectionController;
use crate::app_state::AppState;

pub fn namespace_routes() -> Router<AppState> {
    Router::new().route("/", get(SessionSelectionController::list_namespaces))
}
