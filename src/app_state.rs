use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::client::cluster_reader::ClusterReader;
use crate::core::client::llm_client::CompletionService;
use crate::domain::session::service::session_controller::SessionController;

/// Shared handler state. The process owns exactly one session; the mutex
/// keeps turns strictly ordered.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<SessionController>>,
}

pub fn build_app_state(
    reader: Arc<dyn ClusterReader>,
    completion: Arc<dyn CompletionService>,
) -> AppState {
    AppState {
        session: Arc::new(Mutex::new(SessionController::new(reader, completion))),
    }
}
