//! Session API DTOs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::diagnostic::model::Namespace;
use crate::domain::session::model::{SelectionState, SessionPhase};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectNamespaceRequest {
    #[validate(length(min = 1))]
    pub namespace: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectPodRequest {
    #[validate(length(min = 1))]
    pub pod: String,
}

/// Partial toggle update; absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOptionsRequest {
    pub include_events: Option<bool>,
    pub include_logs: Option<bool>,
}

/// Message box submission. An empty or missing message is accepted here
/// and answered with a validation turn by the session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitMessageRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStateResponse {
    pub phase: SessionPhase,
    pub selection: SelectionState,
    pub namespaces: Vec<Namespace>,
    pub pods: Vec<String>,
    pub turns: usize,
}
