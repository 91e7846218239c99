use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::api::dto::session_dto::{
    SelectNamespaceRequest, SelectPodRequest, SessionStateResponse, UpdateOptionsRequest,
};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::diagnostic::model::Namespace;
use crate::domain::session::model::SelectionState;
use crate::errors::AppError;

pub struct SessionSelectionController;

impl SessionSelectionController {
    /// Re-list namespaces from the cluster
    pub async fn list_namespaces(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<Namespace>>>, AppError> {
        let mut session = state.session.lock().await;
        to_json(session.refresh_namespaces().await.map(<[Namespace]>::to_vec))
    }

    pub async fn get_session(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<SessionStateResponse>>, AppError> {
        let session = state.session.lock().await;
        to_json(Ok(SessionStateResponse {
            phase: session.phase(),
            selection: session.selection().clone(),
            namespaces: session.namespaces().to_vec(),
            pods: session.pods().to_vec(),
            turns: session.history().len(),
        }))
    }

    /// Select a namespace and return its pods
    pub async fn select_namespace(
        State(state): State<AppState>,
        Json(payload): Json<SelectNamespaceRequest>,
    ) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
        payload.validate()?;
        let mut session = state.session.lock().await;
        to_json(session.select_namespace(&payload.namespace).await.map(<[String]>::to_vec))
    }

    pub async fn select_pod(
        State(state): State<AppState>,
        Json(payload): Json<SelectPodRequest>,
    ) -> Result<Json<ApiResponse<SelectionState>>, AppError> {
        payload.validate()?;
        let mut session = state.session.lock().await;
        session.select_pod(&payload.pod)?;
        to_json(Ok(session.selection().clone()))
    }

    pub async fn update_options(
        State(state): State<AppState>,
        Json(payload): Json<UpdateOptionsRequest>,
    ) -> Result<Json<ApiResponse<SelectionState>>, AppError> {
        let mut session = state.session.lock().await;
        if let Some(v) = payload.include_events {
            session.set_include_events(v);
        }
        if let Some(v) = payload.include_logs {
            session.set_include_logs(v);
        }
        to_json(Ok(session.selection().clone()))
    }
}
