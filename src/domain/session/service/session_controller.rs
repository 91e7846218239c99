use std::sync::Arc;

use tracing::{info, warn};

use crate::core::client::cluster_reader::ClusterReader;
use crate::core::client::llm_client::CompletionService;
use crate::domain::diagnostic::model::{Namespace, PodRef};
use crate::domain::diagnostic::service::diagnostic_aggregator::build_bundle;
use crate::domain::diagnostic::service::prompt_composer::compose;
use crate::domain::llm::service::llm_chat_service::ask_about_pod;
use crate::domain::session::model::{ChatHistory, ChatTurn, SelectionState, SessionPhase};
use crate::errors::{AppError, AppResult};

/// Response recorded when a message is submitted without a full selection.
pub const VALIDATION_MESSAGE: &str = "Please select a namespace and pod.";

/// Displayed request recorded for an empty message.
pub const EMPTY_REQUEST_PLACEHOLDER: &str = "Error";

/// Selection state, picker lists and transcript of one operator session.
///
/// Every method takes `&mut self`, so a caller sharing the controller must
/// serialize access; a turn is fully appended before the next one starts.
pub struct SessionController {
    reader: Arc<dyn ClusterReader>,
    completion: Arc<dyn CompletionService>,
    selection: SelectionState,
    namespaces: Vec<Namespace>,
    pods: Vec<String>,
    history: ChatHistory,
}

impl SessionController {
    pub fn new(reader: Arc<dyn ClusterReader>, completion: Arc<dyn CompletionService>) -> Self {
        Self {
            reader,
            completion,
            selection: SelectionState::default(),
            namespaces: Vec::new(),
            pods: Vec::new(),
            history: ChatHistory::default(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.selection.phase()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Namespaces from the last refresh.
    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    /// Pods of the selected namespace, from the last namespace selection.
    pub fn pods(&self) -> &[String] {
        &self.pods
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Re-list namespaces from the cluster.
    pub async fn refresh_namespaces(&mut self) -> AppResult<&[Namespace]> {
        self.namespaces = self.reader.list_namespaces().await?;
        Ok(&self.namespaces)
    }

    /// Select a namespace from any state. Drops the selected pod and
    /// re-lists pods for the new namespace.
    pub async fn select_namespace(&mut self, namespace: &str) -> AppResult<&[String]> {
        self.selection.namespace = Some(namespace.to_string());
        self.selection.pod = None;
        self.pods.clear();

        self.pods = self.reader.list_pods(namespace).await?;

        info!(namespace = %namespace, pods = self.pods.len(), "Namespace selected");
        Ok(&self.pods)
    }

    /// Select a pod of the current namespace.
    pub fn select_pod(&mut self, pod: &str) -> AppResult<()> {
        let namespace = self
            .selection
            .namespace
            .clone()
            .ok_or_else(|| AppError::InvalidSelection("select a namespace before selecting a pod".into()))?;

        if !self.pods.iter().any(|p| p == pod) {
            return Err(AppError::InvalidSelection(format!(
                "pod '{}' is not listed in namespace '{}'",
                pod, namespace
            )));
        }

        info!(namespace = %namespace, pod = %pod, "Pod selected");
        self.selection.pod = Some(PodRef::new(namespace, pod));
        Ok(())
    }

    pub fn set_include_events(&mut self, include: bool) {
        self.selection.include_events = include;
    }

    pub fn set_include_logs(&mut self, include: bool) {
        self.selection.include_logs = include;
    }

    /// Handle one operator message and return the turn appended to history.
    ///
    /// Without a selected pod, or with an empty message, no external call is
    /// made and the turn carries `VALIDATION_MESSAGE`. Otherwise the bundle is
    /// built, composed and sent to the model. A failed turn appends nothing.
    pub async fn submit(&mut self, message: &str) -> AppResult<ChatTurn> {
        let pod = match (&self.selection.pod, message.trim().is_empty()) {
            (Some(pod), false) => pod.clone(),
            _ => {
                let displayed = if message.is_empty() {
                    EMPTY_REQUEST_PLACEHOLDER
                } else {
                    message
                };
                let turn = self.history.push(ChatTurn::new(displayed, VALIDATION_MESSAGE)).clone();
                return Ok(turn);
            }
        };

        let options = self.selection.options();
        let displayed_request = format!(
            "Namespace {}, Pod: {}, Include Events: {}, Include Logs: {} \n {}",
            pod.namespace, pod.name, options.include_events, options.include_logs, message
        );

        let answer = async {
            let bundle = build_bundle(self.reader.as_ref(), &pod, options).await?;
            let query = compose(message, &bundle);
            ask_about_pod(self.completion.as_ref(), &query).await
        }
        .await
        .inspect_err(|e| {
            warn!(namespace = %pod.namespace, pod = %pod.name, error = %e, "Diagnostic turn failed");
        })?;

        let turn = self.history.push(ChatTurn::new(displayed_request, answer)).clone();
        info!(
            namespace = %pod.namespace,
            pod = %pod.name,
            turns = self.history.len(),
            "Diagnostic turn completed"
        );
        Ok(turn)
    }
}
