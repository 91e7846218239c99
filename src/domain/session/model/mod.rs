use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::diagnostic::model::{DiagnosticOptions, Namespace, PodRef};

/// Where the session stands in the pick-namespace, pick-pod, ask flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    NoNamespace,
    NamespaceSelected,
    PodSelected,
}

/// Current picks. A selected pod always belongs to the selected namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub namespace: Option<Namespace>,
    pub pod: Option<PodRef>,
    pub include_events: bool,
    pub include_logs: bool,
}

impl SelectionState {
    pub fn phase(&self) -> SessionPhase {
        match (&self.namespace, &self.pod) {
            (None, _) => SessionPhase::NoNamespace,
            (Some(_), None) => SessionPhase::NamespaceSelected,
            (Some(_), Some(_)) => SessionPhase::PodSelected,
        }
    }

    pub fn options(&self) -> DiagnosticOptions {
        DiagnosticOptions {
            include_events: self.include_events,
            include_logs: self.include_logs,
        }
    }
}

/// One request/response exchange shown in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    pub id: Uuid,
    /// Request as shown to the operator, annotated with the selection.
    pub displayed_request: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

impl ChatTurn {
    pub fn new(displayed_request: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            displayed_request: displayed_request.into(),
            response: response.into(),
            created_at: Utc::now(),
        }
    }
}

/// Append-only transcript for the lifetime of the process.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    pub fn push(&mut self, turn: ChatTurn) -> &ChatTurn {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
