use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Namespace name as listed by the cluster.
pub type Namespace = String;

/// Raw log text of a pod, passed through untouched.
pub type LogText = String;

/// Target of a diagnostic query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodRef {
    pub namespace: Namespace,
    pub name: String,
}

impl PodRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// Snapshot of a pod's spec/status as an opaque nested mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PodDetail(pub Value);

impl PodDetail {
    /// Removes `metadata.managedFields`. Provenance only, no diagnostic signal.
    pub fn strip_managed_fields(mut self) -> Self {
        if let Some(metadata) = self.0.get_mut("metadata").and_then(Value::as_object_mut) {
            metadata.remove("managedFields");
        }
        self
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Event as returned by the cluster, before filtering by involved object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEventRecord {
    pub name: String,
    pub message: String,
    pub reason: String,
    pub involved_object_name: String,
}

/// Reduced event shape carried in a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub message: String,
    pub reason: String,
}

impl From<RawEventRecord> for EventRecord {
    fn from(raw: RawEventRecord) -> Self {
        EventRecord {
            name: raw.name,
            message: raw.message,
            reason: raw.reason,
        }
    }
}

/// Which optional sections a bundle should carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticOptions {
    pub include_events: bool,
    pub include_logs: bool,
}

/// Request-scoped context for one question about one pod.
///
/// `events` is `Some` iff events were requested, `logs` is `Some` iff
/// logs were requested. Built fresh for every turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticBundle {
    pub detail: PodDetail,
    pub events: Option<Vec<EventRecord>>,
    pub logs: Option<LogText>,
}
