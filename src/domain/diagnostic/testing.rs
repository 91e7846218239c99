//! In-memory fakes for the cluster and completion collaborators.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::core::client::cluster_reader::ClusterReader;
use crate::core::client::llm_client::CompletionService;
use crate::domain::diagnostic::model::{LogText, Namespace, PodDetail, RawEventRecord};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReaderCalls {
    pub list_namespaces: usize,
    pub list_pods: usize,
    pub get_pod_detail: usize,
    pub list_events: usize,
    pub get_logs: usize,
}

impl ReaderCalls {
    pub fn total(&self) -> usize {
        self.list_namespaces + self.list_pods + self.get_pod_detail + self.list_events + self.get_logs
    }
}

/// Which call should fail with `ClusterRead`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Events,
    Logs,
}

#[derive(Default)]
pub struct FakeClusterReader {
    /// namespace -> pod names, in listing order
    pub pods: Vec<(Namespace, Vec<String>)>,
    pub details: HashMap<(String, String), PodDetail>,
    pub events: HashMap<String, Vec<RawEventRecord>>,
    pub logs: HashMap<(String, String), LogText>,
    pub fail_on: Option<FailOn>,
    pub calls: Mutex<ReaderCalls>,
}

impl FakeClusterReader {
    /// `default/web-1` and `default/web-2` plus a `kube-system/coredns` pod.
    pub fn sample() -> Self {
        let mut reader = FakeClusterReader {
            pods: vec![
                ("default".into(), vec!["web-1".into(), "web-2".into()]),
                ("kube-system".into(), vec!["coredns".into()]),
            ],
            ..Default::default()
        };
        for (ns, pod) in [("default", "web-1"), ("default", "web-2"), ("kube-system", "coredns")] {
            reader.details.insert(
                (ns.into(), pod.into()),
                PodDetail(json!({
                    "metadata": {
                        "name": pod,
                        "namespace": ns,
                        "managedFields": [{"manager": "kubelet", "operation": "Update"}]
                    },
                    "status": {"phase": "Running"}
                })),
            );
        }
        reader.events.insert(
            "default".into(),
            vec![
                raw_event("ev1", "web-1", "Scheduled", "assigned to node1"),
                raw_event("ev-other", "web-2", "Killing", "stopping container"),
                raw_event("ev2", "web-1", "Pulled", "image pulled"),
            ],
        );
        reader
            .logs
            .insert(("default".into(), "web-1".into()), "listening on :8080\n".into());
        reader
    }

    pub fn with_failure(mut self, fail_on: FailOn) -> Self {
        self.fail_on = Some(fail_on);
        self
    }

    pub fn calls(&self) -> ReaderCalls {
        *self.calls.lock().unwrap()
    }
}

pub fn raw_event(name: &str, involved: &str, reason: &str, message: &str) -> RawEventRecord {
    RawEventRecord {
        name: name.into(),
        message: message.into(),
        reason: reason.into(),
        involved_object_name: involved.into(),
    }
}

#[async_trait]
impl ClusterReader for FakeClusterReader {
    async fn list_namespaces(&self) -> AppResult<Vec<Namespace>> {
        self.calls.lock().unwrap().list_namespaces += 1;
        Ok(self.pods.iter().map(|(ns, _)| ns.clone()).collect())
    }

    async fn list_pods(&self, namespace: &str) -> AppResult<Vec<String>> {
        self.calls.lock().unwrap().list_pods += 1;
        self.pods
            .iter()
            .find(|(ns, _)| ns == namespace)
            .map(|(_, pods)| pods.clone())
            .ok_or_else(|| AppError::NotFound(format!("namespace {}", namespace)))
    }

    async fn get_pod_detail(&self, namespace: &str, pod: &str) -> AppResult<PodDetail> {
        self.calls.lock().unwrap().get_pod_detail += 1;
        self.details
            .get(&(namespace.to_string(), pod.to_string()))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("pods \"{}\" not found", pod)))
    }

    async fn list_events(&self, namespace: &str) -> AppResult<Vec<RawEventRecord>> {
        self.calls.lock().unwrap().list_events += 1;
        if self.fail_on == Some(FailOn::Events) {
            return Err(AppError::ClusterRead("events: connection reset".into()));
        }
        Ok(self.events.get(namespace).cloned().unwrap_or_default())
    }

    async fn get_logs(&self, namespace: &str, pod: &str) -> AppResult<LogText> {
        self.calls.lock().unwrap().get_logs += 1;
        if self.fail_on == Some(FailOn::Logs) {
            return Err(AppError::ClusterRead("logs: container not ready".into()));
        }
        Ok(self
            .logs
            .get(&(namespace.to_string(), pod.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

/// Records every query and answers with a fixed string, or fails.
#[derive(Default)]
pub struct FakeCompletionService {
    pub answer: String,
    pub fail: bool,
    pub queries: Mutex<Vec<(String, String)>>,
}

impl FakeCompletionService {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.into(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionService for FakeCompletionService {
    async fn ask(&self, system_instruction: &str, query: &str) -> AppResult<String> {
        self.queries
            .lock()
            .unwrap()
            .push((system_instruction.to_string(), query.to_string()));
        if self.fail {
            return Err(AppError::Completion("401 invalid api key".into()));
        }
        Ok(self.answer.clone())
    }
}
