use async_trait::async_trait;
use kube::Client;

use crate::core::client::events::fetch_events_by_namespace;
use crate::core::client::mappers::{map_event_to_raw_record, map_pod_to_detail};
use crate::core::client::namespaces::fetch_namespace_names;
use crate::core::client::pods::{
    fetch_pod_by_name_and_namespace, fetch_pod_logs, fetch_pod_names_by_namespace,
};
use crate::domain::diagnostic::model::{LogText, Namespace, PodDetail, RawEventRecord};
use crate::errors::AppResult;

/// Read-only view of the cluster used by the diagnostic pipeline.
///
/// Every method is one cluster call. Implementations report a missing
/// namespace or pod as `AppError::NotFound` and any other failure as
/// `AppError::ClusterRead`.
#[async_trait]
pub trait ClusterReader: Send + Sync {
    async fn list_namespaces(&self) -> AppResult<Vec<Namespace>>;

    async fn list_pods(&self, namespace: &str) -> AppResult<Vec<String>>;

    async fn get_pod_detail(&self, namespace: &str, pod: &str) -> AppResult<PodDetail>;

    /// All events of the namespace, in the order the API returned them.
    async fn list_events(&self, namespace: &str) -> AppResult<Vec<RawEventRecord>>;

    async fn get_logs(&self, namespace: &str, pod: &str) -> AppResult<LogText>;
}

/// `ClusterReader` backed by the kube-rs client.
#[derive(Clone)]
pub struct KubeClusterReader {
    client: Client,
    log_tail_lines: Option<i64>,
}

impl KubeClusterReader {
    pub fn new(client: Client, log_tail_lines: Option<i64>) -> Self {
        Self {
            client,
            log_tail_lines,
        }
    }
}

#[async_trait]
impl ClusterReader for KubeClusterReader {
    async fn list_namespaces(&self) -> AppResult<Vec<Namespace>> {
        fetch_namespace_names(&self.client).await
    }

    async fn list_pods(&self, namespace: &str) -> AppResult<Vec<String>> {
        fetch_pod_names_by_namespace(&self.client, namespace).await
    }

    async fn get_pod_detail(&self, namespace: &str, pod: &str) -> AppResult<PodDetail> {
        let pod = fetch_pod_by_name_and_namespace(&self.client, namespace, pod).await?;
        map_pod_to_detail(&pod)
    }

    async fn list_events(&self, namespace: &str) -> AppResult<Vec<RawEventRecord>> {
        let events = fetch_events_by_namespace(&self.client, namespace).await?;
        Ok(events.into_iter().map(map_event_to_raw_record).collect())
    }

    async fn get_logs(&self, namespace: &str, pod: &str) -> AppResult<LogText> {
        fetch_pod_logs(&self.client, namespace, pod, self.log_tail_lines).await
    }
}
