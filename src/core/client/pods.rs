use kube::api::{ListParams, LogParams};
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Pod;
use crate::errors::{cluster_error, AppResult};

/// Fetch pods in a specific namespace
pub async fn fetch_pods_by_namespace(client: &Client, namespace: &str) -> AppResult<Vec<Pod>> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let pod_list = pods
        .list(&ListParams::default())
        .await
        .map_err(cluster_error)?;

    debug!("Discovered {} pod(s) in namespace '{}'", pod_list.items.len(), namespace);
    Ok(pod_list.items)
}

/// Fetch a single pod by name and namespace
pub async fn fetch_pod_by_name_and_namespace(
    client: &Client,
    namespace: &str,
    pod_name: &str,
) -> AppResult<Pod> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let pod = pods.get(pod_name).await.map_err(cluster_error)?;

    debug!("Fetched pod: {}/{}", namespace, pod_name);
    Ok(pod)
}

/// Fetch pod names in a specific namespace
pub async fn fetch_pod_names_by_namespace(
    client: &Client,
    namespace: &str,
) -> AppResult<Vec<String>> {
    let pods = fetch_pods_by_namespace(client, namespace).await?;
    let names = pods
        .into_iter()
        .filter_map(|p| p.metadata.name)
        .collect();

    Ok(names)
}

/// Fetch the current log text of a pod (default container).
/// `tail_lines` bounds the fetch; `None` returns the whole log.
pub async fn fetch_pod_logs(
    client: &Client,
    namespace: &str,
    pod_name: &str,
    tail_lines: Option<i64>,
) -> AppResult<String> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let lp = LogParams {
        tail_lines,
        ..Default::default()
    };
    let logs = pods.logs(pod_name, &lp).await.map_err(cluster_error)?;

    debug!("Fetched {} byte(s) of logs for {}/{}", logs.len(), namespace, pod_name);
    Ok(logs)
}
