use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Namespace;
use crate::errors::{cluster_error, AppResult};

/// Fetch all namespaces in the cluster
pub async fn fetch_namespaces(client: &Client) -> AppResult<Vec<Namespace>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let namespace_list = namespaces
        .list(&ListParams::default())
        .await
        .map_err(cluster_error)?;

    debug!("Discovered {} namespace(s)", namespace_list.items.len());
    Ok(namespace_list.items)
}

/// Fetch namespace names only, in API order
pub async fn fetch_namespace_names(client: &Client) -> AppResult<Vec<String>> {
    let namespaces = fetch_namespaces(client).await?;
    let names = namespaces
        .into_iter()
        .filter_map(|n| n.metadata.name)
        .collect();

    Ok(names)
}
