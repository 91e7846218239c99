use anyhow::Result;
use kube::Client;
use tracing::debug;

/// Creates a Kubernetes client from the local kubeconfig or the in-cluster service account
pub async fn build_kube_client() -> Result<Client> {
    let client = Client::try_default().await?;

    debug!(
        "Kubernetes client initialized (default namespace '{}')",
        client.default_namespace()
    );
    Ok(client)
}
