use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Event;
use crate::errors::{cluster_error, AppResult};

/// Fetch all core/v1 events in a namespace, in API order
pub async fn fetch_events_by_namespace(client: &Client, namespace: &str) -> AppResult<Vec<Event>> {
    let events: Api<Event> = Api::namespaced(client.clone(), namespace);
    let event_list = events
        .list(&ListParams::default())
        .await
        .map_err(cluster_error)?;

    debug!("Discovered {} event(s) in namespace '{}'", event_list.items.len(), namespace);
    Ok(event_list.items)
}
