//! Maps kube-rs / k8s-openapi types → internal domain models
use crate::core::client::kube_resources::{Event, Pod};
use crate::domain::diagnostic::model::{PodDetail, RawEventRecord};
use crate::errors::{internal_error, AppResult};

/// Converts a k8s-openapi Pod into the opaque detail mapping (camelCase keys)
pub fn map_pod_to_detail(pod: &Pod) -> AppResult<PodDetail> {
    let value = serde_json::to_value(pod).map_err(internal_error)?;
    Ok(PodDetail(value))
}

/// Converts a k8s-openapi Event into the raw record used for filtering.
/// Absent strings become empty strings.
pub fn map_event_to_raw_record(event: Event) -> RawEventRecord {
    RawEventRecord {
        name: event.metadata.name.unwrap_or_default(),
        message: event.message.unwrap_or_default(),
        reason: event.reason.unwrap_or_default(),
        involved_object_name: event.involved_object.name.unwrap_or_default(),
    }
}
