//! Re-export the Kubernetes resource types the cluster reader works with

pub use k8s_openapi::api::core::v1::{
    Event,
    Namespace,
    ObjectReference,
    Pod,
};

pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
