// Kube-rs based Kubernetes client
pub mod kube_client;
pub mod kube_resources;
pub mod namespaces;
pub mod pods;
pub mod events;
pub mod mappers;
pub mod cluster_reader;

// Other clients
pub mod llm_client;
