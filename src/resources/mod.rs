//! Resource kinds covered by the backup traversal

pub mod mapping;

use crate::error::Result;
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::autoscaling::v1::HorizontalPodAutoscaler;
use k8s_openapi::api::core::v1::{ConfigMap, Namespace, Secret, Service, ServiceAccount};
use k8s_openapi::NamespaceResourceScope;
use kube::api::{ApiResource, ListParams, ResourceExt};
use kube::{Api, Client};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for namespaced resource types whose instances can be enumerated by name
#[async_trait]
pub trait Enumerable: Sized {
    /// Create a kube Api handle scoped to a namespace
    fn api(client: Client, namespace: &str) -> Api<Self>;

    /// List the names of all instances in the namespace
    async fn list_names(api: &Api<Self>) -> Result<Vec<String>>;
}

#[async_trait]
impl<K> Enumerable for K
where
    K: kube::Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Clone
        + DeserializeOwned
        + fmt::Debug
        + Send
        + Sync
        + 'static,
{
    fn api(client: Client, namespace: &str) -> Api<Self> {
        Api::namespaced(client, namespace)
    }

    async fn list_names(api: &Api<Self>) -> Result<Vec<String>> {
        let list = api.list(&ListParams::default()).await?;
        Ok(list.items.iter().map(ResourceExt::name_any).collect())
    }
}

/// List instance names of a resource type in a namespace
pub async fn list_names<K: Enumerable>(client: &Client, namespace: &str) -> Result<Vec<String>> {
    let api = K::api(client.clone(), namespace);
    K::list_names(&api).await
}

/// List the names of all namespaces in the cluster
pub async fn list_namespace_names(client: &Client) -> Result<Vec<String>> {
    let api: Api<Namespace> = Api::all(client.clone());
    let list = api.list(&ListParams::default()).await?;
    Ok(list.items.iter().map(ResourceExt::name_any).collect())
}

/// The resource kinds the backup covers, in backup order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupKind {
    Deployment,
    Service,
    #[serde(rename = "hpa")]
    HorizontalPodAutoscaler,
    ServiceAccount,
    Mapping,
    Secret,
    ConfigMap,
}

impl BackupKind {
    /// All kinds in the order they are backed up
    pub const ALL: [BackupKind; 7] = [
        BackupKind::Deployment,
        BackupKind::Service,
        BackupKind::HorizontalPodAutoscaler,
        BackupKind::ServiceAccount,
        BackupKind::Mapping,
        BackupKind::Secret,
        BackupKind::ConfigMap,
    ];

    /// File-name prefix for backed-up manifests of this kind
    pub fn file_prefix(&self) -> &'static str {
        match self {
            BackupKind::Deployment => "deployment",
            BackupKind::Service => "service",
            BackupKind::HorizontalPodAutoscaler => "hpa",
            BackupKind::ServiceAccount => "serviceaccount",
            BackupKind::Mapping => "mapping",
            BackupKind::Secret => "secret",
            BackupKind::ConfigMap => "configmap",
        }
    }

    /// Resource keyword understood by kubectl
    pub fn kubectl_name(&self) -> &'static str {
        match self {
            BackupKind::Deployment => "deploy",
            BackupKind::Service => "service",
            BackupKind::HorizontalPodAutoscaler => "hpa",
            BackupKind::ServiceAccount => "serviceaccount",
            BackupKind::Mapping => "mapping",
            BackupKind::Secret => "secret",
            BackupKind::ConfigMap => "configmap",
        }
    }

    /// ApiResource for dynamic access to this kind
    pub fn api_resource(&self) -> ApiResource {
        match self {
            BackupKind::Deployment => ApiResource::erase::<Deployment>(&()),
            BackupKind::Service => ApiResource::erase::<Service>(&()),
            BackupKind::HorizontalPodAutoscaler => {
                ApiResource::erase::<HorizontalPodAutoscaler>(&())
            }
            BackupKind::ServiceAccount => ApiResource::erase::<ServiceAccount>(&()),
            BackupKind::Mapping => mapping::api_resource(),
            BackupKind::Secret => ApiResource::erase::<Secret>(&()),
            BackupKind::ConfigMap => ApiResource::erase::<ConfigMap>(&()),
        }
    }

    /// List instance names of this kind in a namespace
    pub async fn list_names(&self, client: &Client, namespace: &str) -> Result<Vec<String>> {
        match self {
            BackupKind::Deployment => list_names::<Deployment>(client, namespace).await,
            BackupKind::Service => list_names::<Service>(client, namespace).await,
            BackupKind::HorizontalPodAutoscaler => {
                list_names::<HorizontalPodAutoscaler>(client, namespace).await
            }
            BackupKind::ServiceAccount => list_names::<ServiceAccount>(client, namespace).await,
            BackupKind::Mapping => mapping::list_names(client, namespace).await,
            BackupKind::Secret => list_names::<Secret>(client, namespace).await,
            BackupKind::ConfigMap => list_names::<ConfigMap>(client, namespace).await,
        }
    }
}

impl fmt::Display for BackupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_prefix())
    }
}
