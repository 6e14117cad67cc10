//! Ambassador Mapping custom resource
//!
//! Mappings live under their own API group and are only present on
//! clusters where the Ambassador CRDs are installed.

use crate::error::Result;
use kube::api::{ApiResource, DynamicObject, GroupVersionKind, ListParams, ResourceExt};
use kube::{Api, Client};

pub const GROUP: &str = "getambassador.io";
pub const VERSION: &str = "v2";
pub const KIND: &str = "Mapping";
pub const PLURAL: &str = "mappings";

/// ApiResource describing the Mapping custom resource
pub fn api_resource() -> ApiResource {
    ApiResource::from_gvk_with_plural(&GroupVersionKind::gvk(GROUP, VERSION, KIND), PLURAL)
}

/// List the names of all Mappings in a namespace
pub async fn list_names(client: &Client, namespace: &str) -> Result<Vec<String>> {
    let api: Api<DynamicObject> = Api::namespaced_with(client.clone(), namespace, &api_resource());
    let list = api.list(&ListParams::default()).await?;
    Ok(list.items.iter().map(ResourceExt::name_any).collect())
}
