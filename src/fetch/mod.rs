//! Manifest retrieval backends
//!
//! Retrieval is injected into the traversal as a capability so the
//! external-process path and the direct API path are interchangeable.

use crate::error::{BackupError, Result};
use crate::resources::BackupKind;
use async_trait::async_trait;
use kube::api::DynamicObject;
use kube::{Api, Client};
use tokio::process::Command;

/// Capability that retrieves one resource instance as YAML text
#[async_trait]
pub trait ManifestSource: Send + Sync {
    async fn fetch(&self, kind: BackupKind, namespace: &str, name: &str) -> Result<String>;
}

/// Retrieves manifests by shelling out to kubectl
pub struct KubectlSource {
    context: Option<String>,
}

impl KubectlSource {
    pub fn new(context: Option<String>) -> Self {
        Self { context }
    }

    fn render_command(&self, kind: BackupKind, namespace: &str, name: &str) -> Vec<String> {
        let mut args = vec![
            "get".to_string(),
            "-o".to_string(),
            "yaml".to_string(),
            "-n".to_string(),
            namespace.to_string(),
            kind.kubectl_name().to_string(),
            name.to_string(),
        ];
        if let Some(context) = &self.context {
            args.push("--context".to_string());
            args.push(context.clone());
        }
        args
    }
}

#[async_trait]
impl ManifestSource for KubectlSource {
    async fn fetch(&self, kind: BackupKind, namespace: &str, name: &str) -> Result<String> {
        let args = self.render_command(kind, namespace, name);
        let output = Command::new("kubectl").args(&args).output().await?;

        if !output.status.success() {
            return Err(BackupError::Fetch {
                command: format!("kubectl {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Retrieves manifests directly through the cluster API
pub struct ApiSource {
    client: Client,
}

impl ApiSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ManifestSource for ApiSource {
    async fn fetch(&self, kind: BackupKind, namespace: &str, name: &str) -> Result<String> {
        let resource = kind.api_resource();
        let api: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), namespace, &resource);
        let object = api.get(name).await?;
        serde_yaml::to_string(&object).map_err(BackupError::from)
    }
}
