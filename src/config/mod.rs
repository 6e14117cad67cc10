//! Backup configuration for kubebackup

use crate::error::{BackupError, Result};
use crate::resources::BackupKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default root directory for backup output
pub const DEFAULT_OUTPUT_ROOT: &str = "full-backup-k8s";

/// Substring marking system-managed resource names that are never backed up
pub const RESERVED_NAME_MARKER: &str = "kube-root-ca";

/// Namespaces excluded from backup by default (exact, case-sensitive match)
pub const DEFAULT_EXCLUDED_NAMESPACES: &[&str] = &[
    "kube-system",
    "kube-node-lease",
    "kube-public",
    "default",
    "dynatrace",
    "monitoring",
    "castai-agent",
    "gke-managed-system",
    "emissary-system",
    "ambassador",
];

/// Backup configuration, optionally loaded from a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Root directory that per-namespace backup directories are created under
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Namespaces whose resources are not backed up (directories are still created)
    #[serde(default = "default_excluded_namespaces")]
    pub excluded_namespaces: Vec<String>,

    /// Resource names containing this substring are skipped
    #[serde(default = "default_reserved_marker")]
    pub reserved_name_marker: String,

    /// Resource kinds to back up, in order
    #[serde(default = "default_kinds")]
    pub kinds: Vec<BackupKind>,
}

fn default_output_root() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_ROOT)
}

fn default_excluded_namespaces() -> Vec<String> {
    DEFAULT_EXCLUDED_NAMESPACES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_reserved_marker() -> String {
    RESERVED_NAME_MARKER.to_string()
}

fn default_kinds() -> Vec<BackupKind> {
    BackupKind::ALL.to_vec()
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            excluded_namespaces: default_excluded_namespaces(),
            reserved_name_marker: default_reserved_marker(),
            kinds: default_kinds(),
        }
    }
}

impl BackupConfig {
    /// Load configuration from a TOML file, or defaults if no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content).map_err(|e| BackupError::Config(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Whether a namespace is excluded from backup
    pub fn is_excluded(&self, namespace: &str) -> bool {
        self.excluded_namespaces.iter().any(|n| n == namespace)
    }

    /// Whether a resource name is skipped by the reserved-name filter
    pub fn skip_name(&self, name: &str) -> bool {
        name.contains(&self.reserved_name_marker)
    }

    /// Append additional excluded namespaces
    pub fn exclude_namespaces<I, S>(&mut self, namespaces: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_namespaces
            .extend(namespaces.into_iter().map(Into::into));
    }
}
