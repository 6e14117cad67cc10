//! Error types for kubebackup

use thiserror::Error;

/// Main error type for kubebackup
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Retrieval command failed: {command}\n{stderr}")]
    Fetch { command: String, stderr: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_yaml::Error> for BackupError {
    fn from(e: serde_yaml::Error) -> Self {
        BackupError::Serialization(e.to_string())
    }
}

/// Result type alias for kubebackup
pub type Result<T> = std::result::Result<T, BackupError>;
