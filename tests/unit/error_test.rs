//! Tests for src/error/mod.rs - BackupError

use kubebackup::error::BackupError;
use std::error::Error;

// ============================================================================
// BackupError Display tests
// ============================================================================

#[test]
fn test_fetch_error_display() {
    let err = BackupError::Fetch {
        command: "kubectl get -o yaml -n team-a deploy api".to_string(),
        stderr: "Error from server (NotFound): deployments.apps \"api\" not found".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("Retrieval command failed"));
    assert!(display.contains("kubectl get -o yaml -n team-a deploy api"));
    assert!(display.contains("NotFound"));
}

#[test]
fn test_config_error_display() {
    let err = BackupError::Config("Failed to load kubeconfig".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Configuration error"));
    assert!(display.contains("Failed to load kubeconfig"));
}

#[test]
fn test_serialization_error_display() {
    let err = BackupError::Serialization("unexpected end of stream".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Serialization error"));
    assert!(display.contains("unexpected end of stream"));
}

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
    let err: BackupError = io_err.into();
    let display = format!("{}", err);
    assert!(display.contains("IO error"));
    assert!(display.contains("permission denied"));
}

// ============================================================================
// BackupError From conversions tests
// ============================================================================

#[test]
fn test_from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BackupError = io_err.into();

    if let BackupError::Io(e) = err {
        assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
    } else {
        panic!("Expected BackupError::Io");
    }
}

#[test]
fn test_from_serde_yaml_error() {
    let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(":\ninvalid").unwrap_err();
    let err: BackupError = yaml_err.into();

    if let BackupError::Serialization(msg) = err {
        assert!(!msg.is_empty());
    } else {
        panic!("Expected BackupError::Serialization");
    }
}

// ============================================================================
// BackupError Error trait tests
// ============================================================================

#[test]
fn test_error_source_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BackupError = io_err.into();
    assert!(err.source().is_some());
}

#[test]
fn test_error_source_fetch() {
    let err = BackupError::Fetch {
        command: "kubectl get -o yaml -n ns secret s".to_string(),
        stderr: String::new(),
    };
    assert!(err.source().is_none());
}

// ============================================================================
// BackupError pattern matching tests
// ============================================================================

#[test]
fn test_fetch_error_carries_invocation() {
    let err = BackupError::Fetch {
        command: "kubectl get -o yaml -n ns mapping m".to_string(),
        stderr: "the server doesn't have a resource type \"mapping\"".to_string(),
    };

    if let BackupError::Fetch { command, stderr } = err {
        assert!(command.starts_with("kubectl"));
        assert!(stderr.contains("resource type"));
    } else {
        panic!("Wrong error variant");
    }
}
