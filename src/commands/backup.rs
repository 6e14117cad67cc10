//! Per-namespace backup traversal

use crate::config::BackupConfig;
use crate::error::Result;
use crate::fetch::ManifestSource;
use crate::output;
use crate::resources::{self, BackupKind};
use kube::Client;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Counters accumulated over one backup run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BackupSummary {
    /// Namespaces seen in the cluster
    pub namespaces_visited: usize,

    /// Namespaces that were not excluded and had their resources backed up
    pub namespaces_backed_up: usize,

    /// Manifest files written
    pub files_written: usize,

    /// Instance names skipped by the reserved-name filter
    pub names_skipped: usize,

    /// Instances whose retrieval failed
    pub fetch_failures: usize,

    /// (namespace, kind) listings that failed
    pub listing_failures: usize,
}

/// Output path for one backed-up manifest
pub fn manifest_path(namespace_dir: &Path, kind: BackupKind, name: &str) -> PathBuf {
    namespace_dir.join(format!("{}-{}.yaml", kind.file_prefix(), name))
}

/// Back up a list of named instances of one kind into a namespace directory.
///
/// Each instance is isolated: a failed retrieval is logged, counted, and
/// the loop moves on. Only file-system errors abort.
pub async fn backup_instances(
    source: &dyn ManifestSource,
    kind: BackupKind,
    namespace: &str,
    namespace_dir: &Path,
    names: &[String],
    config: &BackupConfig,
    summary: &mut BackupSummary,
) -> Result<()> {
    for name in names {
        if config.skip_name(name) {
            debug!(%namespace, %name, "reserved name, not backed up");
            summary.names_skipped += 1;
            continue;
        }

        println!("{}", output::resource_line(kind, name));

        match source.fetch(kind, namespace, name).await {
            Ok(yaml) => {
                fs::write(manifest_path(namespace_dir, kind, name), yaml)?;
                summary.files_written += 1;
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    output::error_line(&format!(
                        "Failed to retrieve {} {} in namespace {}: {}",
                        kind, name, namespace, e
                    ))
                );
                summary.fetch_failures += 1;
            }
        }
    }

    Ok(())
}

/// Run the full backup traversal: every namespace, every configured kind.
///
/// Per-namespace directories are created for excluded namespaces too;
/// only the resource backup itself is skipped for them.
pub async fn run_backup(
    client: &Client,
    source: &dyn ManifestSource,
    config: &BackupConfig,
) -> Result<BackupSummary> {
    fs::create_dir_all(&config.output_root)?;

    let namespaces = resources::list_namespace_names(client).await?;
    let mut summary = BackupSummary::default();

    for namespace in &namespaces {
        summary.namespaces_visited += 1;

        let namespace_dir = config.output_root.join(namespace);
        fs::create_dir_all(&namespace_dir)?;

        if config.is_excluded(namespace) {
            debug!(%namespace, "namespace excluded, no resources backed up");
            continue;
        }

        summary.namespaces_backed_up += 1;
        println!("{}", output::namespace_header(namespace));

        for kind in &config.kinds {
            let names = match kind.list_names(client, namespace).await {
                Ok(names) => names,
                Err(e) => {
                    eprintln!(
                        "{}",
                        output::error_line(&format!(
                            "Failed to list {}s in namespace {}: {}",
                            kind, namespace, e
                        ))
                    );
                    summary.listing_failures += 1;
                    continue;
                }
            };

            backup_instances(
                source,
                *kind,
                namespace,
                &namespace_dir,
                &names,
                config,
                &mut summary,
            )
            .await?;
        }
    }

    Ok(summary)
}
