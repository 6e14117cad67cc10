//! Console output formatting for kubebackup

use crate::commands::backup::BackupSummary;
use crate::resources::BackupKind;
use owo_colors::OwoColorize;

/// Header line printed when a namespace backup begins
pub fn namespace_header(namespace: &str) -> String {
    format!(
        "\n{} Backing up resources in namespace: {}",
        "[+]".green(),
        namespace.bold()
    )
}

/// Progress line for one resource instance
pub fn resource_line(kind: BackupKind, name: &str) -> String {
    format!("\t{} Backing up {} {}", "[+]".green(), kind, name)
}

/// Error line for a failed listing or retrieval
pub fn error_line(message: &str) -> String {
    format!("{} {}", "[!]".red(), message)
}

/// Terminal summary line printed when the run completes
pub fn format_summary(summary: &BackupSummary) -> String {
    format!(
        "\n{} Backup complete: {} manifests written from {} of {} namespaces \
         ({} names skipped, {} retrieval failures, {} listing failures)",
        "[OK]".green(),
        summary.files_written,
        summary.namespaces_backed_up,
        summary.namespaces_visited,
        summary.names_skipped,
        summary.fetch_failures,
        summary.listing_failures,
    )
}
