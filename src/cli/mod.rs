//! CLI definition using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kbak",
    version,
    about = "Per-namespace YAML backups of Kubernetes manifests",
    long_about = None,
)]
pub struct Cli {
    /// Kubernetes context to use
    #[arg(long, env = "KBAK_CONTEXT")]
    pub context: Option<String>,

    /// Root directory for backup output
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Additional namespaces to exclude (appended to the defaults)
    #[arg(short = 'x', long = "exclude-namespace")]
    pub exclude_namespace: Vec<String>,

    /// Retrieve manifests through the cluster API instead of kubectl
    #[arg(long)]
    pub native: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
