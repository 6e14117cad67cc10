//! kubebackup (kbak) - per-namespace YAML backups of Kubernetes manifests

use anyhow::Result;
use clap::Parser;
use kubebackup::cli::Cli;
use kubebackup::client::create_client;
use kubebackup::commands::run_backup;
use kubebackup::config::BackupConfig;
use kubebackup::fetch::{ApiSource, KubectlSource, ManifestSource};
use kubebackup::output;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    setup_tracing(cli.verbose);

    // Handle color settings
    if cli.no_color {
        owo_colors::set_override(false);
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> kubebackup::error::Result<()> {
    let mut config = BackupConfig::load(cli.config.as_deref())?;
    if let Some(output_dir) = cli.output_dir {
        config.output_root = output_dir;
    }
    config.exclude_namespaces(cli.exclude_namespace);

    let client = create_client(cli.context.as_deref()).await?;

    let source: Box<dyn ManifestSource> = if cli.native {
        Box::new(ApiSource::new(client.clone()))
    } else {
        Box::new(KubectlSource::new(cli.context.clone()))
    };

    let summary = run_backup(&client, source.as_ref(), &config).await?;
    println!("{}", output::format_summary(&summary));

    Ok(())
}

fn setup_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
