//! patchbook CLI Application

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};

use patchbook_core::domain::ReportConfig;
use patchbook_infra::report::XlsxReport;
use patchbook_infra::store::SessionStore;

#[derive(Parser)]
#[command(name = "patchbook")]
#[command(about = "Generate a routing report from a mixing console session file", long_about = None)]
struct Cli {
    /// Console session file (.emo)
    session_file: PathBuf,

    /// Report file path; defaults to <session>-<timestamp>.xlsx next to the
    /// session file
    #[arg(short = 'f', long)]
    report_file: Option<PathBuf>,

    /// Report configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn default_report_path(session: &Path) -> PathBuf {
    let stem = session
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "session".to_string());
    let timestamp = chrono::Local::now().format("%Y%m%dT%H%M%S");
    session.with_file_name(format!("{}-{}.xlsx", stem, timestamp))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let config = match &cli.config {
        Some(path) => ReportConfig::load(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    let report_path = cli
        .report_file
        .clone()
        .unwrap_or_else(|| default_report_path(&cli.session_file));

    tracing::info!("Reading session {}", cli.session_file.display());
    let store = SessionStore::open(&cli.session_file)
        .await
        .context("Failed to open session file")?;
    let mut patches = store
        .load_session()
        .await
        .context("Failed to load session")?;

    tracing::info!("Writing report to {}", report_path.display());
    XlsxReport::new(&config)
        .write(&mut patches, &report_path)
        .context("Failed to write report")?;

    Ok(())
}
