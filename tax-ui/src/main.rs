use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, ensure};
use clap::{Parser, Subcommand};
use tax_core::{ProfileIntake, SelectedFile, UploadWidget};
use tax_http::HttpUploader;
use tracing::{debug, info};

use tax_ui::{
    AppConfig, Overrides, logging,
    screens::{Console, run_intake, run_upload, run_workspace},
    views::ConsoleViews,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tax filing assistant: profile intake, workspace tabs and Form 16 upload.
#[derive(Debug, Parser)]
#[command(name = "tax-assistant", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend root URL (e.g. `http://localhost:8000`).
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Log level or filter directive. `RUST_LOG` still wins when set.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Do not log to stderr.
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill in the profile form, then browse the workspace tabs.
    Intake,

    /// Upload a Form 16 image and show the parsed summary.
    Upload {
        /// Image file (png, jpg, jpeg, gif, bmp, webp, tif, tiff).
        file: PathBuf,
    },

    /// Check that the backend is reachable.
    Health,
}

// ─── commands ────────────────────────────────────────────────────────────────

fn intake() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let mut intake = ProfileIntake::new();
    run_intake(&mut console, &mut intake)?;

    if let Some(workspace) = intake.workspace_mut() {
        run_workspace(&mut console, workspace, &ConsoleViews)?;
    }
    Ok(())
}

async fn upload(
    config: &AppConfig,
    file: PathBuf,
) -> anyhow::Result<()> {
    ensure!(file.is_file(), "no such file: '{}'", file.display());
    let file = SelectedFile::image(file)?;

    let uploader = HttpUploader::new(config.endpoint()?)?;
    debug!(url = %uploader.endpoint().upload_url(), "uploader ready");

    let mut widget = UploadWidget::new(uploader);
    let mut stdout = io::stdout();
    run_upload(&mut stdout, &mut widget, file).await?;
    Ok(())
}

async fn health(config: &AppConfig) -> anyhow::Result<()> {
    let uploader = HttpUploader::new(config.endpoint()?)?;
    let message = uploader
        .health()
        .await
        .with_context(|| format!("backend at {} is not reachable", uploader.endpoint().base_url()))?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{message}")?;
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref())?.with_overrides(Overrides {
        backend_url: cli.backend_url,
        log_level: cli.log_level,
        log_file: cli.log_file,
        quiet: cli.quiet,
    });
    logging::init_logging(&config.logging)?;
    info!(backend = %config.upload.backend_url, "tax assistant starting");

    match cli.command {
        Command::Intake => intake(),
        Command::Upload { file } => upload(&config, file).await,
        Command::Health => health(&config).await,
    }
}
