//! webstatus: reconcile feature files against local status tracker datasets.
//!
//! Usage: webstatus [OPTIONS] <PATHS>...
//!
//! Prints one JSON object keyed by feature id. Issues go to stderr. Exits
//! with 0 when no issue was recorded, 1 otherwise, and 2 when the run could
//! not start.

mod files;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use webstatus_core::config::{CliOverrides, WebstatusConfig};
use webstatus_reconcile::{AuthorityTable, Batch};
use webstatus_sources::Datasets;

/// Exit code for configuration and dataset errors.
const EXIT_SETUP_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "webstatus")]
#[command(version)]
#[command(about = "Reconcile web platform implementation status across trackers")]
struct Cli {
    /// Feature files, or directories of `*.json` feature files
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Config file (default: webstatus.toml in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// caniuse `data.json`
    #[arg(long)]
    caniuse: Option<PathBuf>,

    /// chromestatus `features.json`
    #[arg(long)]
    chromestatus: Option<PathBuf>,

    /// Edge platform status `status.json`
    #[arg(long)]
    edgestatus: Option<PathBuf>,

    /// WebKit `features.json`
    #[arg(long)]
    webkitstatus: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            caniuse: self.caniuse.clone(),
            chromestatus: self.chromestatus.clone(),
            edgestatus: self.edgestatus.clone(),
            webkitstatus: self.webkitstatus.clone(),
        }
    }
}

fn main() -> ExitCode {
    webstatus_core::tracing::init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("webstatus: {e:#}");
            ExitCode::from(EXIT_SETUP_FAILURE)
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    let root = std::env::current_dir().context("cannot determine working directory")?;
    let config = WebstatusConfig::load(&root, cli.config.as_deref(), Some(&cli.overrides()))
        .context("invalid configuration")?;
    let authority = AuthorityTable::from_config(&config.authority);
    let datasets = Datasets::load(&config.datasets).context("cannot load datasets")?;
    let feature_files = files::collect(&cli.paths)?;
    tracing::info!(files = feature_files.len(), "starting batch");

    let mut batch = Batch::new(&datasets, &authority);
    for path in &feature_files {
        let id = files::feature_id(path);
        let file = path.display().to_string();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                batch.run_feature(&id, &file, &text);
            }
            Err(e) => batch.record_unreadable(&id, &file, &e.to_string()),
        }
    }
    let report = batch.finish();

    let json = serde_json::to_string_pretty(&report).context("cannot serialize report")?;
    match &cli.output {
        Some(path) => std::fs::write(path, format!("{json}\n"))
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => println!("{json}"),
    }

    for entry in report.issues.iter() {
        eprintln!("{entry}");
    }
    Ok(report.exit_code())
}
