//! quickadd binary
//!
//! Reads ISBNs or DOIs, one per line, and adds each to the configured
//! Zotero library. With an identifier argument it handles just that one.

use clap::Parser;
use quickadd_core::{Pipeline, QuickaddConfig, Report, ReportLevel};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quickadd", version, about = "Add a book or article to Zotero by ISBN or DOI")]
struct Args {
    /// ISBN or DOI to add; reads lines from stdin when omitted
    identifier: Option<String>,

    /// Config file (defaults to <config dir>/quickadd/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => QuickaddConfig::load(path)?,
        None => QuickaddConfig::load_or_default()?,
    }
    .apply_process_env()?;
    config.validate()?;

    let pipeline = Pipeline::from_config(&config)?;

    if let Some(identifier) = args.identifier {
        return match pipeline.handle_submission(&identifier).await {
            Some(report) if !report.ok => {
                print_report(&report);
                std::process::exit(1);
            }
            Some(report) => {
                print_report(&report);
                Ok(())
            }
            None => Ok(()),
        };
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(report) = pipeline.handle_submission(&line).await {
            print_report(&report);
        }
    }

    Ok(())
}

fn print_report(report: &Report) {
    match report.level {
        ReportLevel::Success => println!("{}", report.message),
        ReportLevel::Warning => println!("warning: {}", report.message),
    }
}
