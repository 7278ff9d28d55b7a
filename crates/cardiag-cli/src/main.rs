//! cardiag - vehicle record diagnostics CLI
//!
//! Loads each named record from the records directory, runs the diagnostic
//! pipeline on it and prints the findings to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use cardiag_core::{
    diagnose_batch, report_path, write_report_json, BatchSummary, DiagnosisReport,
    DiagnosticPipeline, DirLoader, LineReporter,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

const DEFAULT_RECORDS: [&str; 3] = ["AllGoodCar.json", "MissingPartsCar.json", "SampleCar.json"];

#[derive(Parser, Debug)]
#[command(name = "cardiag")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Diagnose vehicle records for missing fields, missing parts and damaged parts", long_about = None)]
struct Cli {
    /// Record names to diagnose, relative to the records directory
    #[arg(default_values = DEFAULT_RECORDS)]
    records: Vec<String>,

    /// Directory containing record files
    #[arg(long, env = "CARDIAG_RECORDS_DIR", default_value = "records")]
    records_dir: PathBuf,

    /// Write a JSON diagnosis report per record into this directory
    #[arg(long, env = "CARDIAG_REPORT_DIR")]
    report_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    cardiag_core::init_tracing(cli.json, level);

    let loader = DirLoader::new(&cli.records_dir);
    let pipeline = DiagnosticPipeline::new();
    let mut reporter = LineReporter::stdout();

    let summary = diagnose_batch(&loader, &pipeline, &cli.records, &mut reporter)
        .context("diagnostic run aborted")?;

    if let Some(dir) = cli.report_dir.as_deref() {
        write_reports(dir, &summary)?;
    }

    Ok(())
}

fn write_reports(dir: &Path, summary: &BatchSummary) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create report dir {:?}", dir))?;
    for diagnosis in &summary.diagnosed {
        let report = DiagnosisReport::from_diagnosis(diagnosis);
        let path = report_path(dir, &diagnosis.name);
        write_report_json(&path, &report)?;
        info!(record = %diagnosis.name, path = %path.display(), "wrote diagnosis report");
    }
    Ok(())
}
