//! Batch command - parse a tree of bulletin files and aggregate the records.
//!
//! Failures are isolated per document: a file that cannot be read or
//! identified contributes zero records and an error marker, and the batch
//! continues.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{debug, warn};

use borme_core::{Aggregator, BormeConfig, BulletinParser, DocumentMeta, ParseOutcome, RawDocument};

use crate::output;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input glob pattern (e.g. "borme_txt/**/BORME-A-*.txt")
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long, default_value = "borme_out")]
    output_dir: PathBuf,

    /// Output format for the aggregated record sets
    #[arg(short, long, value_enum, default_value = "csv")]
    format: BatchFormat,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum BatchFormat {
    /// companies.csv + officers.csv
    Csv,
    /// companies.json + officers.json
    Json,
}

/// Result of parsing a single file.
struct FileResult {
    path: PathBuf,
    outcome: Option<ParseOutcome>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        BormeConfig::from_file(std::path::Path::new(path))?
    } else {
        BormeConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    fs::create_dir_all(&args.output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = BulletinParser::new(config.extraction);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs)
        .build()?;

    let results: Vec<FileResult> = pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let result = parse_single_file(path, &parser);
                pb.inc(1);
                match result {
                    Ok(outcome) => FileResult {
                        path: path.clone(),
                        outcome: Some(outcome),
                        error: None,
                    },
                    Err(e) => {
                        warn!("Failed to process {}: {}", path.display(), e);
                        FileResult {
                            path: path.clone(),
                            outcome: None,
                            error: Some(e.to_string()),
                        }
                    }
                }
            })
            .collect()
    });

    pb.finish_with_message("Complete");

    // Aggregate with cross-document deduplication
    let mut aggregator = Aggregator::new();
    let mut warnings = 0usize;
    let mut failed: Vec<(&PathBuf, &str)> = Vec::new();
    for result in &results {
        match (&result.outcome, &result.error) {
            (Some(outcome), _) => {
                warnings += outcome.warnings.len();
                aggregator.absorb(outcome.companies.clone(), outcome.officers.clone());
            }
            (None, Some(error)) => failed.push((&result.path, error)),
            _ => {}
        }
    }

    let duplicate_companies = aggregator.duplicate_companies();
    let duplicate_officers = aggregator.duplicate_officers();
    let (companies, officers) = aggregator.into_records();

    // Write aggregated outputs
    let (companies_path, officers_path) = match args.format {
        BatchFormat::Csv => {
            let companies_path = args.output_dir.join("companies.csv");
            let officers_path = args.output_dir.join("officers.csv");
            fs::write(&companies_path, output::companies_csv(&companies)?)?;
            fs::write(&officers_path, output::officers_csv(&officers)?)?;
            (companies_path, officers_path)
        }
        BatchFormat::Json => {
            let companies_path = args.output_dir.join("companies.json");
            let officers_path = args.output_dir.join("officers.json");
            fs::write(&companies_path, serde_json::to_string(&companies)?)?;
            fs::write(&officers_path, serde_json::to_string(&officers)?)?;
            (companies_path, officers_path)
        }
    };
    debug!("Wrote {} and {}", companies_path.display(), officers_path.display());

    if !failed.is_empty() {
        let errors_path = args.output_dir.join("errors.csv");
        let mut wtr = csv::Writer::from_path(&errors_path)?;
        wtr.write_record(["file", "error"])?;
        for (path, error) in &failed {
            wtr.write_record([path.display().to_string().as_str(), error])?;
        }
        wtr.flush()?;
    }

    // Print summary
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );
    println!(
        "   {} company records ({} duplicates dropped)",
        companies.len(),
        duplicate_companies
    );
    println!(
        "   {} officer records ({} duplicates dropped)",
        officers.len(),
        duplicate_officers
    );
    if warnings > 0 {
        println!("   {} boundary warnings", style(warnings).yellow());
    }

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for (path, error) in &failed {
            println!("  - {}: {}", path.display(), error);
        }
    }

    Ok(())
}

fn parse_single_file(path: &PathBuf, parser: &BulletinParser) -> anyhow::Result<ParseOutcome> {
    let meta = DocumentMeta::from_path(path)?;
    let text = fs::read_to_string(path)?;
    Ok(parser.parse(&RawDocument::new(meta, text)))
}
