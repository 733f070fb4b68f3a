//! Validate command - sample parsed output and report extraction statistics.
//!
//! Sampling is a deterministic stride over the sorted file list, so two runs
//! over the same tree always report on the same documents.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use glob::glob;
use tracing::warn;

use borme_core::bulletin::rules;
use borme_core::{ActionType, BormeConfig, BulletinParser, DocumentMeta, RawDocument};

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Input glob pattern (e.g. "borme_txt/**/BORME-A-*.txt")
    #[arg(required = true)]
    input: String,

    /// Sample size; files are picked at a fixed stride over the sorted list
    #[arg(short, long, default_value = "300")]
    sample: usize,

    /// How many of the most frequent roles to list
    #[arg(long, default_value = "20")]
    top_roles: usize,
}

#[derive(Default)]
struct Stats {
    files_ok: usize,
    files_failed: usize,
    entries: usize,
    entries_without_acts: usize,
    officer_records: usize,
    actions: HashMap<ActionType, usize>,
    roles: HashMap<String, usize>,
    body_words: HashMap<String, usize>,
    long_names: Vec<String>,
}

pub async fn run(args: ValidateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = if let Some(path) = config_path {
        BormeConfig::from_file(std::path::Path::new(path))?
    } else {
        BormeConfig::default()
    };

    let mut files: Vec<PathBuf> = glob(&args.input)?.filter_map(|r| r.ok()).collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }
    println!("Total bulletin files: {}", files.len());

    let sample = stride_sample(&files, args.sample);
    println!("Sample: {} files\n", sample.len());

    let parser = BulletinParser::new(config.extraction);
    let mut stats = Stats::default();

    for path in sample {
        match parse_one(path, &parser, &mut stats) {
            Ok(()) => stats.files_ok += 1,
            Err(e) => {
                warn!("{}: {}", path.display(), e);
                stats.files_failed += 1;
            }
        }
    }

    print_report(&stats, args.top_roles);
    Ok(())
}

/// Pick `sample` files at a fixed stride over the sorted list; the whole list
/// when it is small enough.
fn stride_sample(files: &[PathBuf], sample: usize) -> Vec<&PathBuf> {
    if sample == 0 || files.len() <= sample {
        return files.iter().collect();
    }
    let stride = files.len() / sample;
    files.iter().step_by(stride).take(sample).collect()
}

fn parse_one(
    path: &PathBuf,
    parser: &BulletinParser,
    stats: &mut Stats,
) -> anyhow::Result<()> {
    let meta = DocumentMeta::from_path(path)?;
    let text = fs::read_to_string(path)?;

    // Tally the word each body starts at; a skewed distribution points at
    // boundary misfires.
    let cleaned = rules::clean(&text);
    for span in rules::segment(&cleaned) {
        let block = rules::flatten(&cleaned[span.body.clone()]);
        let nb = rules::split_name_body(&block);
        if let Some(word) = nb
            .body
            .trim_start_matches(['.', ' '])
            .split([' ', '.', ':'])
            .next()
            .filter(|w| !w.is_empty())
        {
            *stats.body_words.entry(word.to_string()).or_default() += 1;
        }
    }

    let outcome = parser.parse(&RawDocument::new(meta, text));

    stats.entries += outcome.companies.len();
    for company in &outcome.companies {
        if company.acts.is_empty() {
            stats.entries_without_acts += 1;
        }
        if company.company.chars().count() > 150 {
            let name: String = company.company.chars().take(200).collect();
            stats.long_names.push(name);
        }
    }
    stats.officer_records += outcome.officers.len();
    for officer in &outcome.officers {
        *stats.actions.entry(officer.action).or_default() += 1;
        *stats.roles.entry(officer.role.clone()).or_default() += 1;
    }
    Ok(())
}

fn print_report(stats: &Stats, top_roles: usize) {
    println!("{}", style("=".repeat(60)).dim());
    println!("{}", style("VALIDATION RESULTS").bold());
    println!("{}", style("=".repeat(60)).dim());
    println!("Files parsed: {}", stats.files_ok);
    println!("Files failed: {}", stats.files_failed);
    println!("Entries: {}", stats.entries);
    println!("Entries without detected acts: {}", stats.entries_without_acts);
    println!("Officer records: {}", stats.officer_records);

    println!("\n--- ACTION TYPES ---");
    let mut actions: Vec<_> = stats.actions.iter().collect();
    actions.sort_by(|a, b| b.1.cmp(a.1));
    for (action, n) in actions {
        println!("  {n:>7}x  {action}");
    }

    println!("\n--- ROLES (top {top_roles}) ---");
    let mut roles: Vec<_> = stats.roles.iter().collect();
    roles.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (role, n) in roles.into_iter().take(top_roles) {
        println!("  {n:>7}x  {role}");
    }

    println!("\n--- BODY START WORDS (top 30) ---");
    let mut words: Vec<_> = stats.body_words.iter().collect();
    words.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (word, n) in words.into_iter().take(30) {
        println!("  {n:>7}x  {word}");
    }

    if !stats.long_names.is_empty() {
        println!(
            "\n{} {} suspiciously long company names (first 5):",
            style("⚠").yellow(),
            stats.long_names.len()
        );
        for name in stats.long_names.iter().take(5) {
            println!("  {name}");
        }
    }
}
