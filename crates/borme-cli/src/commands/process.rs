//! Process command - parse a single bulletin text file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use borme_core::{BormeConfig, BulletinParser, DocumentMeta, ParseOutcome, RawDocument};

use crate::output;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input bulletin text file (BORME-A-YYYY-NNN-PP.txt)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip officer/role records, emit company acts only
    #[arg(long)]
    no_officers: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (companies followed by officers)
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let mut config = if let Some(path) = config_path {
        BormeConfig::from_file(std::path::Path::new(path))?
    } else {
        BormeConfig::default()
    };
    if args.no_officers {
        config.extraction.extract_officers = false;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let meta = DocumentMeta::from_path(&args.input)?;
    let text = fs::read_to_string(&args.input)?;
    let doc = RawDocument::new(meta, text);

    let outcome = BulletinParser::new(config.extraction).parse(&doc);

    for warning in &outcome.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    let rendered = format_outcome(&outcome, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &rendered)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", rendered);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_outcome(outcome: &ParseOutcome, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "meta": &outcome.meta,
                "companies": &outcome.companies,
                "officers": &outcome.officers,
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Csv => {
            let mut rendered = output::companies_csv(&outcome.companies)?;
            if !outcome.officers.is_empty() {
                rendered.push('\n');
                rendered.push_str(&output::officers_csv(&outcome.officers)?);
            }
            Ok(rendered)
        }
        OutputFormat::Text => Ok(format_text(outcome)),
    }
}

fn format_text(outcome: &ParseOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({} {}), issue {}\n",
        outcome.meta.filename, outcome.meta.province, outcome.meta.province_code, outcome.meta.issue
    ));
    out.push_str(&format!(
        "{} entries, {} officer records\n\n",
        outcome.companies.len(),
        outcome.officers.len()
    ));

    for company in &outcome.companies {
        out.push_str(&format!(
            "{}  {}  [{}]\n",
            company.entry_number,
            company.company,
            company.acts.join("|")
        ));
    }
    for officer in &outcome.officers {
        out.push_str(&format!(
            "  {}  {}  {}: {}\n",
            officer.entry_number, officer.action, officer.role, officer.person
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use borme_core::ExtractionConfig;
    use std::path::Path;

    fn outcome() -> ParseOutcome {
        let meta =
            DocumentMeta::from_path(Path::new("2019/03/07/BORME-A-2019-46-28.txt")).unwrap();
        let doc = RawDocument::new(
            meta,
            "112233 - EJEMPLO UNO SL.\nNombramientos. Adm. Unico: GARCIA LOPEZ JUAN. \
             Datos registrales. T 1, L 0, F 3, S 8, H M 1, I/A 4 (6.02.19).\n",
        );
        BulletinParser::new(ExtractionConfig::default()).parse(&doc)
    }

    #[test]
    fn test_format_text_lists_entries_and_officers() {
        let text = format_text(&outcome());
        assert!(text.contains("112233  EJEMPLO UNO SL  [Nombramientos]"));
        assert!(text.contains("appointment  Adm. Unico: GARCIA LOPEZ JUAN"));
    }

    #[test]
    fn test_format_json_has_sections() {
        let json = format_outcome(&outcome(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["meta"]["filename"].is_string());
        assert_eq!(value["companies"].as_array().unwrap().len(), 1);
        assert_eq!(value["officers"].as_array().unwrap().len(), 1);
    }
}
