//! Process command - extract data from a single invoice file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use invext_core::{ExtractionResult, RuleInvoiceParser};

use crate::export::write_csv;

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF, or an already extracted .txt dump)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show matched and unmatched fields
    #[arg(long)]
    show_fields: bool,

    /// Validate extracted data
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let parser = RuleInvoiceParser::with_config(config.extraction);
    let result = parser.parse_file(&args.input)?;

    if args.validate {
        let issues = result.record.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    if args.show_fields {
        eprintln!();
        eprintln!(
            "{} Vendor: {}",
            style("ℹ").blue(),
            result.vendor.source_label()
        );
        eprintln!(
            "{} Matched {} fields, {} left at default",
            style("ℹ").blue(),
            result.matched_fields.len(),
            result.unmatched_fields.len()
        );
        for field in &result.unmatched_fields {
            eprintln!("   - {}", field.column());
        }
        eprintln!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            result.processing_time_ms
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)? + "\n"),
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(std::slice::from_ref(&result.record), &mut buf)?;
            Ok(String::from_utf8(buf)?)
        }
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_text(result: &ExtractionResult) -> String {
    let width = result
        .record
        .columns()
        .map(|(column, _)| column.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (column, value) in result.record.columns() {
        output.push_str(&format!("{:<width$}  {}\n", column, value, width = width));
    }
    output
}
