//! Batch processing command for a folder of invoice PDFs.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::{glob_with, MatchOptions, Pattern};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use invext_core::models::config::ExportFormat;
use invext_core::{BatchReport, Field, InvoiceRecord, RuleInvoiceParser};

use crate::export::export_records;

use super::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Folder scanned for PDF invoices (default: from configuration)
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Folder receiving the exported table (default: from configuration)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Export format (default: from configuration)
    #[arg(short, long, value_enum)]
    format: Option<TableFormat>,

    /// Report validation issues for each extracted record
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum TableFormat {
    /// Excel workbook
    Xlsx,
    /// CSV file
    Csv,
    /// JSON array
    Json,
}

impl From<TableFormat> for ExportFormat {
    fn from(format: TableFormat) -> Self {
        match format {
            TableFormat::Xlsx => ExportFormat::Xlsx,
            TableFormat::Csv => ExportFormat::Csv,
            TableFormat::Json => ExportFormat::Json,
        }
    }
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Command-line folders are taken relative to the working directory.
    let mut paths = config.paths.clone();
    if let Some(dir) = &args.input_dir {
        paths.input_dir = std::path::absolute(dir)?;
    }
    if let Some(dir) = &args.output_dir {
        paths.output_dir = std::path::absolute(dir)?;
    }
    paths.ensure_dirs()?;

    let input_dir = paths.input();
    let output_dir = paths.output();
    let format = args.format.map(ExportFormat::from).unwrap_or(config.export.format);

    println!("{}", style("Invoice data extraction").bold());
    println!("   Input folder:  {}", input_dir.display());
    println!("   Output folder: {}", output_dir.display());
    println!();

    let files = discover_pdfs(&input_dir)?;
    if files.is_empty() {
        println!(
            "{} No PDF files found in input folder: {}",
            style("⚠").yellow(),
            input_dir.display()
        );
        println!("   Place your Amazon or Flipkart invoice PDFs there and run again.");
        return Ok(());
    }

    println!(
        "{} Found {} PDF files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let parser = RuleInvoiceParser::with_config(config.extraction.clone());
    let mut report = BatchReport::new();

    for path in &files {
        let file_name = display_name(path);
        pb.set_message(file_name.clone());

        let outcome = parser.parse_file(path);
        match &outcome {
            Ok(result) => {
                pb.suspend(|| {
                    println!(
                        "  {} {} ({}, {} fields)",
                        style("✓").green(),
                        file_name,
                        result.vendor.source_label(),
                        result.matched_fields.len()
                    )
                });
                if args.validate {
                    for issue in result.record.validate() {
                        warn!("{}: {}", file_name, issue);
                        pb.suspend(|| println!("      {} {}", style("!").yellow(), issue));
                    }
                }
            }
            Err(e) => {
                pb.suspend(|| println!("  {} {}: {}", style("✗").red(), file_name, e));
            }
        }

        report.push(&file_name, outcome);
        pb.inc(1);
    }

    pb.finish_and_clear();

    println!();
    println!(
        "{} Processed {} of {} files in {:.2?}",
        style("✓").green(),
        report.processed(),
        report.total(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(report.processed()).green(),
        style(report.failed().len()).red()
    );

    if !report.failed().is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for failed in report.failed() {
            println!("  - {}", failed.file_name);
        }
    }

    if report.records().is_empty() {
        println!();
        println!(
            "{} No invoices were successfully processed",
            style("⚠").yellow()
        );
        return Ok(());
    }

    let output_path = export_records(report.records(), &output_dir, &config.export, format)?;
    info!("Batch finished: {} records", report.records().len());

    println!();
    println!(
        "{} Output file: {}",
        style("✓").green(),
        display_name(&output_path)
    );
    println!("   Total records: {}", report.records().len());

    print_sample(&report.records()[0], config.export.sample_fields);

    Ok(())
}

/// PDF files directly inside `dir`, extension matched case-insensitively,
/// in name order.
pub fn discover_pdfs(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.pdf", Pattern::escape(&dir.to_string_lossy()));
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::default()
    };

    let files = glob_with(&pattern, options)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_sample(record: &InvoiceRecord, fields: usize) {
    println!();
    println!("{}", style("Sample extracted data (first record):").bold());
    for line in sample_lines(record, fields) {
        println!("   {}", line);
    }
}

fn sample_lines(record: &InvoiceRecord, fields: usize) -> Vec<String> {
    let mut lines: Vec<String> = record
        .columns()
        .take(fields)
        .map(|(column, value)| format!("{}: {}", column, value))
        .collect();
    if fields < Field::COUNT {
        lines.push("... (and more fields)".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_matches_extension_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.PDF", "a.pdf", "notes.txt", "c.Pdf"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let names: Vec<String> = discover_pdfs(dir.path())
            .unwrap()
            .iter()
            .map(|p| display_name(p))
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.PDF", "c.Pdf"]);
    }

    #[test]
    fn test_sample_mentions_hidden_fields_only_when_truncated() {
        let record = InvoiceRecord::new("a.pdf", "Amazon");

        let short = sample_lines(&record, 2);
        assert_eq!(short, vec!["File Name: a.pdf", "Invoice Source: Amazon", "... (and more fields)"]);

        let full = sample_lines(&record, Field::COUNT);
        assert_eq!(full.len(), Field::COUNT);
        assert!(!full.iter().any(|line| line.contains("more fields")));
    }
}
