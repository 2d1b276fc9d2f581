//! Command-line tests for the `invext` binary.
//!
//! Every test points `--config` at a file inside its own temporary folder so
//! the user's configuration is never read or written.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const AMAZON_TEXT: &str = "\
amazon.in Tax Invoice
Sold By : Cloudtail India Private Limited *ASSPL
Order Number: 402-1234567-1234567
Order Date: 28.01.2023
Invoice Date : 01.02.2023
1 USB Cable ₹199.00 1 ₹199.00 5% IGST ₹9.95 ₹208.95
TOTAL: ₹208.95
";

fn invext() -> Command {
    Command::cargo_bin("invext").unwrap()
}

/// Write a config whose base folder lives under `dir`.
fn write_config(dir: &Path) -> PathBuf {
    let config_path = dir.join("config.json");
    let config = serde_json::json!({
        "paths": { "base_dir": dir.join("work") }
    });
    fs::write(&config_path, config.to_string()).unwrap();
    config_path
}

#[test]
fn config_path_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    invext()
        .args(["--config", config_path.to_str().unwrap(), "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file:"))
        .stdout(predicate::str::contains("not created"));
}

#[test]
fn config_init_get_and_set() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("config.json");
    let config_arg = config_path.to_str().unwrap();

    invext()
        .args(["--config", config_arg, "config", "init"])
        .assert()
        .success();
    assert!(config_path.exists());

    invext()
        .args(["--config", config_arg, "config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    invext()
        .args(["--config", config_arg, "config", "get", "export.sheet_name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Invoice_Data\""));

    invext()
        .args(["--config", config_arg, "config", "set", "extraction.address_max_chars", "80"])
        .assert()
        .success();

    invext()
        .args(["--config", config_arg, "config", "get", "extraction.address_max_chars"])
        .assert()
        .success()
        .stdout(predicate::str::diff("80\n"));

    invext()
        .args(["--config", config_arg, "config", "set", "extraction.no_such_key", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn batch_with_no_pdfs_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path());

    invext()
        .args(["--config", config_path.to_str().unwrap(), "batch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No PDF files found in input folder"));

    // Folders are created on first run
    assert!(dir.path().join("work").join("Input_Folder").is_dir());
    assert!(dir.path().join("work").join("Output_Folder").is_dir());
}

#[test]
fn batch_lists_unreadable_pdfs_as_failed() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path());
    let input = dir.path().join("in");
    let output = dir.path().join("out");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("broken.pdf"), b"not really a pdf").unwrap();

    invext()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "batch",
            "--input-dir",
            input.to_str().unwrap(),
            "--output-dir",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed files:"))
        .stdout(predicate::str::contains("broken.pdf"))
        .stdout(predicate::str::contains("No invoices were successfully processed"))
        .stderr(predicate::str::contains("Skipping").not());

    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

#[test]
fn process_text_dump_as_json() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path());
    let input = dir.path().join("invoice.txt");
    fs::write(&input, AMAZON_TEXT).unwrap();

    let assert = invext()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "process",
            input.to_str().unwrap(),
        ])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["vendor"], "amazon");
    assert_eq!(value["record"]["Order Number"], "402-1234567-1234567");
    assert_eq!(value["record"]["Invoice Date"], "01/02/2023");
    assert_eq!(value["record"]["Seller Name"], "Cloudtail India Private Limited");
    assert_eq!(value["record"]["Grand Total"], "208.95");
}

#[test]
fn process_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path());
    let input = dir.path().join("invoice.txt");
    let output = dir.path().join("invoice.csv");
    fs::write(&input, AMAZON_TEXT).unwrap();

    invext()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "process",
            input.to_str().unwrap(),
            "--format",
            "csv",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("File Name,Invoice Source,Order Number"));
    assert!(csv.contains("invoice.txt,Amazon,402-1234567-1234567"));
}

#[test]
fn process_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path());

    invext()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "process",
            dir.path().join("missing.pdf").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}
