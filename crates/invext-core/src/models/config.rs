//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for the invext pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvextConfig {
    /// Input/output folder layout.
    pub paths: PathsConfig,

    /// Field extraction limits.
    pub extraction: ExtractionConfig,

    /// Spreadsheet export settings.
    pub export: ExportConfig,
}

/// Folder layout for batch runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root folder holding the input and output folders.
    pub base_dir: PathBuf,

    /// Folder scanned for PDF invoices (relative paths resolve against `base_dir`).
    pub input_dir: PathBuf,

    /// Folder receiving the exported table (relative paths resolve against `base_dir`).
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("InvoiceDataExtraction"),
            input_dir: PathBuf::from("Input_Folder"),
            output_dir: PathBuf::from("Output_Folder"),
        }
    }
}

impl PathsConfig {
    /// Resolved input folder.
    pub fn input(&self) -> PathBuf {
        self.base_dir.join(&self.input_dir)
    }

    /// Resolved output folder.
    pub fn output(&self) -> PathBuf {
        self.base_dir.join(&self.output_dir)
    }

    /// Create the input and output folders if they are missing.
    pub fn ensure_dirs(&self) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(self.input())?;
        std::fs::create_dir_all(self.output())
    }
}

/// Limits applied while extracting fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum product name length in characters.
    pub product_name_max_chars: usize,

    /// Maximum billing/shipping address length in characters.
    pub address_max_chars: usize,

    /// Maximum seller name length in characters.
    pub seller_name_max_chars: usize,

    /// Lines after the first item row that may continue a product name.
    pub product_lookahead_lines: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            product_name_max_chars: 200,
            address_max_chars: 150,
            seller_name_max_chars: 100,
            product_lookahead_lines: 4,
        }
    }
}

/// Output table format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Excel workbook with a single sheet.
    #[default]
    Xlsx,
    /// Comma-separated values.
    Csv,
    /// JSON array of records.
    Json,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Spreadsheet export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Worksheet name.
    pub sheet_name: String,

    /// Upper bound for auto-sized column widths.
    pub max_column_width: usize,

    /// Output file name prefix; a timestamp and extension are appended.
    pub file_prefix: String,

    /// Default output format for batch runs.
    pub format: ExportFormat,

    /// Number of leading fields shown in the console sample.
    pub sample_fields: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Invoice_Data".to_string(),
            max_column_width: 50,
            file_prefix: "extracted_invoices".to_string(),
            format: ExportFormat::Xlsx,
            sample_fields: 8,
        }
    }
}

impl InvextConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: InvextConfig =
            serde_json::from_str(r#"{"extraction": {"address_max_chars": 80}}"#).unwrap();

        assert_eq!(config.extraction.address_max_chars, 80);
        assert_eq!(config.extraction.product_name_max_chars, 200);
        assert_eq!(config.export.sheet_name, "Invoice_Data");
        assert_eq!(config.export.format, ExportFormat::Xlsx);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = InvextConfig::default();
        config.export.format = ExportFormat::Csv;
        config.save(&path).unwrap();

        let loaded = InvextConfig::from_file(&path).unwrap();
        assert_eq!(loaded.export.format, ExportFormat::Csv);
    }

    #[test]
    fn test_ensure_dirs_creates_layout() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathsConfig {
            base_dir: dir.path().join("base"),
            ..PathsConfig::default()
        };

        paths.ensure_dirs().unwrap();
        assert!(paths.input().is_dir());
        assert!(paths.output().is_dir());
    }
}
