//! Writing extracted records as a spreadsheet, CSV or JSON table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rust_xlsxwriter::{Format, Workbook};
use tracing::{debug, info};

use invext_core::models::config::{ExportConfig, ExportFormat};
use invext_core::{Field, InvoiceRecord};

/// `<prefix>_<YYYYmmdd_HHMMSS>.<ext>`
pub fn output_file_name(prefix: &str, format: ExportFormat, at: DateTime<Local>) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Write all records into a new timestamped file under `dir`.
pub fn export_records(
    records: &[InvoiceRecord],
    dir: &Path,
    config: &ExportConfig,
    format: ExportFormat,
) -> anyhow::Result<PathBuf> {
    let path = dir.join(output_file_name(&config.file_prefix, format, Local::now()));

    match format {
        ExportFormat::Xlsx => write_xlsx(records, &path, &config.sheet_name, config.max_column_width)?,
        ExportFormat::Csv => write_csv(records, File::create(&path)?)?,
        ExportFormat::Json => write_json(records, File::create(&path)?)?,
    }

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(path)
}

/// Character width per column: longest cell or header plus two, capped at `max_width`.
pub fn column_widths(records: &[InvoiceRecord], max_width: usize) -> Vec<f64> {
    Field::ALL
        .iter()
        .map(|field| {
            let longest = records
                .iter()
                .map(|record| record.get(*field).chars().count())
                .chain(std::iter::once(field.column().chars().count()))
                .max()
                .unwrap_or(0);
            (longest + 2).min(max_width) as f64
        })
        .collect()
}

pub fn write_xlsx(
    records: &[InvoiceRecord],
    path: &Path,
    sheet_name: &str,
    max_width: usize,
) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name)?;

        for (col, field) in Field::ALL.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, field.column(), &header)?;
        }

        for (row, record) in records.iter().enumerate() {
            for (col, value) in record.cells().iter().enumerate() {
                worksheet.write_string(row as u32 + 1, col as u16, *value)?;
            }
        }

        for (col, width) in column_widths(records, max_width).into_iter().enumerate() {
            worksheet.set_column_width(col as u16, width)?;
        }
    }

    workbook.save(path)?;
    debug!("Saved workbook {}", path.display());
    Ok(())
}

pub fn write_csv<W: Write>(records: &[InvoiceRecord], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(Field::ALL.iter().map(|field| field.column()))?;
    for record in records {
        wtr.write_record(record.cells())?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(records: &[InvoiceRecord], writer: W) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
