// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::ShiftRow;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Spreadsheets need the BOM to pick UTF-8 for accented names.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write rows as delimited text (BOM + header row + one line per shift).
pub fn write_csv<W: Write>(rows: &[ShiftRow], mut out: W, delimiter: u8) -> AppResult<()> {
    out.write_all(UTF8_BOM)?;

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    if rows.is_empty() {
        wtr.write_record(crate::export::model::get_headers())?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export CSV (header incluso grazie a serde).
pub(crate) fn export_csv(rows: &[ShiftRow], path: &Path, delimiter: u8) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(rows, BufWriter::new(file), delimiter)?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[ShiftRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
