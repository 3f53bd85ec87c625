// src/export/logic.rs

use crate::core::calculator::filter::PeriodFilter;
use crate::core::logic::Core;
use crate::db::store::LogStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_absolute, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::mail::{build_mail, export_mail};
use crate::export::model::project_rows;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the shifts of `period` (`None` = everything).
    ///
    /// - `format`: csv | json | mail
    /// - `file`: absolute path of the output file
    ///
    /// Returns the number of exported shifts (0 → nothing written).
    pub fn export(
        store: &dyn LogStore,
        format: ExportFormat,
        file: &str,
        period: Option<PeriodFilter>,
        csv_delimiter: u8,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_absolute(path)?;

        let profile = store.read_profile()?.ok_or(AppError::ProfileMissing)?;
        let entries = store.read_all_entries()?;
        let report = Core::build_report(&entries, period);

        if report.shifts.is_empty() {
            warning(format!(
                "No shifts found for the selected period ({}).",
                report.period_label()
            ));
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => {
                export_csv(&project_rows(&report.shifts, &profile), path, csv_delimiter)?
            }
            ExportFormat::Json => export_json(&project_rows(&report.shifts, &profile), path)?,
            ExportFormat::Mail => {
                let draft = build_mail(&report.shifts, &profile, &report.period_label());
                export_mail(&draft, path)?
            }
        }

        Ok(report.shifts.len())
    }
}
