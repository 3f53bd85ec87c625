use crate::core::calculator::filter::{self, PeriodFilter};
use crate::core::calculator::{pairing, totals};
use crate::models::entry::LogEntry;
use crate::models::report::ShiftReport;
use chrono::TimeZone;

pub struct Core;

impl Core {
    /// Full read path: pair the whole log, keep one period, total it.
    /// Always recomputed from the entries; nothing derived is cached.
    pub fn build_report(entries: &[LogEntry], period: Option<PeriodFilter>) -> ShiftReport {
        Self::build_report_in(entries, period, &chrono::Local)
    }

    pub fn build_report_in<Tz: TimeZone>(
        entries: &[LogEntry],
        period: Option<PeriodFilter>,
        tz: &Tz,
    ) -> ShiftReport {
        let all = pairing::build_shifts(entries);
        let shifts = filter::filter_shifts_in(&all, period.as_ref(), tz);
        let totals = totals::summarize(&shifts);

        ShiftReport {
            filter: period,
            shifts,
            totals,
        }
    }
}
