use crate::errors::{AppError, AppResult};
use crate::models::shift::ShiftPair;
use chrono::{Datelike, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Filter granularity for the history/report views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    #[default]
    Month,
}

/// Calendar key a shift's representative (local) date must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodFilter {
    Day(NaiveDate),
    Month { year: i32, month: u32 },
}

impl PeriodFilter {
    /// Parse `YYYY-MM-DD` (day) or `YYYY-MM` (month).
    pub fn parse(granularity: Granularity, text: &str) -> AppResult<Self> {
        let t = text.trim();
        match granularity {
            Granularity::Day => NaiveDate::parse_from_str(t, "%Y-%m-%d")
                .map(PeriodFilter::Day)
                .map_err(|_| AppError::InvalidFilter(format!("'{t}' is not a YYYY-MM-DD day"))),
            Granularity::Month => {
                // "2024-06" → 2024-06-01
                let first = NaiveDate::parse_from_str(&format!("{t}-01"), "%Y-%m-%d")
                    .ok()
                    .filter(|_| t.len() == 7)
                    .ok_or_else(|| {
                        AppError::InvalidFilter(format!("'{t}' is not a YYYY-MM month"))
                    })?;
                Ok(PeriodFilter::Month {
                    year: first.year(),
                    month: first.month(),
                })
            }
        }
    }

    /// The period containing today, at the requested granularity.
    pub fn current(granularity: Granularity) -> Self {
        Self::containing(granularity, Local::now().date_naive())
    }

    pub fn containing(granularity: Granularity, day: NaiveDate) -> Self {
        match granularity {
            Granularity::Day => PeriodFilter::Day(day),
            Granularity::Month => PeriodFilter::Month {
                year: day.year(),
                month: day.month(),
            },
        }
    }

    pub fn matches(&self, day: NaiveDate) -> bool {
        match *self {
            PeriodFilter::Day(d) => d == day,
            PeriodFilter::Month { year, month } => day.year() == year && day.month() == month,
        }
    }

    /// Key as typed by the user: "2024-06" or "2024-06-03".
    pub fn key(&self) -> String {
        match self {
            PeriodFilter::Day(d) => d.format("%Y-%m-%d").to_string(),
            PeriodFilter::Month { year, month } => format!("{year:04}-{month:02}"),
        }
    }
}

/// Keep the shifts whose representative local date falls in `filter`.
/// `None` keeps everything. Order is preserved.
pub fn filter_shifts(pairs: &[ShiftPair], filter: Option<&PeriodFilter>) -> Vec<ShiftPair> {
    filter_shifts_in(pairs, filter, &Local)
}

/// Same as [`filter_shifts`], with an explicit timezone.
pub fn filter_shifts_in<Tz: TimeZone>(
    pairs: &[ShiftPair],
    filter: Option<&PeriodFilter>,
    tz: &Tz,
) -> Vec<ShiftPair> {
    match filter {
        None => pairs.to_vec(),
        Some(f) => pairs
            .iter()
            .filter(|p| f.matches(p.representative_in(tz).date_naive()))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::pairing::build_shifts;
    use crate::models::entry::LogEntry;
    use crate::models::entry_kind::EntryKind;
    use chrono::{FixedOffset, Utc};

    fn brt() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    #[test]
    fn parse_month_and_day() {
        assert_eq!(
            PeriodFilter::parse(Granularity::Month, "2024-06").unwrap(),
            PeriodFilter::Month {
                year: 2024,
                month: 6
            }
        );
        assert_eq!(
            PeriodFilter::parse(Granularity::Day, "2024-06-03").unwrap(),
            PeriodFilter::Day(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
        );
        assert!(PeriodFilter::parse(Granularity::Month, "2024-13").is_err());
        assert!(PeriodFilter::parse(Granularity::Month, "2024-06-03").is_err());
        assert!(PeriodFilter::parse(Granularity::Day, "06/03/2024").is_err());
    }

    #[test]
    fn key_round_trips_user_input() {
        assert_eq!(
            PeriodFilter::parse(Granularity::Month, "2024-06").unwrap().key(),
            "2024-06"
        );
        assert_eq!(
            PeriodFilter::parse(Granularity::Day, "2024-06-03").unwrap().key(),
            "2024-06-03"
        );
    }

    #[test]
    fn no_filter_keeps_everything() {
        let at = Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap();
        let pairs = build_shifts(&[LogEntry::new("1", &at, EntryKind::Start, 1, None, "")]);
        assert_eq!(filter_shifts(&pairs, None), pairs);
    }

    #[test]
    fn local_calendar_decides_the_day() {
        // 01:30 UTC on July 1st is still June 30th in UTC-3
        let at = Utc.with_ymd_and_hms(2024, 7, 1, 1, 30, 0).unwrap();
        let pairs = build_shifts(&[LogEntry::new("1", &at, EntryKind::Start, 1, None, "")]);

        let june = PeriodFilter::parse(Granularity::Month, "2024-06").unwrap();
        let july = PeriodFilter::parse(Granularity::Month, "2024-07").unwrap();

        assert_eq!(filter_shifts_in(&pairs, Some(&june), &brt()).len(), 1);
        assert_eq!(filter_shifts_in(&pairs, Some(&july), &brt()).len(), 0);
        assert_eq!(filter_shifts_in(&pairs, Some(&july), &Utc).len(), 1);
    }

    #[test]
    fn closed_shift_is_filed_under_its_start_day() {
        let tz = brt();
        let start = tz.with_ymd_and_hms(2024, 6, 3, 22, 0, 0).unwrap();
        let end = tz.with_ymd_and_hms(2024, 6, 4, 2, 0, 0).unwrap();
        let pairs = build_shifts(&[
            LogEntry::new("1", &start, EntryKind::Start, 100, None, ""),
            LogEntry::new("2", &end, EntryKind::End, 140, None, ""),
        ]);

        let day3 = PeriodFilter::parse(Granularity::Day, "2024-06-03").unwrap();
        let day4 = PeriodFilter::parse(Granularity::Day, "2024-06-04").unwrap();

        assert_eq!(filter_shifts_in(&pairs, Some(&day3), &tz).len(), 1);
        assert!(filter_shifts_in(&pairs, Some(&day4), &tz).is_empty());
    }
}
