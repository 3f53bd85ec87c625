use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Parse a local "YYYY-MM-DD HH:MM" (or with a 'T') into a local instant.
pub fn parse_local_datetime(s: &str) -> AppResult<DateTime<Local>> {
    let t = s.trim();
    let naive = NaiveDateTime::parse_from_str(t, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M"))
        .map_err(|_| AppError::InvalidDate(format!("'{t}' (expected YYYY-MM-DD HH:MM)")))?;

    // earliest() resolves DST-ambiguous times; None only inside a DST gap
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(format!("'{t}' does not exist in the local timezone")))
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
