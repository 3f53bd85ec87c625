// src/export/model.rs

use crate::models::entry::LogEntry;
use crate::models::profile::UserProfile;
use crate::models::shift::ShiftPair;
use chrono::{Local, TimeZone};
use serde::Serialize;

/// Placeholder for a missing start/end side.
pub const MISSING: &str = "-";

/// Flat report row: one per shift, in report order (newest first).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShiftRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Start time")]
    pub start_time: String,
    #[serde(rename = "Start km")]
    pub start_km: String,
    #[serde(rename = "End time")]
    pub end_time: String,
    #[serde(rename = "End km")]
    pub end_km: String,
    #[serde(rename = "Total km")]
    pub total_km: i64,
}

/// Header per CSV / tabella
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Name",
        "Company",
        "Date",
        "Start time",
        "Start km",
        "End time",
        "End km",
        "Total km",
    ]
}

fn side_time<Tz: TimeZone>(e: Option<&LogEntry>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    e.map(|e| e.instant_in(tz).format("%H:%M").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

fn side_km(e: Option<&LogEntry>) -> String {
    e.map(|e| e.odometer.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn project_row_in<Tz: TimeZone>(pair: &ShiftPair, profile: &UserProfile, tz: &Tz) -> ShiftRow
where
    Tz::Offset: std::fmt::Display,
{
    ShiftRow {
        name: profile.name.clone(),
        company: profile.company.clone(),
        date: pair.representative_in(tz).format("%d/%m/%Y").to_string(),
        start_time: side_time(pair.start.as_ref(), tz),
        start_km: side_km(pair.start.as_ref()),
        end_time: side_time(pair.end.as_ref(), tz),
        end_km: side_km(pair.end.as_ref()),
        total_km: pair.distance().unwrap_or(0),
    }
}

/// Pure projection, same order as `pairs`.
pub fn project_rows(pairs: &[ShiftPair], profile: &UserProfile) -> Vec<ShiftRow> {
    project_rows_in(pairs, profile, &Local)
}

pub fn project_rows_in<Tz: TimeZone>(
    pairs: &[ShiftPair],
    profile: &UserProfile,
    tz: &Tz,
) -> Vec<ShiftRow>
where
    Tz::Offset: std::fmt::Display,
{
    pairs
        .iter()
        .map(|p| project_row_in(p, profile, tz))
        .collect()
}

/// Riga come celle di testo, nello stesso ordine di `get_headers`.
#[cfg(test)]
pub(crate) fn row_to_cells(r: &ShiftRow) -> Vec<String> {
    vec![
        r.name.clone(),
        r.company.clone(),
        r.date.clone(),
        r.start_time.clone(),
        r.start_km.clone(),
        r.end_time.clone(),
        r.end_km.clone(),
        r.total_km.to_string(),
    ]
}
