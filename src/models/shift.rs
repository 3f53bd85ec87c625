use super::entry::LogEntry;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;

/// How a derived shift came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShiftStatus {
    /// START followed by END.
    Closed,
    /// Trailing START still waiting for its END (shift in progress).
    Open,
    /// START superseded by another START before any END.
    Incomplete,
    /// END with no pending START before it.
    Orphan,
}

impl ShiftStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ShiftStatus::Closed => "closed",
            ShiftStatus::Open => "open",
            ShiftStatus::Incomplete => "incomplete",
            ShiftStatus::Orphan => "orphan",
        }
    }
}

/// A start/end couple rebuilt from the log. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftPair {
    pub id: String,
    pub start: Option<LogEntry>,
    pub end: Option<LogEntry>,
    pub date: String,   // representative ISO date: start's, else end's
    pub timestamp: i64, // representative epoch ms
    pub status: ShiftStatus,
}

impl ShiftPair {
    pub fn closed(start: LogEntry, end: LogEntry) -> Self {
        Self {
            id: format!("pair_{}_{}", start.id, end.id),
            date: start.date.clone(),
            timestamp: start.timestamp,
            start: Some(start),
            end: Some(end),
            status: ShiftStatus::Closed,
        }
    }

    pub fn open(start: LogEntry) -> Self {
        Self::start_only(format!("open_{}", start.id), start, ShiftStatus::Open)
    }

    pub fn incomplete(start: LogEntry) -> Self {
        Self::start_only(format!("inc_{}", start.id), start, ShiftStatus::Incomplete)
    }

    pub fn orphan(end: LogEntry) -> Self {
        Self {
            id: format!("orphan_{}", end.id),
            date: end.date.clone(),
            timestamp: end.timestamp,
            start: None,
            end: Some(end),
            status: ShiftStatus::Orphan,
        }
    }

    fn start_only(id: String, start: LogEntry, status: ShiftStatus) -> Self {
        Self {
            id,
            date: start.date.clone(),
            timestamp: start.timestamp,
            start: Some(start),
            end: None,
            status,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// `end - start` for closed shifts. Not clamped: edited readings may make it negative.
    pub fn distance(&self) -> Option<i64> {
        match (&self.start, &self.end) {
            (Some(s), Some(e)) => Some(i64::from(e.odometer) - i64::from(s.odometer)),
            _ => None,
        }
    }

    pub fn representative_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
            .unwrap_or_default()
            .with_timezone(tz)
    }

    pub fn representative_local(&self) -> DateTime<Local> {
        self.representative_in(&Local)
    }
}
