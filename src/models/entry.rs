use super::entry_kind::EntryKind;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single odometer capture (opening or closing a shift).
///
/// Created once per capture; afterwards only `odometer` may change,
/// through an explicit edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,             // ⇔ entries.id (TEXT, epoch ms at capture)
    pub date: String,           // ⇔ entries.date (TEXT, RFC3339 with local offset)
    pub timestamp: i64,         // ⇔ entries.timestamp (INTEGER, epoch ms)
    pub kind: EntryKind,        // ⇔ entries.kind ('START' | 'END')
    pub odometer: u32,          // ⇔ entries.odometer (INTEGER >= 0)
    pub photo: Option<String>,  // ⇔ entries.photo (TEXT NULL)
    pub location: String,       // ⇔ entries.location (TEXT)
}

impl LogEntry {
    /// Build an entry captured at `at`.
    /// `date` and `timestamp` are both derived from the same instant.
    pub fn new<Tz: TimeZone>(
        id: impl Into<String>,
        at: &DateTime<Tz>,
        kind: EntryKind,
        odometer: u32,
        photo: Option<String>,
        location: impl Into<String>,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: id.into(),
            date: at.to_rfc3339(),
            timestamp: at.timestamp_millis(),
            kind,
            odometer,
            photo,
            location: location.into(),
        }
    }

    /// Same entry, different odometer reading. Everything else is preserved.
    pub fn with_odometer(&self, odometer: u32) -> Self {
        Self {
            odometer,
            ..self.clone()
        }
    }

    /// The capture instant in an arbitrary timezone.
    pub fn instant_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
            .unwrap_or_default()
            .with_timezone(tz)
    }

    /// The capture instant in the local timezone.
    pub fn local_time(&self) -> DateTime<Local> {
        self.instant_in(&Local)
    }

    /// "dd/mm/YYYY" (local)
    pub fn date_str(&self) -> String {
        self.local_time().format("%d/%m/%Y").to_string()
    }

    /// "HH:MM" (local)
    pub fn time_str(&self) -> String {
        self.local_time().format("%H:%M").to_string()
    }

    /// First line of the location text (the second one usually carries the capture time).
    pub fn location_headline(&self) -> &str {
        self.location.lines().next().unwrap_or("")
    }
}
