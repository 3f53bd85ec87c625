//! Capture collaborator: turns one user action (photo + reading + place)
//! into one new log entry.

pub mod location;
pub mod ocr;

use crate::core::edit::parse_odometer;
use crate::core::status::dashboard_status;
use crate::db::store::{LogStore, audit_or_warn};
use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::models::entry_kind::EntryKind;
use chrono::{DateTime, Local};
use location::{Position, describe_location};
use ocr::OdometerReader;
use std::io;
use std::path::PathBuf;

/// Everything the user supplied for one capture.
#[derive(Debug, Clone, Default)]
pub struct CaptureRequest {
    /// Odometer as typed (validated here); wins over OCR.
    pub km: Option<String>,
    pub photo: Option<PathBuf>,
    pub address: Option<String>,
    pub position: Option<Position>,
    /// Backdated capture time; defaults to `now`.
    pub at: Option<DateTime<Local>>,
    /// Skip the dashboard guards (double start, end without start).
    pub force: bool,
}

pub struct CaptureLogic;

impl CaptureLogic {
    pub fn capture(
        store: &mut dyn LogStore,
        kind: EntryKind,
        req: &CaptureRequest,
        reader: Option<&dyn OdometerReader>,
        now: DateTime<Local>,
    ) -> AppResult<LogEntry> {
        if store.read_profile()?.is_none() {
            return Err(AppError::ProfileMissing);
        }

        let at = req.at.unwrap_or(now);
        let entries = store.read_all_entries()?;

        if !req.force {
            Self::check_guards(&entries, kind, &at)?;
        }

        let photo = match &req.photo {
            Some(p) if !p.exists() => {
                return Err(AppError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Photo not found: {}", p.display()),
                )));
            }
            Some(p) => Some(p.canonicalize().unwrap_or_else(|_| p.clone())),
            None => None,
        };

        let odometer = Self::resolve_odometer(req.km.as_deref(), photo.as_ref(), reader)?;
        let location = describe_location(req.address.as_deref(), req.position, &at);
        let id = next_entry_id(&entries, now.timestamp_millis());

        let entry = LogEntry::new(
            id,
            &at,
            kind,
            odometer,
            photo.map(|p| p.to_string_lossy().to_string()),
            location,
        );

        store.append_entry(&entry)?;

        let verb = if kind.is_start() { "opened" } else { "closed" };
        audit_or_warn(
            store,
            kind.ek_as_str(),
            &entry.id,
            &format!("Shift {} at {} km", verb, entry.odometer),
        );

        Ok(entry)
    }

    /// Guards see the log as it stood at `at`: a backdated capture is checked
    /// against the entries up to that instant, not against the newest one.
    fn check_guards(entries: &[LogEntry], kind: EntryKind, at: &DateTime<Local>) -> AppResult<()> {
        let cutoff = at.timestamp_millis();
        let before: Vec<LogEntry> = entries
            .iter()
            .filter(|e| e.timestamp <= cutoff)
            .cloned()
            .collect();
        let status = dashboard_status(&before, at.date_naive(), &Local);

        match kind {
            EntryKind::Start if status.is_working() => {
                let since = status
                    .last_entry
                    .as_ref()
                    .map(|e| format!("{} {}", e.date_str(), e.time_str()))
                    .unwrap_or_default();
                Err(AppError::ShiftAlreadyOpen(since))
            }
            EntryKind::Start if status.started_today => {
                Err(AppError::AlreadyStartedToday(at.format("%d/%m/%Y").to_string()))
            }
            EntryKind::End if !status.can_end() => Err(AppError::NoOpenShift),
            _ => Ok(()),
        }
    }

    fn resolve_odometer(
        typed: Option<&str>,
        photo: Option<&PathBuf>,
        reader: Option<&dyn OdometerReader>,
    ) -> AppResult<u32> {
        if let Some(t) = typed {
            return parse_odometer(t);
        }

        match (photo, reader) {
            (Some(p), Some(r)) => r.read(p).ok_or_else(|| {
                AppError::OdometerUnreadable(format!(
                    "no reading recognized in {}; pass --km",
                    p.display()
                ))
            }),
            (Some(_), None) => Err(AppError::OdometerUnreadable(
                "no OCR command configured; pass --km".into(),
            )),
            (None, _) => Err(AppError::OdometerUnreadable(
                "pass --km or a --photo to read it from".into(),
            )),
        }
    }
}

/// Epoch milliseconds of the capture, bumped past any id already taken.
pub fn next_entry_id(entries: &[LogEntry], now_ms: i64) -> String {
    let mut candidate = now_ms;
    while entries.iter().any(|e| e.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
