use crate::models::entry::LogEntry;
use chrono::{NaiveDate, TimeZone};

/// Dashboard state derived from the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DutyState {
    /// The newest entry is a START.
    OnRoute,
    /// Not on route, but a shift was started today.
    FinishedToday,
    Idle,
}

impl DutyState {
    pub fn label(&self) -> &'static str {
        match self {
            DutyState::OnRoute => "ON ROUTE",
            DutyState::FinishedToday => "FINISHED TODAY",
            DutyState::Idle => "IDLE",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardStatus {
    pub state: DutyState,
    pub last_entry: Option<LogEntry>,
    pub started_today: bool,
}

impl DashboardStatus {
    pub fn is_working(&self) -> bool {
        self.state == DutyState::OnRoute
    }

    /// A new START is refused while on route or after today's start.
    pub fn can_start(&self) -> bool {
        !self.is_working() && !self.started_today
    }

    pub fn can_end(&self) -> bool {
        self.is_working()
    }
}

/// Newest entry by timestamp (id breaks ties, like the pairing sort).
pub fn latest_entry(entries: &[LogEntry]) -> Option<&LogEntry> {
    entries
        .iter()
        .max_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)))
}

/// True if some START falls on `day` in `tz`.
pub fn started_on<Tz: TimeZone>(entries: &[LogEntry], day: NaiveDate, tz: &Tz) -> bool {
    entries
        .iter()
        .any(|e| e.kind.is_start() && e.instant_in(tz).date_naive() == day)
}

pub fn dashboard_status<Tz: TimeZone>(
    entries: &[LogEntry],
    today: NaiveDate,
    tz: &Tz,
) -> DashboardStatus {
    let last_entry = latest_entry(entries).cloned();
    let working = last_entry.as_ref().is_some_and(|e| e.kind.is_start());
    let started_today = started_on(entries, today, tz);

    let state = if working {
        DutyState::OnRoute
    } else if started_today {
        DutyState::FinishedToday
    } else {
        DutyState::Idle
    };

    DashboardStatus {
        state,
        last_entry,
        started_today,
    }
}
