//! Storage seam between the presentation layer and persistence.
//!
//! The shift engine never touches a store: callers read a snapshot with
//! `read_all_entries`, hand it to the engine, and write edits back through
//! `update_entry`.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::entry::LogEntry;
use crate::models::profile::UserProfile;
use crate::ui::messages::warning;

pub trait LogStore {
    fn read_profile(&self) -> AppResult<Option<UserProfile>>;
    fn write_profile(&mut self, profile: &UserProfile) -> AppResult<()>;

    /// Order is not meaningful; the engine re-sorts.
    fn read_all_entries(&self) -> AppResult<Vec<LogEntry>>;
    fn append_entry(&mut self, entry: &LogEntry) -> AppResult<()>;
    /// Replace the entry with the same id. Unknown ids are a silent no-op.
    fn update_entry(&mut self, entry: &LogEntry) -> AppResult<()>;
    /// Same as `update_entry` for several entries, applied all together or not at all.
    fn update_entries(&mut self, entries: &[LogEntry]) -> AppResult<()>;
    fn clear_all(&mut self) -> AppResult<()>;

    /// Record a mutating operation in the audit trail.
    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}

/// SQLite-backed store.
pub struct SqliteStore {
    pub pool: DbPool,
}

impl SqliteStore {
    /// Open (or create) the database at `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl LogStore for SqliteStore {
    fn read_profile(&self) -> AppResult<Option<UserProfile>> {
        queries::load_profile(&self.pool.conn)
    }

    fn write_profile(&mut self, profile: &UserProfile) -> AppResult<()> {
        queries::save_profile(&self.pool.conn, profile)
    }

    fn read_all_entries(&self) -> AppResult<Vec<LogEntry>> {
        queries::load_all_entries(&self.pool.conn)
    }

    fn append_entry(&mut self, entry: &LogEntry) -> AppResult<()> {
        queries::insert_entry(&self.pool.conn, entry)
    }

    fn update_entry(&mut self, entry: &LogEntry) -> AppResult<()> {
        queries::update_entry(&self.pool.conn, entry)?;
        Ok(())
    }

    fn update_entries(&mut self, entries: &[LogEntry]) -> AppResult<()> {
        queries::update_entries(&mut self.pool.conn, entries)?;
        Ok(())
    }

    fn clear_all(&mut self) -> AppResult<()> {
        queries::clear_all(&mut self.pool.conn)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.pool.conn, operation, target, message)
    }
}

/// In-process store, no persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub profile: Option<UserProfile>,
    pub entries: Vec<LogEntry>,
    pub audit_log: Vec<(String, String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<LogEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }
}

impl LogStore for MemoryStore {
    fn read_profile(&self) -> AppResult<Option<UserProfile>> {
        Ok(self.profile.clone())
    }

    fn write_profile(&mut self, profile: &UserProfile) -> AppResult<()> {
        self.profile = Some(profile.clone());
        Ok(())
    }

    fn read_all_entries(&self) -> AppResult<Vec<LogEntry>> {
        Ok(self.entries.clone())
    }

    fn append_entry(&mut self, entry: &LogEntry) -> AppResult<()> {
        self.entries.push(entry.clone());
        Ok(())
    }

    fn update_entry(&mut self, entry: &LogEntry) -> AppResult<()> {
        if let Some(slot) = self.entries.iter_mut().find(|e| e.id == entry.id) {
            *slot = entry.clone();
        }
        Ok(())
    }

    fn update_entries(&mut self, entries: &[LogEntry]) -> AppResult<()> {
        for e in entries {
            self.update_entry(e)?;
        }
        Ok(())
    }

    fn clear_all(&mut self) -> AppResult<()> {
        self.profile = None;
        self.entries.clear();
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.audit_log
            .push((operation.into(), target.into(), message.into()));
        Ok(())
    }
}

/// Audit without failing the caller: a broken log never blocks an operation.
pub fn audit_or_warn(store: &mut dyn LogStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = store.audit(operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
