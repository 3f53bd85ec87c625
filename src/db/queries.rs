use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::models::entry_kind::EntryKind;
use crate::models::profile::UserProfile;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const ENTRY_COLUMNS: &str = "id, date, timestamp, kind, odometer, photo, location";

pub fn map_row(row: &Row) -> Result<LogEntry> {
    let kind_str: String = row.get("kind")?;
    let kind = EntryKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEntryKind(kind_str.clone())),
        )
    })?;

    let km: i64 = row.get("odometer")?;
    let odometer = u32::try_from(km).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Integer,
            Box::new(AppError::InvalidOdometer(km.to_string())),
        )
    })?;

    Ok(LogEntry {
        id: row.get("id")?,
        date: row.get("date")?,
        timestamp: row.get("timestamp")?,
        kind,
        odometer,
        photo: row.get("photo")?,
        location: row.get("location")?,
    })
}

/// Load every entry. Rows that cannot be decoded are skipped (with a warning):
/// a damaged record is treated as absent, it never aborts the read.
pub fn load_all_entries(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries ORDER BY timestamp ASC, id ASC"
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        match r {
            Ok(e) => out.push(e),
            Err(e) => warning(format!("Skipping unreadable entry: {}", e)),
        }
    }
    Ok(out)
}

pub fn insert_entry(conn: &Connection, e: &LogEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (id, date, timestamp, kind, odometer, photo, location)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            e.id,
            e.date,
            e.timestamp,
            e.kind.to_db_str(),
            e.odometer,
            e.photo,
            e.location,
        ],
    )?;
    Ok(())
}

/// Update an entry (all fields except id). Returns the number of rows touched:
/// 0 means the id is unknown, which is not an error.
pub fn update_entry(conn: &Connection, e: &LogEntry) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE entries
         SET date = ?1, timestamp = ?2, kind = ?3,
             odometer = ?4, photo = ?5, location = ?6
         WHERE id = ?7",
        params![
            e.date,
            e.timestamp,
            e.kind.to_db_str(),
            e.odometer,
            e.photo,
            e.location,
            e.id,
        ],
    )?;
    Ok(n)
}

/// Update several entries in one transaction: either all rows change or none.
pub fn update_entries(conn: &mut Connection, entries: &[LogEntry]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    let mut touched = 0;
    for e in entries {
        touched += update_entry(&tx, e)?;
    }
    tx.commit()?;
    Ok(touched)
}

pub fn load_profile(conn: &Connection) -> AppResult<Option<UserProfile>> {
    let profile = conn
        .query_row(
            "SELECT name, company, vehicle_model, plate FROM profile WHERE id = 1",
            [],
            |row| {
                Ok(UserProfile {
                    name: row.get(0)?,
                    company: row.get(1)?,
                    vehicle_model: row.get(2)?,
                    plate: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(profile)
}

pub fn save_profile(conn: &Connection, p: &UserProfile) -> AppResult<()> {
    conn.execute(
        "INSERT INTO profile (id, name, company, vehicle_model, plate, updated_at)
         VALUES (1, ?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
             name = excluded.name,
             company = excluded.company,
             vehicle_model = excluded.vehicle_model,
             plate = excluded.plate,
             updated_at = excluded.updated_at",
        params![
            p.name,
            p.company,
            p.vehicle_model,
            p.plate,
            Local::now().to_rfc3339()
        ],
    )?;
    Ok(())
}

/// Wipe profile and entries. The audit log is kept.
pub fn clear_all(conn: &mut Connection) -> AppResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM entries", [])?;
    tx.execute("DELETE FROM profile", [])?;
    tx.commit()?;
    Ok(())
}
