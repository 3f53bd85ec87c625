use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Every other migration is recorded in it.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if a column exists on a table.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Run `sql` once, then record `version` in the log table.
fn apply_once(conn: &Connection, version: &str, message: &str, sql: &str) -> Result<bool> {
    if is_applied(conn, version)? {
        return Ok(false);
    }

    conn.execute_batch(sql)?;
    mark_applied(conn, version, message)?;
    Ok(true)
}

fn create_entries_table(conn: &Connection) -> Result<()> {
    // tabella già presente (DB creato a mano o migrazione persa) → solo marcatura
    if table_exists(conn, "entries")? {
        if !is_applied(conn, "20250601_0001_create_entries")? {
            mark_applied(conn, "20250601_0001_create_entries", "entries table found")?;
        }
        return Ok(());
    }

    if apply_once(
        conn,
        "20250601_0001_create_entries",
        "Created entries table",
        r#"
        CREATE TABLE entries (
            id         TEXT PRIMARY KEY,
            date       TEXT NOT NULL,
            timestamp  INTEGER NOT NULL,
            kind       TEXT NOT NULL CHECK(kind IN ('START','END')),
            odometer   INTEGER NOT NULL CHECK(odometer >= 0)
        );
        "#,
    )? {
        success("Created entries table.");
    }
    Ok(())
}

fn create_profile_table(conn: &Connection) -> Result<()> {
    if apply_once(
        conn,
        "20250601_0002_create_profile",
        "Created profile table",
        r#"
        CREATE TABLE IF NOT EXISTS profile (
            id            INTEGER PRIMARY KEY CHECK(id = 1),
            name          TEXT NOT NULL,
            company       TEXT NOT NULL DEFAULT '',
            vehicle_model TEXT NOT NULL DEFAULT '',
            plate         TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        );
        "#,
    )? {
        success("Created profile table.");
    }
    Ok(())
}

/// Photos and location text arrived after the first release.
fn add_capture_columns(conn: &Connection) -> Result<()> {
    let version = "20250715_0003_add_capture_columns";
    if is_applied(conn, version)? {
        return Ok(());
    }

    if !has_column(conn, "entries", "photo")? {
        conn.execute("ALTER TABLE entries ADD COLUMN photo TEXT NULL;", [])?;
    }
    if !has_column(conn, "entries", "location")? {
        conn.execute(
            "ALTER TABLE entries ADD COLUMN location TEXT NOT NULL DEFAULT '';",
            [],
        )?;
    }

    mark_applied(conn, version, "Added photo/location to entries")?;
    success(format!(
        "Migration applied: {} → added 'photo' and 'location' to entries table",
        version
    ));
    Ok(())
}

fn create_timestamp_index(conn: &Connection) -> Result<()> {
    apply_once(
        conn,
        "20250715_0004_entries_timestamp_index",
        "Indexed entries by timestamp",
        "CREATE INDEX IF NOT EXISTS idx_entries_timestamp ON entries(timestamp);",
    )?;
    Ok(())
}

/// Number of migrations recorded in the log table.
pub fn applied_count(conn: &Connection) -> Result<i64> {
    if !table_exists(conn, "log")? {
        return Ok(0);
    }
    conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
        [],
        |row| row.get(0),
    )
}

/// Public entry point: run all pending migrations.
///
/// Invocata da db::init_db() e all'apertura dello store.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_entries_table(conn)?;
    create_profile_table(conn)?;
    add_capture_columns(conn)?;
    create_timestamp_index(conn)?;
    Ok(())
}
