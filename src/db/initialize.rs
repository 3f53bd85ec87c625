use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::time::Duration;

/// Open-time setup shared by every command touching the database:
/// wait on a locked file instead of failing, then bring the schema up to date.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;

    // schema lives only in the migrations
    run_pending_migrations(conn).map_err(|e| AppError::Migration(e.to_string()))
}
