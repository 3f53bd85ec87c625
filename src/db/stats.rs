use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::{DateTime, Local, Utc};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ENTRIES
    //
    let (count, starts, ends): (i64, i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*),
                IFNULL(SUM(kind = 'START'), 0),
                IFNULL(SUM(kind = 'END'), 0)
         FROM entries",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;
    println!(
        "{}• Total entries:{} {}{}{} ({} start / {} end)",
        CYAN, RESET, GREEN, count, RESET, starts, ends
    );

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<i64>, Option<i64>)> = pool
        .conn
        .query_row(
            "SELECT MIN(timestamp), MAX(timestamp) FROM entries",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_ts(first));
    println!("    to:   {}", fmt_ts(last));

    //
    // 4) PROFILE
    //
    let profile: Option<String> = pool
        .conn
        .query_row("SELECT name FROM profile WHERE id = 1", [], |row| row.get(0))
        .optional()?;
    println!(
        "{}• Profile:{} {}",
        CYAN,
        RESET,
        profile.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}

fn fmt_ts(ts: Option<i64>) -> String {
    ts.and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|d| d.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"))
}
