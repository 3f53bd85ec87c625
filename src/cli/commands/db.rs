use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::migrate::{applied_count, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::queries::load_all_entries;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        if !(*migrate || *check || *vacuum || *info) {
            return Ok(());
        }

        // una sola connessione per tutte le operazioni richieste
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let before = applied_count(&pool.conn)?;
            run_pending_migrations(&pool.conn)?;
            let done = applied_count(&pool.conn)? - before;

            if done == 0 {
                println!("{}✔ Migration completed: schema already up to date.{}\n", GREEN, RESET);
            } else {
                println!("{}✔ Migration completed: {} applied.{}\n", GREEN, done, RESET);
            }
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        //
        // 3) CHECK: SQLite integrity, then entries the app cannot decode
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
            }

            let stored: i64 = pool
                .conn
                .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
            let readable = load_all_entries(&pool.conn)?.len() as i64;

            if stored > readable {
                warning(format!(
                    "{} of {} entries cannot be read and are ignored by history and export.",
                    stored - readable,
                    stored
                ));
            } else {
                println!("{}✔ All {} entries readable.{}\n", GREEN, stored, RESET);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            if let Err(e) = ttlog(&pool.conn, "vacuum", "", "Database compacted") {
                warning(format!("Failed to write internal log: {}", e));
            }
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
