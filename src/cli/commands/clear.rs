use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::{LogStore, SqliteStore, audit_or_warn};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;
        let count = store.read_all_entries()?.len();

        if !*yes {
            warning(format!(
                "This deletes the profile and {} entr{}.",
                count,
                if count == 1 { "y" } else { "ies" }
            ));
            print!("Continue? [y/N]: ");
            io::stdout().flush().ok();

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            let ans = answer.trim().to_ascii_lowercase();
            if ans != "y" && ans != "yes" {
                info("Nothing deleted.");
                return Ok(());
            }
        }

        store.clear_all()?;
        audit_or_warn(
            &mut store,
            "clear",
            "",
            &format!("Profile and {} entries deleted", count),
        );
        success("All data cleared.");
    }
    Ok(())
}
