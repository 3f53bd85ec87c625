use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        pair,
        start_km,
        end_km,
    } = cmd
    {
        let mut store = SqliteStore::open(&cfg.database)?;
        let updated = EditLogic::apply(&mut store, pair, start_km.as_deref(), end_km.as_deref())?;

        if updated.is_empty() {
            info(format!("Nothing to change for {}.", pair));
            return Ok(());
        }

        for e in &updated {
            success(format!(
                "{} of {} set to {} km",
                e.kind.to_db_str(),
                pair,
                e.odometer
            ));
        }
    }
    Ok(())
}
