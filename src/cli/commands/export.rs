use crate::cli::commands::resolve_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::hint;
use crate::utils::path::expand_tilde_str;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let filter = resolve_period(period, cfg)?;
        let path = expand_tilde_str(file);

        let store = SqliteStore::open(&cfg.database)?;
        let exported = ExportLogic::export(
            &store,
            *format,
            &path,
            filter,
            cfg.csv_delimiter_byte(),
            *force,
        )?;

        if exported > 0 {
            hint(format!("{} shift(s) exported as {}", exported, format.as_str()));
        }
    }
    Ok(())
}
