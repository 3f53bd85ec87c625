pub mod capture;
pub mod clear;
pub mod config;
pub mod db;
pub mod edit;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod profile;
pub mod status;

use crate::cli::parser::PeriodArgs;
use crate::config::Config;
use crate::core::calculator::filter::{Granularity, PeriodFilter};
use crate::errors::AppResult;

/// `--all` → no filter; `--month` / `--day` → that period;
/// nothing → the current period at the configured granularity.
pub(crate) fn resolve_period(args: &PeriodArgs, cfg: &Config) -> AppResult<Option<PeriodFilter>> {
    if args.all {
        return Ok(None);
    }
    if let Some(m) = &args.month {
        return PeriodFilter::parse(Granularity::Month, m).map(Some);
    }
    if let Some(d) = &args.day {
        return PeriodFilter::parse(Granularity::Day, d).map(Some);
    }
    Ok(Some(PeriodFilter::current(cfg.default_granularity)))
}

/// First char of the configured separator, '-' otherwise.
pub(crate) fn separator(cfg: &Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}
