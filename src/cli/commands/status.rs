use crate::config::Config;
use crate::core::status::{DutyState, dashboard_status};
use crate::db::store::{LogStore, SqliteStore};
use crate::errors::AppResult;
use crate::ui::messages::{header, hint, warning};
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET};
use chrono::Local;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SqliteStore::open(&cfg.database)?;

    let profile = store.read_profile()?;
    let entries = store.read_all_entries()?;
    let status = dashboard_status(&entries, Local::now().date_naive(), &Local);

    match &profile {
        Some(p) => header(p.headline()),
        None => warning("No profile registered yet."),
    }

    let color = match status.state {
        DutyState::OnRoute => GREEN,
        DutyState::FinishedToday => RED,
        DutyState::Idle => GREY,
    };
    println!("{}Status   :{} {}{}{}", CYAN, RESET, color, status.state.label(), RESET);

    match &status.last_entry {
        Some(e) => {
            println!(
                "{}Last     :{} {} at {} km ({} {})",
                CYAN,
                RESET,
                e.kind.to_db_str(),
                e.odometer,
                e.date_str(),
                e.time_str()
            );
            if !e.location_headline().is_empty() {
                println!("{}Location :{} {}", CYAN, RESET, e.location_headline());
            }
        }
        None => println!("{}Last     :{} {}-{}", CYAN, RESET, GREY, RESET),
    }

    if status.can_start() {
        hint("Next: motokm start --km <KM>");
    } else if status.can_end() {
        hint("Next: motokm end --km <KM>");
    }

    Ok(())
}
