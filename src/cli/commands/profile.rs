use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::{LogStore, SqliteStore, audit_or_warn};
use crate::errors::AppResult;
use crate::models::profile::UserProfile;
use crate::ui::messages::{header, hint, success, warning};
use crate::utils::colors::{CYAN, RESET};

/// `register` writes the profile, `profile` prints it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut store = SqliteStore::open(&cfg.database)?;

    match cmd {
        Commands::Register {
            name,
            company,
            model,
            plate,
        } => {
            let profile = UserProfile::new(name, company, model, plate);
            profile.validate()?;

            let replaced = store.read_profile()?.is_some();
            store.write_profile(&profile)?;

            let verb = if replaced { "updated" } else { "registered" };
            audit_or_warn(
                &mut store,
                "register",
                &profile.plate,
                &format!("Profile {} for {}", verb, profile.name),
            );
            success(format!("Profile {}: {}", verb, profile.headline()));
        }
        Commands::Profile => match store.read_profile()? {
            Some(p) => {
                header("Rider profile");
                println!("{}Name    :{} {}", CYAN, RESET, p.name);
                println!("{}Company :{} {}", CYAN, RESET, p.company);
                println!("{}Model   :{} {}", CYAN, RESET, p.vehicle_model);
                println!("{}Plate   :{} {}", CYAN, RESET, p.plate);
            }
            None => {
                warning("No profile registered yet.");
                hint("Run: motokm register --name <NAME> --plate <PLATE>");
            }
        },
        _ => {}
    }

    Ok(())
}
