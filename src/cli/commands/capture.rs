use crate::capture::location::{AddressParts, Position};
use crate::capture::ocr::{CommandReader, OdometerReader};
use crate::capture::{CaptureLogic, CaptureRequest};
use crate::cli::parser::{CaptureArgs, Commands};
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_local_datetime;
use crate::utils::path::expand_tilde;
use chrono::Local;

/// Handle `start` and `end`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (kind, args) = match cmd {
        Commands::Start(a) => (EntryKind::Start, a),
        Commands::End(a) => (EntryKind::End, a),
        _ => return Ok(()),
    };

    let req = build_request(args)?;
    let reader = cfg
        .ocr_command
        .as_deref()
        .and_then(CommandReader::from_command_line);

    let mut store = SqliteStore::open(&cfg.database)?;
    let entry = CaptureLogic::capture(
        &mut store,
        kind,
        &req,
        reader.as_ref().map(|r| r as &dyn OdometerReader),
        Local::now(),
    )?;

    let label = if kind.is_start() {
        "Shift started"
    } else {
        "Shift closed"
    };
    success(format!(
        "{} at {} km ({} {})",
        label,
        entry.odometer,
        entry.date_str(),
        entry.time_str()
    ));
    info(format!("📍 {}", entry.location_headline()));

    Ok(())
}

/// Free-text `--location` wins over the structured address flags.
fn build_request(args: &CaptureArgs) -> AppResult<CaptureRequest> {
    let address = match &args.location {
        Some(text) => Some(text.clone()),
        None => {
            let parts = AddressParts {
                road: args.street.clone().unwrap_or_default(),
                house_number: args.number.clone().unwrap_or_default(),
                suburb: args.suburb.clone().unwrap_or_default(),
                city: args.city.clone().unwrap_or_default(),
            };
            let composed = parts.compose();
            (!composed.is_empty()).then_some(composed)
        }
    };

    let position = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(Position::new(lat, lon).ok_or_else(|| {
            AppError::Other(format!("coordinates out of range: {}, {}", lat, lon))
        })?),
        _ => None,
    };

    let at = args.at.as_deref().map(parse_local_datetime).transpose()?;

    Ok(CaptureRequest {
        km: args.km.clone(),
        photo: args.photo.as_deref().map(expand_tilde),
        address,
        position,
        at,
        force: args.force,
    })
}
