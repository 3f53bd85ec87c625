use crate::core::calculator::pairing::{build_shifts, find_shift};
use crate::db::store::{LogStore, audit_or_warn};
use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::models::shift::ShiftPair;

/// Validate an odometer typed by the user: digits only, no sign, fits u32.
pub fn parse_odometer(input: &str) -> AppResult<u32> {
    let t = input.trim();
    if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidOdometer(input.to_string()));
    }
    t.parse::<u32>()
        .map_err(|_| AppError::InvalidOdometer(input.to_string()))
}

/// `None` or blank → no change requested.
fn requested(value: Option<&str>) -> AppResult<Option<u32>> {
    match value {
        Some(v) if !v.trim().is_empty() => parse_odometer(v).map(Some),
        _ => Ok(None),
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Work out which entries change. Nothing is written here, and every
    /// value is validated before anything is returned.
    pub fn plan(
        pairs: &[ShiftPair],
        pair_id: &str,
        start_km: Option<&str>,
        end_km: Option<&str>,
    ) -> AppResult<Vec<LogEntry>> {
        let pair =
            find_shift(pairs, pair_id).ok_or_else(|| AppError::PairNotFound(pair_id.to_string()))?;

        let new_start = requested(start_km)?;
        let new_end = requested(end_km)?;

        let mut updates = Vec::new();

        if let Some(km) = new_start {
            let start = pair.start.as_ref().ok_or_else(|| AppError::MissingCounterpart {
                pair: pair.id.clone(),
                side: "start",
            })?;
            if start.odometer != km {
                updates.push(start.with_odometer(km));
            }
        }

        if let Some(km) = new_end {
            let end = pair.end.as_ref().ok_or_else(|| AppError::MissingCounterpart {
                pair: pair.id.clone(),
                side: "end",
            })?;
            if end.odometer != km {
                updates.push(end.with_odometer(km));
            }
        }

        Ok(updates)
    }

    /// Read, re-pair, plan and persist in one batch. Returns the updated entries.
    /// Distances are not touched: the next read derives them again.
    pub fn apply(
        store: &mut dyn LogStore,
        pair_id: &str,
        start_km: Option<&str>,
        end_km: Option<&str>,
    ) -> AppResult<Vec<LogEntry>> {
        let entries = store.read_all_entries()?;
        let pairs = build_shifts(&entries);
        let updates = Self::plan(&pairs, pair_id, start_km, end_km)?;

        // start and end change together or not at all
        store.update_entries(&updates)?;

        for e in &updates {
            audit_or_warn(
                store,
                "edit",
                &e.id,
                &format!("{} odometer set to {} km ({})", e.kind.ek_as_str(), e.odometer, pair_id),
            );
        }

        Ok(updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::totals::summarize;
    use crate::db::store::MemoryStore;
    use crate::models::entry_kind::EntryKind;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, kind: EntryKind, hour: u32, km: u32) -> LogEntry {
        let at = Utc.with_ymd_and_hms(2024, 6, 10, hour, 0, 0).unwrap();
        LogEntry::new(id, &at, kind, km, None, "")
    }

    fn store() -> MemoryStore {
        MemoryStore::with_entries(vec![
            entry("1", EntryKind::Start, 8, 100),
            entry("2", EntryKind::Start, 9, 120),
            entry("3", EntryKind::End, 18, 200),
        ])
    }

    fn total(store: &MemoryStore) -> i64 {
        summarize(&build_shifts(&store.read_all_entries().unwrap())).total_km
    }

    #[test]
    fn parse_odometer_is_strict() {
        assert_eq!(parse_odometer(" 12500 ").unwrap(), 12500);
        assert_eq!(parse_odometer("0").unwrap(), 0);
        assert!(parse_odometer("").is_err());
        assert!(parse_odometer("-5").is_err());
        assert!(parse_odometer("12abc").is_err());
        assert!(parse_odometer("1.5").is_err());
        assert!(parse_odometer("99999999999").is_err());
    }

    #[test]
    fn editing_end_changes_the_total_on_next_read() {
        let mut s = store();
        assert_eq!(total(&s), 80);

        let updated = EditLogic::apply(&mut s, "pair_2_3", None, Some("180")).unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].id, "3");
        assert_eq!(total(&s), 60);
        assert_eq!(s.audit_log.len(), 1);
    }

    #[test]
    fn inconsistent_edit_goes_negative_and_is_not_rejected() {
        let mut s = store();
        EditLogic::apply(&mut s, "pair_2_3", Some("150"), Some("100")).unwrap();
        assert_eq!(total(&s), -50);
    }

    #[test]
    fn pair_ids_survive_the_edit() {
        let mut s = store();
        EditLogic::apply(&mut s, "pair_2_3", Some("121"), None).unwrap();
        let ids: Vec<String> = build_shifts(&s.read_all_entries().unwrap())
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["pair_2_3", "inc_1"]);
    }

    #[test]
    fn invalid_value_never_reaches_the_store() {
        let mut s = store();
        let before = s.entries.clone();

        let err = EditLogic::apply(&mut s, "pair_2_3", Some("130"), Some("abc")).unwrap_err();
        assert!(matches!(err, AppError::InvalidOdometer(_)));
        assert_eq!(s.entries, before);
    }

    #[test]
    fn unchanged_and_blank_values_are_skipped() {
        let mut s = store();
        let updated = EditLogic::apply(&mut s, "pair_2_3", Some("120"), Some("  ")).unwrap();
        assert!(updated.is_empty());
        assert!(s.audit_log.is_empty());
    }

    #[test]
    fn unknown_pair_and_missing_side() {
        let mut s = store();
        assert!(matches!(
            EditLogic::apply(&mut s, "pair_9_9", Some("1"), None),
            Err(AppError::PairNotFound(_))
        ));
        assert!(matches!(
            EditLogic::apply(&mut s, "inc_1", None, Some("1")),
            Err(AppError::MissingCounterpart { side: "end", .. })
        ));
    }
}
