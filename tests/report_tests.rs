//! Library-level checks of the read path against a real SQLite file.

use chrono::{DateTime, TimeZone, Utc};
use motokm::core::calculator::filter::{Granularity, PeriodFilter};
use motokm::core::edit::EditLogic;
use motokm::core::logic::Core;
use motokm::db::store::{LogStore, SqliteStore};
use motokm::models::entry::LogEntry;
use motokm::models::entry_kind::EntryKind;
use motokm::models::shift::ShiftStatus;
use std::env;
use std::fs;

fn temp_store(name: &str) -> SqliteStore {
    let path = env::temp_dir().join(format!("{}_motokm_lib.sqlite", name));
    fs::remove_file(&path).ok();
    SqliteStore::open(&path.to_string_lossy()).expect("open store")
}

fn at(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, 0, 0).unwrap()
}

fn entry(when: DateTime<Utc>, kind: EntryKind, km: u32) -> LogEntry {
    let id = when.timestamp_millis().to_string();
    LogEntry::new(id, &when, kind, km, None, "Location unavailable")
}

/// 40 entries over May, June and July 2024:
/// - each month: days 1..=6 closed, distance 20 + day
/// - June: a lone start on the 10th, then a closed shift of 30 km on the 11th
/// - July: a trailing start left open on the 20th
fn three_month_log() -> Vec<LogEntry> {
    let mut log = Vec::new();
    let mut km = 1_000;

    for month in [5, 6, 7] {
        for day in 1..=6 {
            log.push(entry(at(month, day, 8), EntryKind::Start, km));
            km += 20 + day;
            log.push(entry(at(month, day, 18), EntryKind::End, km));
        }
        if month == 6 {
            log.push(entry(at(6, 10, 8), EntryKind::Start, km));
            log.push(entry(at(6, 11, 8), EntryKind::Start, km));
            km += 30;
            log.push(entry(at(6, 11, 18), EntryKind::End, km));
        }
    }
    log.push(entry(at(7, 20, 8), EntryKind::Start, km));
    log
}

#[test]
fn june_filter_over_three_months() {
    let mut store = temp_store("june_filter");
    for e in three_month_log() {
        store.append_entry(&e).unwrap();
    }

    let entries = store.read_all_entries().unwrap();
    assert_eq!(entries.len(), 40);

    let june = PeriodFilter::parse(Granularity::Month, "2024-06").unwrap();
    let report = Core::build_report_in(&entries, Some(june), &Utc);

    assert_eq!(report.shifts.len(), 8);
    assert!(report.shifts.iter().all(|p| p.date.starts_with("2024-06")));
    // 21 + 22 + ... + 26 + 30
    assert_eq!(report.totals.total_km, 171);
    assert_eq!(report.totals.closed, 7);
    assert_eq!(report.totals.incomplete, 1);
    assert_eq!(report.period_label(), "2024-06");

    let all = Core::build_report_in(&entries, None, &Utc);
    assert_eq!(all.shifts.len(), 21);
    assert_eq!(all.totals.open, 1);
    assert_eq!(all.shifts[0].status, ShiftStatus::Open);
}

#[test]
fn same_day_shifts_total_110() {
    let mut store = temp_store("same_day_110");
    for e in [
        entry(at(6, 3, 8), EntryKind::Start, 100),
        entry(at(6, 3, 12), EntryKind::End, 150),
        entry(at(6, 3, 13), EntryKind::Start, 150),
        entry(at(6, 3, 18), EntryKind::End, 210),
    ] {
        store.append_entry(&e).unwrap();
    }

    let report = Core::build_report_in(&store.read_all_entries().unwrap(), None, &Utc);
    let distances: Vec<i64> = report.shifts.iter().filter_map(|p| p.distance()).collect();

    assert_eq!(distances, vec![60, 50]);
    assert_eq!(report.totals.total_km, 110);
    assert_eq!(report.totals.closed, 2);
}

#[test]
fn edits_are_seen_on_the_next_read() {
    let mut store = temp_store("edit_next_read");
    store
        .append_entry(&entry(at(6, 3, 8), EntryKind::Start, 100))
        .unwrap();
    store
        .append_entry(&entry(at(6, 3, 9), EntryKind::Start, 120))
        .unwrap();
    store
        .append_entry(&entry(at(6, 3, 18), EntryKind::End, 200))
        .unwrap();

    let before = Core::build_report_in(&store.read_all_entries().unwrap(), None, &Utc);
    let closed = before
        .shifts
        .iter()
        .find(|p| p.is_closed())
        .expect("closed shift")
        .id
        .clone();
    assert_eq!(before.totals.total_km, 80);
    assert_eq!(before.totals.incomplete, 1);

    EditLogic::apply(&mut store, &closed, None, Some("180")).unwrap();
    let after = Core::build_report_in(&store.read_all_entries().unwrap(), None, &Utc);
    assert_eq!(after.totals.total_km, 60);

    EditLogic::apply(&mut store, &closed, Some("150"), Some("100")).unwrap();
    let after = Core::build_report_in(&store.read_all_entries().unwrap(), None, &Utc);
    assert_eq!(after.totals.total_km, -50);
    assert!(after.shifts.iter().any(|p| p.id == closed));
}
