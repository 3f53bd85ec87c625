use crate::cli::commands::{resolve_period, separator};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::filter::PeriodFilter;
use crate::core::logic::Core;
use crate::db::store::{LogStore, SqliteStore};
use crate::errors::AppResult;
use crate::models::entry::LogEntry;
use crate::models::report::ShiftReport;
use crate::models::shift::{ShiftPair, ShiftStatus};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{
    CYAN, GREY, RESET, YELLOW, color_for_distance, colorize_optional, colorize_start_end,
};
use crate::utils::date::month_name;
use crate::utils::format_km;
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { period, details } = cmd {
        let filter = resolve_period(period, cfg)?;

        let store = SqliteStore::open(&cfg.database)?;
        let entries = store.read_all_entries()?;
        let report = Core::build_report(&entries, filter);

        header(title(report.filter.as_ref()));

        if report.shifts.is_empty() {
            warning(format!(
                "No shifts found for the selected period ({}).",
                report.period_label()
            ));
            return Ok(());
        }

        print!("{}", shift_table(&report, separator(cfg)));

        if *details {
            print_details(&report.shifts);
        }

        print_totals(&report);
    }
    Ok(())
}

fn title(filter: Option<&PeriodFilter>) -> String {
    match filter {
        Some(PeriodFilter::Month { year, month }) => {
            format!("Shifts for {} {}", month_name(*month), year)
        }
        Some(PeriodFilter::Day(d)) => format!("Shifts for {}", d.format("%d/%m/%Y")),
        None => "All shifts".to_string(),
    }
}

fn side_time(e: Option<&LogEntry>) -> String {
    e.map(LogEntry::time_str).unwrap_or_else(|| "--:--".into())
}

fn side_km(e: Option<&LogEntry>) -> String {
    e.map(|e| e.odometer.to_string()).unwrap_or_else(|| "-".into())
}

fn status_cell(status: ShiftStatus) -> String {
    match status {
        ShiftStatus::Closed => status.label().to_string(),
        ShiftStatus::Open => format!("{CYAN}{}{RESET}", status.label()),
        _ => format!("{YELLOW}{}{RESET}", status.label()),
    }
}

fn shift_table(report: &ShiftReport, sep: char) -> String {
    let id_w = report
        .shifts
        .iter()
        .map(|p| p.id.len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut table = Table::new(vec![
        Column::new("ID", id_w),
        Column::new("DATE", 10),
        Column::new("START", 5),
        Column::new("KM", 8),
        Column::new("END", 5),
        Column::new("KM", 8),
        Column::new("TOTAL", 10),
        Column::new("STATUS", 10),
    ]);

    for p in &report.shifts {
        let date = p.representative_local().format("%d/%m/%Y").to_string();
        let total = match p.distance() {
            Some(d) => format!("{}{}{}", color_for_distance(d), format_km(d, false), RESET),
            None => colorize_optional("-"),
        };

        table.add_row(vec![
            p.id.clone(),
            date,
            colorize_start_end(&side_time(p.start.as_ref()), true),
            colorize_optional(&side_km(p.start.as_ref())),
            colorize_start_end(&side_time(p.end.as_ref()), false),
            colorize_optional(&side_km(p.end.as_ref())),
            total,
            status_cell(p.status),
        ]);
    }

    table.render(sep)
}

fn print_details(shifts: &[ShiftPair]) {
    println!();
    for p in shifts {
        println!("{}{}{}", CYAN, p.id, RESET);
        for e in [p.start.as_ref(), p.end.as_ref()].into_iter().flatten() {
            let photo = e.photo.as_deref().unwrap_or("-");
            println!(
                "   {:<5} {} {}  📍 {}  📷 {}{}{}",
                e.kind.to_db_str(),
                e.date_str(),
                e.time_str(),
                truncate(e.location_headline(), 48),
                GREY,
                photo,
                RESET
            );
        }
    }
}

fn print_totals(report: &ShiftReport) {
    let t = &report.totals;
    println!();
    println!(
        "{}Total:{} {}{}{} over {} closed shift(s)",
        CYAN,
        RESET,
        color_for_distance(t.total_km),
        format_km(t.total_km, false),
        RESET,
        t.closed
    );

    let pending = t.open + t.incomplete + t.orphan;
    if pending > 0 {
        println!(
            "{}Not counted:{} {} open, {} incomplete, {} without start",
            GREY, RESET, t.open, t.incomplete, t.orphan
        );
    }
}
