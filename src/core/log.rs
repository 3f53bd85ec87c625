use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::{strip_ansi, truncate};
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 60;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" => Colour::Green,
        "end" => Colour::Red,
        "edit" => Colour::Yellow,
        "clear" => Colour::RGB(255, 80, 80),
        "register" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "vacuum" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

/// "operation (target)", operation colored, truncated to `OP_MAX_WIDTH` visible chars.
fn render_op_target(row: &LogRow) -> String {
    let color = color_for_operation(&row.operation);

    let plain = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };
    let cut = truncate(&plain, OP_MAX_WIDTH);

    // only the operation word stays colored
    match cut.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(cut.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<(String, String)> = entries
            .iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| r.date.clone());
                (date, render_op_target(r))
            })
            .collect();

        let id_w = entries.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rendered.iter().map(|(d, _)| d.len()).max().unwrap_or(10);
        let op_w = rendered
            .iter()
            .map(|(_, op)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);

        println!("📜 Internal log:\n");

        for (row, (date, op)) in entries.iter().zip(rendered.iter()) {
            // padding calcolato senza ANSI
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(op).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                date,
                op,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_target_keeps_target_uncolored() {
        let row = LogRow {
            id: 1,
            date: "2024-06-03T08:00:00+00:00".into(),
            operation: "edit".into(),
            target: "1717401600000".into(),
            message: "end odometer set to 180 km".into(),
        };
        let out = render_op_target(&row);
        assert_eq!(strip_ansi(&out), "edit (1717401600000)");
        assert!(out.ends_with(" (1717401600000)"));
    }
}
