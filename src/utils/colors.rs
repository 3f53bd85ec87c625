/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Distance color:
/// \>0 → green
/// \<0 → red (inconsistent edit)
/// 0 → reset
pub fn color_for_distance(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

fn is_placeholder(value: &str) -> bool {
    matches!(value.trim(), "" | "-" | "--:--")
}

/// Grey out placeholders ("-", "--:--", empty).
pub fn colorize_optional(value: &str) -> String {
    if is_placeholder(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Start side green, end side red; placeholders grey.
pub fn colorize_start_end(value: &str, is_start: bool) -> String {
    if is_placeholder(value) {
        return format!("{GREY}{value}{RESET}");
    }

    if is_start {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
