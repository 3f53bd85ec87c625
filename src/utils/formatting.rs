//! Formatting utilities used for CLI outputs.

use regex::Regex;
use std::sync::OnceLock;

/// "1234 km", signed when asked ("+50 km", "-20 km").
pub fn format_km(km: i64, want_sign: bool) -> String {
    if want_sign && km > 0 {
        format!("+{} km", km)
    } else {
        format!("{} km", km)
    }
}

/// Remove ANSI escape sequences (for width computations).
pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// Visible width of a string that may carry ANSI colors.
pub fn visible_len(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/// Truncate to `max` visible chars, ending with "..." when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
