use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";

fn line(color: &str, icon: &str, msg: impl fmt::Display) {
    println!("{color}{BOLD}{icon} {RESET}{msg}");
}

pub fn info<T: fmt::Display>(msg: T) {
    line(FG_BLUE, ICON_INFO, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    line(FG_GREEN, ICON_OK, msg);
}

/// Warnings go to stdout: they never mean the command failed.
pub fn warning<T: fmt::Display>(msg: T) {
    line(FG_YELLOW, ICON_WARN, msg);
}

/// Secondary line under a message (e.g. what to run next).
pub fn hint<T: fmt::Display>(msg: T) {
    println!("   {DIM}{msg}{RESET}");
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}== {msg} =={RESET}");
}
