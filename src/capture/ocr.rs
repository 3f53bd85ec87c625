//! Odometer recognition from a dashboard photo.
//!
//! Recognition itself is delegated to an external program; this side only
//! runs it and cleans up what it prints. Any failure means "no reading":
//! the user can always type the value with `--km`.

use regex::Regex;
use std::path::Path;
use std::process::Command;
use std::sync::OnceLock;

pub trait OdometerReader {
    fn read(&self, image: &Path) -> Option<u32>;
}

/// Keep only the digits of a recognizer's answer ("12.345 km" → 12345).
pub fn extract_reading(text: &str) -> Option<u32> {
    static NON_DIGITS: OnceLock<Regex> = OnceLock::new();
    let re = NON_DIGITS.get_or_init(|| Regex::new(r"[^0-9]").expect("static regex"));

    let digits = re.replace_all(text.trim(), "");
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Runs `program args... <image>` and reads the odometer from its stdout.
#[derive(Debug, Clone)]
pub struct CommandReader {
    program: String,
    args: Vec<String>,
}

impl CommandReader {
    /// Build from a config line such as `"ocr-odometer --lang pt"`.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl OdometerReader for CommandReader {
    fn read(&self, image: &Path) -> Option<u32> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(image)
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        extract_reading(&String::from_utf8_lossy(&output.stdout))
    }
}
