use crate::core::calculator::filter::Granularity;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".motokm";
const CONFIG_FILE: &str = "motokm.conf";
const DB_FILE: &str = "motokm.sqlite";

/// Every key the config file may carry (used by `config --check`).
pub const KNOWN_FIELDS: [&str; 5] = [
    "database",
    "default_granularity",
    "csv_delimiter",
    "ocr_command",
    "separator_char",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Period used by `history`/`export` when no --month/--day/--all is given.
    #[serde(default)]
    pub default_granularity: Granularity,
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: String,
    /// External OCR command: run with the photo path appended, prints the reading.
    #[serde(default)]
    pub ocr_command: Option<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_csv_delimiter() -> String {
    ";".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_granularity: Granularity::Month,
            csv_delimiter: default_csv_delimiter(),
            ocr_command: None,
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("motokm")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.csv_delimiter.len() != 1 || !self.csv_delimiter.is_ascii() {
            return Err(AppError::Config(format!(
                "csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            )));
        }
        Ok(())
    }

    /// Delimiter byte for the csv writer.
    pub fn csv_delimiter_byte(&self) -> u8 {
        self.csv_delimiter.as_bytes().first().copied().unwrap_or(b';')
    }

    /// Keys absent from a config file (they silently take their defaults).
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        let map = value.as_mapping();
        Ok(KNOWN_FIELDS
            .iter()
            .copied()
            .filter(|k| map.is_none_or(|m| !m.contains_key(*k)))
            .collect())
    }

    /// Initialize configuration and database paths.
    /// Returns the database path that ended up in the configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        // DB: user provided (relative → inside config dir) or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            // keep user settings, just point at the database
            let mut cfg = Self::load()?;
            cfg.database = db_path.to_string_lossy().to_string();
            fs::write(Self::config_file(), cfg.to_yaml()?).map_err(|_| AppError::ConfigSave)?;
        }

        Ok(db_path.to_string_lossy().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_takes_defaults() {
        let cfg = Config::from_yaml("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.default_granularity, Granularity::Month);
        assert_eq!(cfg.csv_delimiter_byte(), b';');
        assert!(cfg.ocr_command.is_none());
    }

    #[test]
    fn granularity_is_lowercase_in_yaml() {
        let cfg = Config::from_yaml("default_granularity: day\ncsv_delimiter: ','\n").unwrap();
        assert_eq!(cfg.default_granularity, Granularity::Day);
        assert_eq!(cfg.csv_delimiter_byte(), b',');
    }

    #[test]
    fn bad_delimiter_is_rejected() {
        assert!(Config::from_yaml("csv_delimiter: ';;'\n").is_err());
    }

    #[test]
    fn missing_fields_are_reported() {
        let missing = Config::missing_fields("database: a\ncsv_delimiter: ';'\n").unwrap();
        assert_eq!(
            missing,
            vec!["default_granularity", "ocr_command", "separator_char"]
        );
    }
}
