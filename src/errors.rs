//! Unified application error type.
//! All modules (db, core, capture, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid odometer value: '{0}' (expected a non-negative whole number)")]
    InvalidOdometer(String),

    #[error("Invalid entry kind: {0}")]
    InvalidEntryKind(String),

    #[error("Invalid period filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No profile registered. Run `motokm register` first.")]
    ProfileMissing,

    #[error("Shift not found: {0}")]
    PairNotFound(String),

    #[error("Shift {pair} has no {side} entry to edit")]
    MissingCounterpart { pair: String, side: &'static str },

    #[error("A shift is already open (started at {0}). Close it first or use --force.")]
    ShiftAlreadyOpen(String),

    #[error("A shift was already started today ({0}). Use --force to start another one.")]
    AlreadyStartedToday(String),

    #[error("No open shift to close. Start one first or use --force.")]
    NoOpenShift,

    #[error("Could not read the odometer: {0}")]
    OdometerUnreadable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
