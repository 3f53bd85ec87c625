pub mod entry;
pub mod entry_kind;
pub mod profile;
pub mod report;
pub mod shift;
