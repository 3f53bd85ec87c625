pub mod calculator;
pub mod config;
pub mod edit;
pub mod log;
pub mod logic;
pub mod status;
