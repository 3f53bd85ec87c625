pub mod filter;
pub mod pairing;
pub mod totals;
