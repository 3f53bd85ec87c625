use crate::models::shift::{ShiftPair, ShiftStatus};
use serde::Serialize;

/// Aggregates over a (filtered) list of shifts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShiftTotals {
    /// Sum of closed-shift distances (km). May be negative.
    pub total_km: i64,
    /// Number of closed shifts.
    pub closed: usize,
    pub open: usize,
    pub incomplete: usize,
    pub orphan: usize,
}

/// Single pass over `pairs`; open, incomplete and orphan shifts add nothing to `total_km`.
pub fn summarize(pairs: &[ShiftPair]) -> ShiftTotals {
    pairs.iter().fold(ShiftTotals::default(), |mut acc, p| {
        match p.status {
            ShiftStatus::Closed => {
                acc.total_km += p.distance().unwrap_or(0);
                acc.closed += 1;
            }
            ShiftStatus::Open => acc.open += 1,
            ShiftStatus::Incomplete => acc.incomplete += 1,
            ShiftStatus::Orphan => acc.orphan += 1,
        }
        acc
    })
}
