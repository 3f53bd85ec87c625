use crate::core::calculator::filter::PeriodFilter;
use crate::core::calculator::totals::ShiftTotals;
use crate::models::shift::ShiftPair;

/// What the history view shows: the shifts of one period plus their totals.
#[derive(Debug, Default, Clone)]
pub struct ShiftReport {
    pub filter: Option<PeriodFilter>,
    pub shifts: Vec<ShiftPair>,
    pub totals: ShiftTotals,
}

impl ShiftReport {
    /// "2024-06", "2024-06-03" or "all"
    pub fn period_label(&self) -> String {
        self.filter
            .as_ref()
            .map(|f| f.key())
            .unwrap_or_else(|| "all".to_string())
    }
}
