//! Cadence to period-length resolution

use super::LoanCadence;

/// Periods per monthly cycle for a cadence label
///
/// `"semanal"` is 4, `"quincenal"` is 2, `"mensual"` is 1. Any other label,
/// including an empty one, resolves to `None`.
pub fn period_length(label: &str) -> Option<u32> {
    LoanCadence::from_label(label).map(|cadence| cadence.periods_per_cycle())
}
