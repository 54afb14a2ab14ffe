//! Interest rate calculation
//!
//! The minimum finance charge is one base rate (60%) and scales with the
//! number of monthly cycles the installments span:
//! pct = base * (installments / periods_per_cycle), floored at base.

use super::period::period_length;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Minimum finance charge, in percent
pub const BASE_RATE_PCT: Decimal = dec!(60);

/// Interest percentage for a cadence label and installment count
///
/// Returns zero while the cadence is unresolved or there are no installments.
pub fn interest_percent(cadence: &str, installment_count: u32) -> Decimal {
    interest_for_periods(BASE_RATE_PCT, period_length(cadence), installment_count)
}

/// Interest percentage given a resolved period length and base rate
pub fn interest_for_periods(
    base_rate_pct: Decimal,
    period_length: Option<u32>,
    installment_count: u32,
) -> Decimal {
    let period = match period_length {
        Some(p) if p > 0 => p,
        _ => return Decimal::ZERO,
    };
    if installment_count == 0 {
        return Decimal::ZERO;
    }

    let cycles = Decimal::from(installment_count) / Decimal::from(period);
    let pct = base_rate_pct.checked_mul(cycles).unwrap_or(Decimal::MAX);

    pct.max(base_rate_pct)
}
