//! Loan total calculation

use super::interest::{interest_for_periods, BASE_RATE_PCT};
use super::{CallerRole, LoanCadence, LoanQuoteInput, LoanQuoteResult};
use crate::config::PricingConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Quote calculator
///
/// Stateless: the same pricer is used for the live preview and to re-derive
/// the submission payload, so both always agree on the same inputs.
#[derive(Debug, Clone)]
pub struct LoanPricer {
    /// Minimum finance charge in percent, also the flat `Libre` rate
    pub base_rate_pct: Decimal,
    /// Role id allowed to grant discounts
    pub privileged_role: u32,
}

impl LoanPricer {
    /// Create a new pricer
    pub fn new(base_rate_pct: Decimal, privileged_role: u32) -> Self {
        Self {
            base_rate_pct,
            privileged_role,
        }
    }

    /// Create from PricingConfig
    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(config.base_rate_pct, config.privileged_role)
    }

    /// Whether the caller may grant discounts
    pub fn is_privileged(&self, role: CallerRole) -> bool {
        role.role_id() == Some(self.privileged_role)
    }

    /// Interest percentage for fixed and progressive loans
    pub fn interest_percent(&self, cadence: Option<LoanCadence>, installment_count: u32) -> Decimal {
        interest_for_periods(
            self.base_rate_pct,
            cadence.map(|c| c.periods_per_cycle()),
            installment_count,
        )
    }

    /// Price a loan
    pub fn quote(&self, input: &LoanQuoteInput, role: CallerRole) -> LoanQuoteResult {
        let result = if input.modality.is_open_ended() {
            self.quote_open_ended(input)
        } else {
            self.quote_installments(input, role)
        };

        tracing::debug!(
            modality = input.modality.label(),
            installments = result.installment_count,
            principal = %input.principal,
            interest_pct = %result.interest_percent,
            discount_pct = %result.discount_percent,
            total = %result.total_with_discount,
            "Loan quoted"
        );

        result
    }

    fn quote_open_ended(&self, input: &LoanQuoteInput) -> LoanQuoteResult {
        let interest_percent = self.base_rate_pct;
        let total = apply_percent(input.principal, interest_percent);

        if input.discount_percent > Decimal::ZERO {
            tracing::trace!(requested = %input.discount_percent, "Discount ignored for libre");
        }

        LoanQuoteResult {
            modality: input.modality,
            cadence: Some(LoanCadence::Mensual),
            installment_count: 1,
            interest_percent,
            discount_percent: Decimal::ZERO,
            total_without_discount: total,
            total_with_discount: total,
            average_installment_value: None,
        }
    }

    fn quote_installments(&self, input: &LoanQuoteInput, role: CallerRole) -> LoanQuoteResult {
        let interest_percent = self.interest_percent(input.cadence, input.installment_count);
        let total_without_discount = apply_percent(input.principal, interest_percent);

        let discount_percent = if self.is_privileged(role) {
            input.discount_percent.clamp(Decimal::ZERO, dec!(100))
        } else {
            Decimal::ZERO
        };
        let total_with_discount = apply_percent(total_without_discount, -discount_percent);

        let average = if input.installment_count > 0 {
            total_with_discount / Decimal::from(input.installment_count)
        } else {
            Decimal::ZERO
        };

        LoanQuoteResult {
            modality: input.modality,
            cadence: input.cadence,
            installment_count: input.installment_count,
            interest_percent,
            discount_percent,
            total_without_discount,
            total_with_discount,
            average_installment_value: Some(average),
        }
    }
}

impl Default for LoanPricer {
    fn default() -> Self {
        Self {
            base_rate_pct: BASE_RATE_PCT,
            privileged_role: CallerRole::SUPER_ADMIN_ID,
        }
    }
}

/// Price a loan with the standard business rules
pub fn quote(input: &LoanQuoteInput, role: CallerRole) -> LoanQuoteResult {
    LoanPricer::default().quote(input, role)
}

/// amount * (1 + pct / 100), saturating instead of overflowing
fn apply_percent(amount: Decimal, pct: Decimal) -> Decimal {
    let factor = Decimal::ONE + pct / dec!(100);
    amount.checked_mul(factor).unwrap_or(Decimal::MAX)
}
