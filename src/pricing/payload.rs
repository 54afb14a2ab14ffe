//! Raw loan form and the loan-creation payload
//!
//! `interes` and `descuento` in the payload are always recomputed from the
//! raw form values at submission time. Values the form shows in its preview
//! are never trusted.

use super::{CallerRole, LoanCadence, LoanModality, LoanPricer, LoanQuoteInput, LoanQuoteResult};
use crate::money::{parse_count, parse_money, RawValue};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Loan form as bound by the UI
///
/// Field names follow the loan API. Absent fields deserialize as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanForm {
    /// Modality label ("comun", "progresivo", "libre")
    #[serde(rename = "tipo")]
    pub modality: RawValue,
    /// Cadence label ("semanal", "quincenal", "mensual")
    #[serde(rename = "periodo")]
    pub cadence: RawValue,
    #[serde(rename = "cantidad_cuotas")]
    pub installments: RawValue,
    #[serde(rename = "monto")]
    pub principal: RawValue,
    #[serde(rename = "descuento")]
    pub discount: RawValue,
}

impl LoanForm {
    /// Coerce the raw form into a quote input
    ///
    /// Unknown modality labels price as `Comun`. Unknown or empty cadences
    /// stay unresolved.
    pub fn to_quote_input(&self) -> LoanQuoteInput {
        let modality = self
            .modality
            .as_text()
            .and_then(LoanModality::from_label)
            .unwrap_or_default();

        LoanQuoteInput {
            modality,
            cadence: self.cadence.as_text().and_then(LoanCadence::from_label),
            installment_count: parse_count(&self.installments),
            principal: parse_money(&self.principal),
            discount_percent: parse_money(&self.discount),
        }
    }
}

impl LoanPricer {
    /// Quote shown while the user edits the form
    pub fn preview(&self, form: &LoanForm, role: CallerRole) -> LoanQuoteResult {
        self.quote(&form.to_quote_input(), role)
    }
}

/// Body sent to the loan-creation API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub tipo: LoanModality,
    pub periodo: Option<LoanCadence>,
    pub cantidad_cuotas: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub monto: Decimal,
    /// Recomputed interest percentage
    #[serde(with = "rust_decimal::serde::float")]
    pub interes: Decimal,
    /// Recomputed discount percentage
    #[serde(with = "rust_decimal::serde::float")]
    pub descuento: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub monto_total: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub valor_cuota: Option<Decimal>,
}

impl SubmissionPayload {
    /// Build the payload by re-deriving the quote from the raw form
    pub fn from_form(form: &LoanForm, pricer: &LoanPricer, role: CallerRole) -> Self {
        let input = form.to_quote_input();
        let quote = pricer.quote(&input, role);

        tracing::info!(
            modality = quote.modality.label(),
            interest_pct = %quote.interest_percent,
            discount_pct = %quote.discount_percent,
            "Submission payload derived"
        );

        Self {
            tipo: quote.modality,
            periodo: quote.cadence,
            cantidad_cuotas: quote.installment_count,
            monto: input.principal,
            interes: quote.interest_percent,
            descuento: quote.discount_percent,
            monto_total: quote.total_with_discount,
            valor_cuota: quote.average_installment_value,
        }
    }
}
