//! Loan pricing module
//!
//! Interest, totals, discounts and installment values for créditos

mod interest;
mod payload;
mod period;
mod quote;
mod types;

pub use interest::{interest_for_periods, interest_percent, BASE_RATE_PCT};
pub use payload::{LoanForm, SubmissionPayload};
pub use period::period_length;
pub use quote::{quote, LoanPricer};
pub use types::{CallerRole, LoanCadence, LoanModality, LoanQuoteInput, LoanQuoteResult};
