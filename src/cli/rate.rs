//! Rate command implementation

use crate::money::{parse_count, RawValue};
use crate::pricing::{LoanCadence, LoanPricer};
use clap::Args;

#[derive(Args, Debug)]
pub struct RateArgs {
    /// Cadence: semanal, quincenal or mensual
    pub cadence: String,

    /// Installment count
    pub installments: String,
}

impl RateArgs {
    pub fn execute(&self, pricer: &LoanPricer) -> anyhow::Result<()> {
        println!("{}", self.render(pricer));
        Ok(())
    }

    /// Interest percentage line, e.g. `180%`
    pub fn render(&self, pricer: &LoanPricer) -> String {
        let cadence = LoanCadence::from_label(&self.cadence);
        if cadence.is_none() {
            tracing::warn!(cadence = %self.cadence, "Unknown cadence");
        }
        let count = parse_count(&RawValue::from(self.installments.as_str()));
        let pct = pricer.interest_percent(cadence, count);
        format!("{}%", pct.normalize())
    }
}
