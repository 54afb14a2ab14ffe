//! Quote command implementation

use super::{caller_role, load_form, OutputFormat};
use crate::money::RawValue;
use crate::pricing::{LoanForm, LoanPricer, LoanQuoteResult};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// JSON form file; overrides the individual field flags
    #[arg(long)]
    pub form: Option<PathBuf>,

    /// Modality: comun, progresivo or libre
    #[arg(long, default_value = "comun")]
    pub modality: String,

    /// Cadence: semanal, quincenal or mensual
    #[arg(long)]
    pub cadence: Option<String>,

    /// Installment count
    #[arg(long)]
    pub installments: Option<String>,

    /// Principal, locale formatted ("50.000,00")
    #[arg(long)]
    pub principal: Option<String>,

    /// Discount percentage (super admin only)
    #[arg(long)]
    pub discount: Option<String>,

    /// Caller role id
    #[arg(long)]
    pub role: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl QuoteArgs {
    /// Raw form from the file or the field flags
    pub fn form(&self) -> anyhow::Result<LoanForm> {
        if let Some(path) = &self.form {
            return load_form(path);
        }
        Ok(LoanForm {
            modality: RawValue::from(self.modality.as_str()),
            cadence: RawValue::from(self.cadence.clone()),
            installments: RawValue::from(self.installments.clone()),
            principal: RawValue::from(self.principal.clone()),
            discount: RawValue::from(self.discount.clone()),
        })
    }

    pub fn execute(&self, pricer: &LoanPricer) -> anyhow::Result<()> {
        tracing::info!("Pricing loan");
        let quote = pricer.preview(&self.form()?, caller_role(self.role));

        match self.format {
            OutputFormat::Table => print!("{}", format_table(&quote)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&quote)?),
        }
        Ok(())
    }
}

/// Format a quote as a table for CLI output
pub fn format_table(quote: &LoanQuoteResult) -> String {
    let cadence = quote.cadence.map(|c| c.label()).unwrap_or("-");
    let installment = quote
        .average_installment_value
        .map(|v| format!("{:.2}", round_money(v)))
        .unwrap_or_else(|| "-".to_string());

    format!(
        r#"
══════════════════════════════════════════════════════
               LOAN QUOTE
══════════════════════════════════════════════════════
Modality:         {}
Cadence:          {}
Installments:     {}
───────────────────────────────────────────────────────
Interest:         {:.2}%
Discount:         {:.2}%
Total:            {:.2}
Total (disc.):    {:.2}
Installment:      {}
══════════════════════════════════════════════════════
"#,
        quote.modality.label(),
        cadence,
        quote.installment_count,
        quote.interest_percent,
        quote.discount_percent,
        round_money(quote.total_without_discount),
        round_money(quote.total_with_discount),
        installment,
    )
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp(2)
}
