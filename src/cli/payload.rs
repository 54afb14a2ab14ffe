//! Payload command implementation

use super::{caller_role, load_form};
use crate::pricing::{LoanPricer, SubmissionPayload};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// JSON form file
    pub form: PathBuf,

    /// Caller role id
    #[arg(long)]
    pub role: Option<u32>,
}

impl PayloadArgs {
    pub fn execute(&self, pricer: &LoanPricer) -> anyhow::Result<()> {
        tracing::info!("Building payload from {:?}", self.form);
        println!("{}", self.render(pricer)?);
        Ok(())
    }

    /// Pretty-printed JSON payload for the form file
    pub fn render(&self, pricer: &LoanPricer) -> anyhow::Result<String> {
        let form = load_form(&self.form)?;
        let payload = SubmissionPayload::from_form(&form, pricer, caller_role(self.role));
        Ok(serde_json::to_string_pretty(&payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn form_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        file
    }

    #[test]
    fn test_render_payload() {
        let file = form_file(
            r#"{"tipo": "comun", "periodo": "mensual", "cantidad_cuotas": "1", "monto": "100.000"}"#,
        );
        let args = PayloadArgs {
            form: file.path().to_path_buf(),
            role: None,
        };

        let output = args.render(&LoanPricer::default()).unwrap();
        assert!(output.contains(r#""interes": 60"#));

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["monto_total"].as_f64(), Some(160000.0));
        assert_eq!(json["descuento"].as_f64(), Some(0.0));
    }

    #[test]
    fn test_render_payload_privileged_discount() {
        let file = form_file(
            r#"{"tipo": "comun", "periodo": "mensual", "cantidad_cuotas": "1", "monto": "100.000", "descuento": "10"}"#,
        );
        let args = PayloadArgs {
            form: file.path().to_path_buf(),
            role: Some(0),
        };

        let json: serde_json::Value =
            serde_json::from_str(&args.render(&LoanPricer::default()).unwrap()).unwrap();
        assert_eq!(json["descuento"].as_f64(), Some(10.0));
        assert_eq!(json["monto_total"].as_f64(), Some(144000.0));
    }

    #[test]
    fn test_render_missing_file() {
        let args = PayloadArgs {
            form: PathBuf::from("/nonexistent/form.json"),
            role: None,
        };
        assert!(args.render(&LoanPricer::default()).is_err());
    }
}
