//! Integration tests for submission payloads

use cuotas::config::Config;
use cuotas::pricing::{CallerRole, LoanForm, LoanPricer, SubmissionPayload};
use rust_decimal_macros::dec;

#[test]
fn test_payload_from_json_form() {
    let form: LoanForm = serde_json::from_str(
        r#"{
            "tipo": "comun",
            "periodo": "semanal",
            "cantidad_cuotas": "8",
            "monto": "50.000",
            "descuento": "10"
        }"#,
    )
    .unwrap();

    let payload = SubmissionPayload::from_form(&form, &LoanPricer::default(), CallerRole::super_admin());
    assert_eq!(payload.interes, dec!(120));
    assert_eq!(payload.descuento, dec!(10));
    assert_eq!(payload.monto_total, dec!(99000));
    assert_eq!(payload.valor_cuota, Some(dec!(12375)));
}

#[test]
fn test_payload_ignores_client_supplied_interest() {
    // Extra fields such as a tampered "interes" are not part of the form
    let form: LoanForm = serde_json::from_str(
        r#"{"tipo": "comun", "periodo": "mensual", "cantidad_cuotas": 1, "monto": 1000, "interes": 5}"#,
    )
    .unwrap();

    let payload = SubmissionPayload::from_form(&form, &LoanPricer::default(), CallerRole::anonymous());
    assert_eq!(payload.interes, dec!(60));
    assert_eq!(payload.monto_total, dec!(1600));
}

#[test]
fn test_payload_libre_forces_terms() {
    let form: LoanForm =
        serde_json::from_str(r#"{"tipo": "libre", "periodo": "semanal", "cantidad_cuotas": "6", "monto": "75.000"}"#)
            .unwrap();

    let payload = SubmissionPayload::from_form(&form, &LoanPricer::default(), CallerRole::super_admin());
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["periodo"], "mensual");
    assert_eq!(json["cantidad_cuotas"], 1);
    assert_eq!(json["monto_total"].as_f64(), Some(120000.0));
}

#[test]
fn test_payload_with_configured_pricer() {
    let config: Config = toml::from_str(
        r#"
            [pricing]
            base_rate_pct = 50
            privileged_role = 4
        "#,
    )
    .unwrap();
    let pricer = LoanPricer::from_config(&config.pricing);

    let form: LoanForm = serde_json::from_str(
        r#"{"tipo": "comun", "periodo": "mensual", "cantidad_cuotas": "1", "monto": "1.000", "descuento": "20"}"#,
    )
    .unwrap();

    let admin = SubmissionPayload::from_form(&form, &pricer, CallerRole::super_admin());
    assert_eq!(admin.interes, dec!(50));
    assert_eq!(admin.descuento, dec!(0));

    let privileged = SubmissionPayload::from_form(&form, &pricer, CallerRole::id(4));
    assert_eq!(privileged.descuento, dec!(20));
    assert_eq!(privileged.monto_total, dec!(1200));
}
