//! Integration tests for loan quoting

use cuotas::money::RawValue;
use cuotas::pricing::{
    interest_percent, quote, CallerRole, LoanCadence, LoanForm, LoanModality, LoanPricer,
    LoanQuoteInput,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn form(tipo: &str, periodo: &str, cuotas: &str, monto: &str, descuento: &str) -> LoanForm {
    LoanForm {
        modality: RawValue::from(tipo),
        cadence: RawValue::from(periodo),
        installments: RawValue::from(cuotas),
        principal: RawValue::from(monto),
        discount: RawValue::from(descuento),
    }
}

#[test]
fn test_monthly_single_installment_form() {
    let q = LoanPricer::default().preview(
        &form("comun", "mensual", "1", "100.000", "0"),
        CallerRole::anonymous(),
    );
    assert_eq!(q.interest_percent, dec!(60));
    assert_eq!(q.total_without_discount, dec!(160000));
    assert_eq!(q.average_installment_value, Some(dec!(160000)));
}

#[test]
fn test_weekly_eight_installments_form() {
    let q = LoanPricer::default().preview(
        &form("comun", "semanal", "8", "50.000", ""),
        CallerRole::anonymous(),
    );
    assert_eq!(q.interest_percent, dec!(120));
    assert_eq!(q.total_without_discount, dec!(110000));
}

#[test]
fn test_libre_any_discount() {
    for discount in ["0", "15", "100", "abc"] {
        for role in [CallerRole::super_admin(), CallerRole::id(2)] {
            let q = LoanPricer::default().preview(&form("libre", "", "", "75.000", discount), role);
            assert_eq!(q.interest_percent, dec!(60));
            assert_eq!(q.total_without_discount, dec!(120000));
            assert_eq!(q.total_with_discount, dec!(120000));
        }
    }
}

#[test]
fn test_progressive_biweekly_single_installment() {
    let q = LoanPricer::default().preview(
        &form("progresivo", "quincenal", "1", "10.000", ""),
        CallerRole::anonymous(),
    );
    assert_eq!(q.interest_percent, dec!(60));
    assert_eq!(q.total_without_discount, dec!(16000));
}

#[test]
fn test_nothing_chosen_yet() {
    let q = LoanPricer::default().preview(&form("comun", "", "", "25.000", ""), CallerRole::anonymous());
    assert_eq!(q.interest_percent, dec!(0));
    assert_eq!(q.total_without_discount, dec!(25000));
}

#[test]
fn test_privileged_discount_clamped_to_100() {
    let q = LoanPricer::default().preview(
        &form("comun", "mensual", "2", "10.000", "150"),
        CallerRole::super_admin(),
    );
    assert_eq!(q.discount_percent, dec!(100));
    assert_eq!(q.total_with_discount, dec!(0));
}

#[test]
fn test_decimal_comma_principal() {
    let q = LoanPricer::default().preview(
        &form("comun", "mensual", "1", "60.000,50", ""),
        CallerRole::anonymous(),
    );
    assert_eq!(q.total_without_discount, dec!(96000.80));
}

#[test]
fn test_totals_invariants() {
    let pricer = LoanPricer::default();
    let cadences = [LoanCadence::Semanal, LoanCadence::Quincenal, LoanCadence::Mensual];
    for modality in [LoanModality::Comun, LoanModality::Progresivo] {
        for cadence in cadences {
            for n in 1..=24u32 {
                let input = LoanQuoteInput {
                    modality,
                    cadence: Some(cadence),
                    installment_count: n,
                    principal: dec!(12345.67),
                    discount_percent: dec!(12.5),
                };
                let q = pricer.quote(&input, CallerRole::super_admin());
                assert!(q.interest_percent >= dec!(60));
                assert_eq!(
                    q.total_without_discount,
                    input.principal * (Decimal::ONE + q.interest_percent / dec!(100))
                );
                assert_eq!(
                    q.total_with_discount,
                    q.total_without_discount * (Decimal::ONE - dec!(12.5) / dec!(100))
                );
            }
        }
    }
}

#[test]
fn test_free_functions_use_standard_rules() {
    assert_eq!(interest_percent("semanal", 8), dec!(120));

    let input = LoanQuoteInput {
        modality: LoanModality::Comun,
        cadence: Some(LoanCadence::Semanal),
        installment_count: 8,
        principal: dec!(50000),
        discount_percent: dec!(0),
    };
    assert_eq!(
        quote(&input, CallerRole::anonymous()),
        LoanPricer::default().quote(&input, CallerRole::anonymous())
    );
}
