//! Pricing types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Loan modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanModality {
    /// Fixed installments
    #[default]
    Comun,
    /// Progressive installments
    Progresivo,
    /// Open-ended: a single open installment, interest charged per cycle
    Libre,
}

impl LoanModality {
    /// Resolve a form label (case-sensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "comun" => Some(Self::Comun),
            "progresivo" => Some(Self::Progresivo),
            "libre" => Some(Self::Libre),
            _ => None,
        }
    }

    /// Label used by forms and the loan API
    pub fn label(&self) -> &'static str {
        match self {
            Self::Comun => "comun",
            Self::Progresivo => "progresivo",
            Self::Libre => "libre",
        }
    }

    pub fn is_open_ended(&self) -> bool {
        matches!(self, Self::Libre)
    }
}

/// Repayment cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanCadence {
    /// Weekly
    Semanal,
    /// Every two weeks
    Quincenal,
    /// Monthly
    Mensual,
}

impl LoanCadence {
    /// Resolve a form label (case-sensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "semanal" => Some(Self::Semanal),
            "quincenal" => Some(Self::Quincenal),
            "mensual" => Some(Self::Mensual),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Semanal => "semanal",
            Self::Quincenal => "quincenal",
            Self::Mensual => "mensual",
        }
    }

    /// Installments of this cadence that make up one monthly cycle
    pub fn periods_per_cycle(&self) -> u32 {
        match self {
            Self::Semanal => 4,
            Self::Quincenal => 2,
            Self::Mensual => 1,
        }
    }
}

/// Role of the user requesting the quote
///
/// Resolved by the host application from its session, never read from
/// ambient state by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallerRole(Option<u32>);

impl CallerRole {
    /// Role id of the super admin
    pub const SUPER_ADMIN_ID: u32 = 0;

    /// Caller holding the given role id
    pub fn id(id: u32) -> Self {
        Self(Some(id))
    }

    /// The super admin role
    pub fn super_admin() -> Self {
        Self(Some(Self::SUPER_ADMIN_ID))
    }

    /// Caller with no resolvable role
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn role_id(&self) -> Option<u32> {
        self.0
    }
}

/// Coerced quote input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuoteInput {
    pub modality: LoanModality,
    /// Unset until the user picks one
    pub cadence: Option<LoanCadence>,
    pub installment_count: u32,
    /// Non-negative principal
    pub principal: Decimal,
    /// Requested discount; only honored for privileged callers outside `Libre`
    pub discount_percent: Decimal,
}

/// Computed quote
///
/// Derived from a [`LoanQuoteInput`] on every call and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuoteResult {
    /// Modality the quote was priced under
    pub modality: LoanModality,
    /// Effective cadence (`Libre` forces monthly)
    pub cadence: Option<LoanCadence>,
    /// Effective installment count (`Libre` forces one)
    pub installment_count: u32,
    /// Interest percentage applied to the principal
    pub interest_percent: Decimal,
    /// Discount percentage actually applied
    pub discount_percent: Decimal,
    /// principal * (1 + interest / 100)
    pub total_without_discount: Decimal,
    /// total_without_discount * (1 - discount / 100)
    pub total_with_discount: Decimal,
    /// Per-installment value; `None` for `Libre`
    pub average_installment_value: Option<Decimal>,
}
