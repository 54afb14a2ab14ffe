//! cuotas: loan quote calculator for a small lending business
//!
//! This library provides:
//! - Locale-aware parsing of untrusted monetary form input
//! - Cadence to period-length resolution
//! - Interest rate calculation with a minimum finance charge
//! - Loan totals, discounts and average installment values
//! - Submission payloads re-derived from raw form values
//! - Configuration and structured logging for the CLI

pub mod cli;
pub mod config;
pub mod money;
pub mod pricing;
pub mod telemetry;
