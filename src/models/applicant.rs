//! Applicant profile submitted for evaluation.

use serde::Serialize;

use crate::error::{EvaluationError, Result};

pub const FICO_RANGE: (u16, u16) = (300, 850);
pub const DTI_RANGE: (f64, f64) = (0.0, 40.0);
pub const LOG_INCOME_RANGE: (f64, f64) = (5.0, 15.0);
pub const INTEREST_RATE_RANGE: (f64, f64) = (0.05, 0.25);

/// Immutable input record, built fresh for every evaluation.
///
/// Only constructible through [`ApplicantProfile::new`], so every value is
/// inside its closed range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApplicantProfile {
    fico_score: u16,
    debt_to_income_pct: f64,
    log_annual_income: f64,
    interest_rate: f64,
}

impl ApplicantProfile {
    /// Build a profile, rejecting any value outside its closed range.
    pub fn new(
        fico_score: u16,
        debt_to_income_pct: f64,
        log_annual_income: f64,
        interest_rate: f64,
    ) -> Result<Self> {
        check_range(
            "fico_score",
            fico_score as f64,
            FICO_RANGE.0 as f64,
            FICO_RANGE.1 as f64,
        )?;
        check_range("debt_to_income_pct", debt_to_income_pct, DTI_RANGE.0, DTI_RANGE.1)?;
        check_range(
            "log_annual_income",
            log_annual_income,
            LOG_INCOME_RANGE.0,
            LOG_INCOME_RANGE.1,
        )?;
        check_range(
            "interest_rate",
            interest_rate,
            INTEREST_RATE_RANGE.0,
            INTEREST_RATE_RANGE.1,
        )?;

        Ok(Self {
            fico_score,
            debt_to_income_pct,
            log_annual_income,
            interest_rate,
        })
    }

    pub fn fico_score(&self) -> u16 {
        self.fico_score
    }

    pub fn debt_to_income_pct(&self) -> f64 {
        self.debt_to_income_pct
    }

    pub fn log_annual_income(&self) -> f64 {
        self.log_annual_income
    }

    /// Fraction, e.g. 0.12 for 12%.
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Same as [`ApplicantProfile::new`] but takes the rate in percent (5-25),
    /// which is how input widgets collect it.
    pub fn from_percent_rate(
        fico_score: u16,
        debt_to_income_pct: f64,
        log_annual_income: f64,
        interest_rate_pct: f64,
    ) -> Result<Self> {
        Self::new(
            fico_score,
            debt_to_income_pct,
            log_annual_income,
            interest_rate_pct / 100.0,
        )
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(EvaluationError::InvalidProfile {
            field,
            value,
            min,
            max,
        })
    }
}
