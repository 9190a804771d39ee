//! Lender eligibility filtering, approval scoring, program selection, and ranking.

mod config;
mod rules;
mod scoring;

#[cfg(test)]
mod tests;

pub use config::*;
pub use rules::Ineligibility;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{CustomerProfile, LenderDefinition, LenderId, LenderProgram, LoanRequest};
use super::payment::{amortized_payment, round_cents};
use rules::{check_eligibility, Applicant};
use scoring::{score_lender, select_program};

/// Stateless matcher that ranks an injected lender catalog for one customer request.
#[derive(Debug, Clone)]
pub struct LenderMatcher {
    config: MatchingConfig,
    reference_year: i32,
}

impl Default for LenderMatcher {
    fn default() -> Self {
        Self::new(MatchingConfig::default())
    }
}

impl LenderMatcher {
    /// Vehicle ages are measured against the current calendar year.
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            config,
            reference_year: Local::now().year(),
        }
    }

    pub fn with_reference_year(mut self, reference_year: i32) -> Self {
        self.reference_year = reference_year;
        self
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Filter, score, and rank `catalog` for the profile and request.
    ///
    /// Results are ordered by match score, highest first; ties keep catalog order.
    pub fn match_lenders(
        &self,
        profile: &CustomerProfile,
        request: &LoanRequest,
        catalog: &[LenderDefinition],
    ) -> Result<Vec<MatchResult>, MatchError> {
        let applicant = self.applicant(profile, request)?;

        let mut matches: Vec<MatchResult> = catalog
            .iter()
            .filter(|lender| {
                let failures = check_eligibility(lender, &applicant, request);
                if !failures.is_empty() {
                    debug!(lender = %lender.id, reasons = failures.len(), "lender excluded");
                }
                failures.is_empty()
            })
            .map(|lender| self.build_match(lender, profile, &applicant, request))
            .collect();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        info!(
            catalog = catalog.len(),
            eligible = matches.len(),
            reference_year = self.reference_year,
            "lender matching complete"
        );

        Ok(matches)
    }

    /// Explain the eligibility gate for every lender, in catalog order.
    pub fn screen(
        &self,
        profile: &CustomerProfile,
        request: &LoanRequest,
        catalog: &[LenderDefinition],
    ) -> Result<Vec<ScreeningEntry>, MatchError> {
        let applicant = self.applicant(profile, request)?;

        Ok(catalog
            .iter()
            .map(|lender| {
                let reasons = check_eligibility(lender, &applicant, request);
                ScreeningEntry {
                    lender_id: lender.id.clone(),
                    lender_name: lender.name.clone(),
                    eligible: reasons.is_empty(),
                    reasons,
                }
            })
            .collect())
    }

    fn applicant(
        &self,
        profile: &CustomerProfile,
        request: &LoanRequest,
    ) -> Result<Applicant, MatchError> {
        let credit_score = profile.credit_score.ok_or(MatchError::MissingCreditScore)?;

        if !request.loan_amount.is_finite() || request.loan_amount <= 0.0 {
            return Err(MatchError::InvalidLoanAmount(request.loan_amount));
        }
        if !request.vehicle_value.is_finite() || request.vehicle_value <= 0.0 {
            return Err(MatchError::InvalidVehicleValue(request.vehicle_value));
        }

        let vehicle_age = request
            .vehicle_age(self.reference_year)
            .ok_or(MatchError::InvalidVehicleYear(request.vehicle_year))?;
        if vehicle_age < 0 {
            return Err(MatchError::VehicleYearInFuture {
                vehicle_year: request.vehicle_year,
                reference_year: self.reference_year,
            });
        }

        Ok(Applicant {
            credit_score,
            income: profile.income.unwrap_or(DEFAULT_CUSTOMER_INCOME),
            vehicle_age,
        })
    }

    fn build_match(
        &self,
        lender: &LenderDefinition,
        profile: &CustomerProfile,
        applicant: &Applicant,
        request: &LoanRequest,
    ) -> MatchResult {
        let signals = score_lender(lender, profile, applicant.credit_score, request);
        let best_program = select_program(lender, applicant.credit_score).cloned();
        let match_score = signals.raw_probability + self.config.bias_for(&lender.lender_type);

        let quote_term = self.config.quote_term_months.max(1);
        let estimated_monthly_payment = round_cents(amortized_payment(
            request.loan_amount,
            signals.estimated_rate,
            quote_term,
        ));

        let loan_to_value = request.loan_to_value();
        let max_ltv = best_program
            .as_ref()
            .and_then(|program| program.max_ltv)
            .or(lender.max_ltv);
        let exceeds_max_ltv =
            matches!((loan_to_value, max_ltv), (Some(ltv), Some(max)) if ltv > max);

        MatchResult {
            lender: lender.clone(),
            approval_probability: signals.approval_probability,
            estimated_rate: signals.estimated_rate,
            best_program,
            match_score,
            estimated_monthly_payment,
            loan_to_value: loan_to_value.map(round_cents),
            exceeds_max_ltv,
        }
    }
}

/// Rank `catalog` with the default configuration and the current calendar year.
pub fn match_lenders(
    profile: &CustomerProfile,
    request: &LoanRequest,
    catalog: &[LenderDefinition],
) -> Result<Vec<MatchResult>, MatchError> {
    LenderMatcher::default().match_lenders(profile, request, catalog)
}

/// Eligible lender with its computed approval outlook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub lender: LenderDefinition,
    /// Clamped to the 5-95 band.
    pub approval_probability: u8,
    pub estimated_rate: f64,
    pub best_program: Option<LenderProgram>,
    /// Ranking key only; not a probability.
    pub match_score: i32,
    /// Advisory payment at the configured quote term.
    pub estimated_monthly_payment: f64,
    pub loan_to_value: Option<f64>,
    pub exceeds_max_ltv: bool,
}

/// Eligibility verdict for a single lender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningEntry {
    pub lender_id: LenderId,
    pub lender_name: String,
    pub eligible: bool,
    pub reasons: Vec<Ineligibility>,
}

impl ScreeningEntry {
    pub fn summary(&self) -> String {
        if self.eligible {
            return "eligible".to_string();
        }
        let reasons: Vec<String> = self.reasons.iter().map(Ineligibility::summary).collect();
        format!("ineligible: {}", reasons.join("; "))
    }
}

/// Precondition failures that abort a match before any lender is scored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    #[error("customer profile must include a credit score")]
    MissingCreditScore,
    #[error("loan amount must be a positive amount, got {0}")]
    InvalidLoanAmount(f64),
    #[error("vehicle value must be a positive amount, got {0}")]
    InvalidVehicleValue(f64),
    #[error("vehicle year {0} is out of range")]
    InvalidVehicleYear(i32),
    #[error("vehicle year {vehicle_year} is after reference year {reference_year}")]
    VehicleYearInFuture {
        vehicle_year: i32,
        reference_year: i32,
    },
}
