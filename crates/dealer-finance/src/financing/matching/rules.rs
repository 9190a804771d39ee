use serde::{Deserialize, Serialize};

use super::super::domain::{LenderDefinition, LoanRequest};
use super::config::{
    DEFAULT_MAX_CREDIT_SCORE, DEFAULT_MAX_VEHICLE_AGE, DEFAULT_MIN_CREDIT_SCORE,
    DEFAULT_MIN_INCOME, DEFAULT_MIN_LOAN_AMOUNT,
};

/// Hard eligibility rule a lender rejected the request on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Ineligibility {
    Inactive,
    CreditBelowMinimum { required: u16, actual: u16 },
    CreditAboveMaximum { allowed: u16, actual: u16 },
    IncomeBelowMinimum { required: f64, actual: f64 },
    LoanBelowMinimum { required: f64, requested: f64 },
    LoanAboveMaximum { allowed: f64, requested: f64 },
    VehicleTooOld { allowed_years: u32, actual_years: i32 },
}

impl Ineligibility {
    pub fn summary(&self) -> String {
        match self {
            Ineligibility::Inactive => "lender is not accepting applications".to_string(),
            Ineligibility::CreditBelowMinimum { required, actual } => {
                format!("credit score {actual} below minimum {required}")
            }
            Ineligibility::CreditAboveMaximum { allowed, actual } => {
                format!("credit score {actual} above maximum {allowed}")
            }
            Ineligibility::IncomeBelowMinimum { required, actual } => {
                format!("income {actual:.0} below minimum {required:.0}")
            }
            Ineligibility::LoanBelowMinimum {
                required,
                requested,
            } => format!("loan amount {requested:.0} below minimum {required:.0}"),
            Ineligibility::LoanAboveMaximum { allowed, requested } => {
                format!("loan amount {requested:.0} above maximum {allowed:.0}")
            }
            Ineligibility::VehicleTooOld {
                allowed_years,
                actual_years,
            } => format!("vehicle is {actual_years} years old, limit {allowed_years}"),
        }
    }
}

/// Applicant facts the eligibility gate reads, already resolved to defaults.
pub(crate) struct Applicant {
    pub credit_score: u16,
    pub income: f64,
    pub vehicle_age: i32,
}

/// Every rule `lender` fails for the request. Empty means eligible.
pub(crate) fn check_eligibility(
    lender: &LenderDefinition,
    applicant: &Applicant,
    request: &LoanRequest,
) -> Vec<Ineligibility> {
    let mut failures = Vec::new();

    if !lender.is_active {
        failures.push(Ineligibility::Inactive);
    }

    let min_credit = lender.min_credit_score.unwrap_or(DEFAULT_MIN_CREDIT_SCORE);
    let max_credit = lender.max_credit_score.unwrap_or(DEFAULT_MAX_CREDIT_SCORE);
    if applicant.credit_score < min_credit {
        failures.push(Ineligibility::CreditBelowMinimum {
            required: min_credit,
            actual: applicant.credit_score,
        });
    }
    if applicant.credit_score > max_credit {
        failures.push(Ineligibility::CreditAboveMaximum {
            allowed: max_credit,
            actual: applicant.credit_score,
        });
    }

    let min_income = lender.min_income.unwrap_or(DEFAULT_MIN_INCOME);
    if applicant.income < min_income {
        failures.push(Ineligibility::IncomeBelowMinimum {
            required: min_income,
            actual: applicant.income,
        });
    }

    let min_loan = lender.min_loan_amount.unwrap_or(DEFAULT_MIN_LOAN_AMOUNT);
    if request.loan_amount < min_loan {
        failures.push(Ineligibility::LoanBelowMinimum {
            required: min_loan,
            requested: request.loan_amount,
        });
    }
    if let Some(max_loan) = lender.max_loan_amount {
        if request.loan_amount > max_loan {
            failures.push(Ineligibility::LoanAboveMaximum {
                allowed: max_loan,
                requested: request.loan_amount,
            });
        }
    }

    let max_age = lender.max_vehicle_age.unwrap_or(DEFAULT_MAX_VEHICLE_AGE);
    if i64::from(applicant.vehicle_age) > i64::from(max_age) {
        failures.push(Ineligibility::VehicleTooOld {
            allowed_years: max_age,
            actual_years: applicant.vehicle_age,
        });
    }

    failures
}
