use crate::financing::domain::{
    CustomerProfile, FicoRange, LenderDefinition, LenderId, LenderProgram, LoanRequest,
};
use crate::financing::matching::{LenderMatcher, MatchingConfig};

pub(super) const REFERENCE_YEAR: i32 = 2024;

pub(super) fn matcher() -> LenderMatcher {
    LenderMatcher::new(MatchingConfig::default()).with_reference_year(REFERENCE_YEAR)
}

pub(super) fn profile(credit_score: Option<u16>, income: Option<f64>) -> CustomerProfile {
    CustomerProfile {
        first_name: "Dana".to_string(),
        last_name: "Whitfield".to_string(),
        email: "dana.whitfield@example.com".to_string(),
        phone: Some("515-555-0142".to_string()),
        income,
        credit_score,
        down_payment: None,
        current_vehicle: Some("2014 Honda Civic".to_string()),
        trade_in_value: Some(4_500.0),
    }
}

pub(super) fn request(loan_amount: f64, vehicle_year: i32) -> LoanRequest {
    LoanRequest {
        loan_amount,
        vehicle_year,
        vehicle_value: 30_000.0,
    }
}

pub(super) fn program(name: &str, fico_range: Option<(u16, u16)>) -> LenderProgram {
    LenderProgram {
        name: name.to_string(),
        tier: Some(name.to_string()),
        fico_range: fico_range
            .map(|(min, max)| FicoRange::new(min, max).expect("valid fixture range")),
        max_ltv: None,
        max_term: Some(72),
        is_active: true,
    }
}

/// Unconstrained lender; tests narrow the fields they exercise.
pub(super) fn lender(id: &str, lender_type: &str) -> LenderDefinition {
    LenderDefinition {
        id: LenderId(id.to_string()),
        name: format!("Lender {id}"),
        lender_type: lender_type.to_string(),
        is_active: true,
        min_credit_score: None,
        max_credit_score: None,
        min_income: None,
        min_loan_amount: None,
        max_loan_amount: None,
        min_term: None,
        max_term: Some(72),
        max_ltv: Some(120.0),
        max_pti: None,
        max_vehicle_age: None,
        max_mileage: None,
        acquisition_fee: None,
        base_rate: Some(8.0),
        programs: Vec::new(),
    }
}
