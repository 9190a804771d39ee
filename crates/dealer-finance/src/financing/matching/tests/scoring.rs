use std::collections::BTreeMap;

use super::common::*;
use crate::financing::matching::{LenderMatcher, MatchResult, MatchingConfig};

fn single_match(matcher: &LenderMatcher, customer_score: u16, income: Option<f64>) -> MatchResult {
    let catalog = vec![lender("1", "Traditional Bank")];
    let mut matches = matcher
        .match_lenders(&profile(Some(customer_score), income), &request(20_000.0, 2021), &catalog)
        .expect("match runs");
    assert_eq!(matches.len(), 1);
    matches.remove(0)
}

#[test]
fn credit_bands_adjust_probability_and_rate() {
    let cases = [
        (780, 90, 6.0),
        (720, 80, 7.0),
        (660, 70, 8.0),
        (610, 60, 9.0),
        (540, 50, 11.0),
    ];

    for (score, probability, rate) in cases {
        let result = single_match(&matcher(), score, None);
        assert_eq!(result.approval_probability, probability, "score {score}");
        assert_eq!(result.estimated_rate, rate, "score {score}");
    }
}

#[test]
fn income_bands_are_strictly_greater_than() {
    let cases = [
        (Some(80_000.0), 75),
        (Some(75_000.0), 70),
        (Some(50_001.0), 70),
        (Some(40_000.0), 65),
        (Some(30_000.0), 60),
        (None, 60),
    ];

    for (income, probability) in cases {
        let result = single_match(&matcher(), 610, income);
        assert_eq!(result.approval_probability, probability, "income {income:?}");
    }
}

#[test]
fn down_payment_above_twenty_percent_earns_bonus() {
    let catalog = vec![lender("1", "Traditional Bank")];
    let mut customer = profile(Some(660), None);

    customer.down_payment = Some(4_000.0);
    let at_threshold = matcher()
        .match_lenders(&customer, &request(20_000.0, 2021), &catalog)
        .expect("match runs");
    assert_eq!(at_threshold[0].approval_probability, 70);
    assert_eq!(at_threshold[0].estimated_rate, 8.0);

    customer.down_payment = Some(4_000.01);
    let above = matcher()
        .match_lenders(&customer, &request(20_000.0, 2021), &catalog)
        .expect("match runs");
    assert_eq!(above[0].approval_probability, 85);
    assert_eq!(above[0].estimated_rate, 7.5);
}

#[test]
fn probability_and_rate_respect_bounds() {
    let mut low_rate = lender("1", "Traditional Bank");
    low_rate.base_rate = Some(4.0);
    let mut customer = profile(Some(800), Some(150_000.0));
    customer.down_payment = Some(10_000.0);

    let matches = matcher()
        .match_lenders(&customer, &request(20_000.0, 2023), &[low_rate])
        .expect("match runs");

    assert_eq!(matches[0].approval_probability, 95);
    assert_eq!(matches[0].estimated_rate, 3.5);
    assert_eq!(matches[0].match_score, 120);
}

#[test]
fn missing_base_rate_defaults_to_ten_percent() {
    let mut unpriced = lender("1", "Traditional Bank");
    unpriced.base_rate = None;

    let matches = matcher()
        .match_lenders(&profile(Some(560), None), &request(20_000.0, 2021), &[unpriced])
        .expect("match runs");

    assert_eq!(matches[0].estimated_rate, 13.0);
}

#[test]
fn first_matching_program_wins_over_tighter_fit() {
    let mut tiered = lender("1", "Tier-Based Lender");
    tiered.programs = vec![
        program("Prime", Some((700, 800))),
        program("Broad", Some((600, 850))),
        program("Narrow", Some((640, 660))),
    ];

    let matches = matcher()
        .match_lenders(&profile(Some(650), None), &request(20_000.0, 2021), &[tiered])
        .expect("match runs");

    let best = matches[0].best_program.as_ref().expect("program selected");
    assert_eq!(best.name, "Broad");
}

#[test]
fn program_without_range_is_universal() {
    let mut tiered = lender("1", "Tier-Based Lender");
    tiered.programs = vec![
        program("Prime", Some((700, 800))),
        program("House", None),
        program("Near Prime", Some((600, 699))),
    ];

    let matches = matcher()
        .match_lenders(&profile(Some(650), None), &request(20_000.0, 2021), &[tiered])
        .expect("match runs");

    let best = matches[0].best_program.as_ref().expect("program selected");
    assert_eq!(best.name, "House");
}

#[test]
fn lender_without_covering_program_still_matches() {
    let mut tiered = lender("1", "Tier-Based Lender");
    tiered.programs = vec![program("Prime", Some((700, 800)))];

    let matches = matcher()
        .match_lenders(&profile(Some(650), None), &request(20_000.0, 2021), &[tiered])
        .expect("match runs");

    assert_eq!(matches.len(), 1);
    assert!(matches[0].best_program.is_none());
}

#[test]
fn type_bias_table_is_configurable() {
    let mut type_bias = BTreeMap::new();
    type_bias.insert("Captive Finance".to_string(), 7);
    let matcher = LenderMatcher::new(MatchingConfig {
        type_bias,
        quote_term_months: 60,
    })
    .with_reference_year(REFERENCE_YEAR);
    let catalog = vec![lender("cu", "Credit Union"), lender("cap", "Captive Finance")];

    let matches = matcher
        .match_lenders(&profile(Some(720), None), &request(20_000.0, 2021), &catalog)
        .expect("match runs");

    assert_eq!(matches[0].lender.id.0, "cap");
    assert_eq!(matches[0].match_score, 87);
    assert_eq!(matches[1].match_score, 80);
}

#[test]
fn advisory_payment_and_ltv_are_attached() {
    let mut bank = lender("1", "Traditional Bank");
    bank.max_ltv = Some(110.0);
    let loan = crate::financing::domain::LoanRequest {
        loan_amount: 36_000.0,
        vehicle_year: 2022,
        vehicle_value: 30_000.0,
    };

    let matches = matcher()
        .match_lenders(&profile(Some(780), None), &loan, &[bank])
        .expect("match runs");

    let result = &matches[0];
    assert_eq!(result.estimated_rate, 6.0);
    assert_eq!(result.loan_to_value, Some(120.0));
    assert!(result.exceeds_max_ltv);
    assert!((result.estimated_monthly_payment - 695.98).abs() <= 0.01);
}
