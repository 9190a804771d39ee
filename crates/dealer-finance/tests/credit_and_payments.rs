use dealer_finance::financing::{
    analyze_profile, classify, monthly_payment, CreditTier, CustomerProfile, PaymentError,
    PaymentRequest,
};

#[test]
fn base_probability_never_rises_as_scores_fall() {
    let probabilities: Vec<u8> = (300..850)
        .rev()
        .map(|score| classify(score, None, None).approval_probability)
        .collect();

    assert!(probabilities.windows(2).all(|pair| pair[0] >= pair[1]));

    let tiers: std::collections::HashSet<CreditTier> = (300..850)
        .map(|score| classify(score, None, None).tier)
        .collect();
    assert_eq!(tiers.len(), 5);
}

#[test]
fn classifier_rate_tracks_tier_only() {
    let strained = classify(610, Some(90_000.0), Some(48.0));
    let comfortable = classify(610, Some(20_000.0), Some(12.0));

    assert_eq!(strained.tier, CreditTier::Subprime);
    assert_eq!(strained.estimated_rate, 12.5);
    assert_eq!(comfortable.estimated_rate, 12.5);
    assert_eq!(strained.approval_probability, 50);
    assert_eq!(comfortable.approval_probability, 70);
}

#[test]
fn thirty_thousand_car_with_five_thousand_down() {
    let quote = monthly_payment(&PaymentRequest {
        principal: 30_000.0,
        down_payment: 5_000.0,
        trade_value: 0.0,
        annual_rate_percent: 6.0,
        term_months: 60,
        annual_income: Some(58_000.0),
    })
    .expect("quote computes");

    assert_eq!(quote.loan_amount, 25_000.0);
    assert!((quote.monthly_payment - 483.32).abs() <= 0.01);
    assert!((quote.total_interest - 3_999.20).abs() <= 0.01);
    assert_eq!(quote.payment_to_income_ratio, Some(10.0));
}

#[test]
fn trade_in_reduces_the_financed_amount() {
    let quote = monthly_payment(&PaymentRequest {
        principal: 18_000.0,
        down_payment: 2_000.0,
        trade_value: 4_000.0,
        annual_rate_percent: 0.0,
        term_months: 48,
        annual_income: None,
    })
    .expect("quote computes");

    assert_eq!(quote.loan_amount, 12_000.0);
    assert_eq!(quote.monthly_payment, 250.0);
    assert_eq!(quote.total_cost, 18_000.0);
}

#[test]
fn payment_request_deserializes_with_optional_fields_absent() {
    let request: PaymentRequest = serde_json::from_str(
        r#"{"principal": 12000.0, "annual_rate_percent": 0.0, "term_months": 0}"#,
    )
    .expect("request deserializes");

    assert_eq!(request.down_payment, 0.0);
    assert_eq!(monthly_payment(&request), Err(PaymentError::ZeroTerm));
}

#[test]
fn profile_analysis_reports_affordability() {
    let profile: CustomerProfile = serde_json::from_str(
        r#"{"first_name": "Theo", "last_name": "Banks", "income": 48000.0, "credit_score": 615}"#,
    )
    .expect("profile deserializes");
    assert_eq!(profile.display_name(), "Theo Banks");

    let analysis = analyze_profile(&profile, Some(35.0));
    assert_eq!(analysis.credit.tier, CreditTier::Subprime);
    assert_eq!(analysis.credit.approval_probability, 60);
    assert_eq!(analysis.recommended_vehicle_range.min, 36_000.0);
    assert_eq!(analysis.recommended_vehicle_range.max, 72_000.0);
    assert_eq!(analysis.optimal_down_payment, 2_400.0);
    assert_eq!(analysis.monthly_payment_capacity, 800.0);
    assert_eq!(
        analysis.lender_recommendations,
        vec!["Subprime Lenders", "Buy Here Pay Here"]
    );
}
