//! Customer profile analysis: affordability guidance layered on the credit classifier.

use serde::{Deserialize, Serialize};

use super::credit::{classify, CreditAssessment, CreditTier};
use super::domain::CustomerProfile;
use super::payment::round_cents;

/// Score assumed when the customer has not shared one.
pub const NEUTRAL_CREDIT_SCORE: u16 = 650;
/// Annual income assumed for affordability guidance when none is declared.
pub const FALLBACK_INCOME: f64 = 30_000.0;

const MIN_VEHICLE_INCOME_SHARE: f64 = 0.15;
const MIN_VEHICLE_TERM_MONTHS: f64 = 60.0;
const MAX_VEHICLE_INCOME_SHARE: f64 = 0.25;
const MAX_VEHICLE_TERM_MONTHS: f64 = 72.0;
const DOWN_PAYMENT_INCOME_SHARE: f64 = 0.05;
const MIN_DOWN_PAYMENT: f64 = 2_000.0;
const PAYMENT_CAPACITY_INCOME_SHARE: f64 = 0.20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub credit: CreditAssessment,
    pub recommended_vehicle_range: VehicleRange,
    pub optimal_down_payment: f64,
    pub monthly_payment_capacity: f64,
    pub risk_factors: Vec<String>,
    pub lender_recommendations: Vec<String>,
}

pub fn analyze_profile(profile: &CustomerProfile, debt_to_income: Option<f64>) -> ProfileAnalysis {
    let credit = classify(
        profile.credit_score.unwrap_or(NEUTRAL_CREDIT_SCORE),
        Some(profile.income.unwrap_or(0.0)),
        debt_to_income,
    );

    let income = profile.income.unwrap_or(FALLBACK_INCOME);
    let monthly_income = income / 12.0;

    let recommended_vehicle_range = VehicleRange {
        min: round_cents(monthly_income * MIN_VEHICLE_INCOME_SHARE * MIN_VEHICLE_TERM_MONTHS),
        max: round_cents(monthly_income * MAX_VEHICLE_INCOME_SHARE * MAX_VEHICLE_TERM_MONTHS),
    };

    ProfileAnalysis {
        risk_factors: credit.recommendations.clone(),
        lender_recommendations: lender_recommendations(credit.tier),
        credit,
        recommended_vehicle_range,
        optimal_down_payment: round_cents(
            (income * DOWN_PAYMENT_INCOME_SHARE).max(MIN_DOWN_PAYMENT),
        ),
        monthly_payment_capacity: round_cents(monthly_income * PAYMENT_CAPACITY_INCOME_SHARE),
    }
}

fn lender_recommendations(tier: CreditTier) -> Vec<String> {
    let lenders: &[&str] = match tier {
        CreditTier::SuperPrime => &["Credit Unions", "Banks"],
        CreditTier::Prime => &["Banks", "Captive Finance"],
        CreditTier::NearPrime => &["Captive Finance", "Regional Banks"],
        CreditTier::Subprime | CreditTier::DeepSubprime => {
            &["Subprime Lenders", "Buy Here Pay Here"]
        }
    };
    lenders.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(credit_score: Option<u16>, income: Option<f64>) -> CustomerProfile {
        CustomerProfile {
            credit_score,
            income,
            ..CustomerProfile::default()
        }
    }

    #[test]
    fn affordability_scales_with_income() {
        let analysis = analyze_profile(&profile(Some(720), Some(60_000.0)), None);

        assert_eq!(analysis.credit.tier, CreditTier::Prime);
        assert_eq!(analysis.recommended_vehicle_range.min, 45_000.0);
        assert_eq!(analysis.recommended_vehicle_range.max, 90_000.0);
        assert_eq!(analysis.optimal_down_payment, 3_000.0);
        assert_eq!(analysis.monthly_payment_capacity, 1_000.0);
        assert_eq!(analysis.lender_recommendations, vec!["Banks", "Captive Finance"]);
    }

    #[test]
    fn missing_fields_fall_back_to_neutral_values() {
        let analysis = analyze_profile(&profile(None, None), None);

        assert_eq!(analysis.credit.tier, CreditTier::NearPrime);
        assert_eq!(analysis.credit.approval_probability, 75);
        assert_eq!(analysis.recommended_vehicle_range.min, 22_500.0);
        assert_eq!(analysis.recommended_vehicle_range.max, 45_000.0);
        assert_eq!(analysis.optimal_down_payment, 2_000.0);
        assert_eq!(analysis.monthly_payment_capacity, 500.0);
    }

    #[test]
    fn risk_factors_mirror_classifier_recommendations() {
        let analysis = analyze_profile(&profile(Some(560), Some(25_000.0)), Some(45.0));
        assert_eq!(analysis.risk_factors, analysis.credit.recommendations);
        assert_eq!(analysis.credit.approval_probability, 20);
    }

    #[test]
    fn every_tier_has_lender_guidance() {
        for tier in CreditTier::ordered() {
            assert_eq!(lender_recommendations(tier).len(), 2, "{}", tier.label());
        }
        assert_eq!(
            lender_recommendations(CreditTier::SuperPrime),
            vec!["Credit Unions", "Banks"]
        );
        assert_eq!(
            lender_recommendations(CreditTier::DeepSubprime),
            vec!["Subprime Lenders", "Buy Here Pay Here"]
        );
    }
}
