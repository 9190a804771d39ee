//! Credit tier classification used by the customer profiling workflow.

use serde::{Deserialize, Serialize};

/// Income above which the classifier awards a probability bonus.
pub const INCOME_BONUS_THRESHOLD: f64 = 50_000.0;
pub const INCOME_BONUS: i32 = 5;
pub const LOW_DTI_THRESHOLD: f64 = 20.0;
pub const LOW_DTI_BONUS: i32 = 10;
pub const HIGH_DTI_THRESHOLD: f64 = 40.0;
pub const HIGH_DTI_PENALTY: i32 = 15;

const PRE_APPROVAL_NOTE: &str = "Consider pre-approval for better negotiating position";

/// Categorical risk bracket derived from a credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditTier {
    #[serde(rename = "Super Prime")]
    SuperPrime,
    #[serde(rename = "Prime")]
    Prime,
    #[serde(rename = "Near Prime")]
    NearPrime,
    #[serde(rename = "Subprime")]
    Subprime,
    #[serde(rename = "Deep Subprime")]
    DeepSubprime,
}

impl CreditTier {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::SuperPrime,
            Self::Prime,
            Self::NearPrime,
            Self::Subprime,
            Self::DeepSubprime,
        ]
    }

    /// Scores outside 300-850 land in the nearest open-ended bracket.
    pub fn from_score(credit_score: u16) -> Self {
        match credit_score {
            750..=u16::MAX => Self::SuperPrime,
            700..=749 => Self::Prime,
            650..=699 => Self::NearPrime,
            600..=649 => Self::Subprime,
            _ => Self::DeepSubprime,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SuperPrime => "Super Prime",
            Self::Prime => "Prime",
            Self::NearPrime => "Near Prime",
            Self::Subprime => "Subprime",
            Self::DeepSubprime => "Deep Subprime",
        }
    }

    pub const fn base_approval_probability(self) -> i32 {
        match self {
            Self::SuperPrime => 95,
            Self::Prime => 90,
            Self::NearPrime => 75,
            Self::Subprime => 60,
            Self::DeepSubprime => 35,
        }
    }

    pub const fn base_rate(self) -> f64 {
        match self {
            Self::SuperPrime => 3.5,
            Self::Prime => 5.5,
            Self::NearPrime => 8.5,
            Self::Subprime => 12.5,
            Self::DeepSubprime => 18.5,
        }
    }

    pub const fn qualifies_for_best_rates(self) -> bool {
        matches!(self, Self::SuperPrime | Self::Prime)
    }
}

/// Classifier output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditAssessment {
    pub tier: CreditTier,
    pub approval_probability: u8,
    pub estimated_rate: f64,
    pub recommendations: Vec<String>,
}

/// Map a credit score, optional annual income, and optional debt-to-income percentage
/// to a tier, baseline approval probability, and baseline rate.
///
/// A debt-to-income of zero is treated the same as an absent one.
pub fn classify(
    credit_score: u16,
    income: Option<f64>,
    debt_to_income: Option<f64>,
) -> CreditAssessment {
    let tier = CreditTier::from_score(credit_score);
    let mut probability = tier.base_approval_probability();

    if income.is_some_and(|income| income > INCOME_BONUS_THRESHOLD) {
        probability += INCOME_BONUS;
    }

    if let Some(dti) = debt_to_income.filter(|dti| *dti != 0.0) {
        if dti < LOW_DTI_THRESHOLD {
            probability += LOW_DTI_BONUS;
        }
        if dti > HIGH_DTI_THRESHOLD {
            probability -= HIGH_DTI_PENALTY;
        }
    }

    CreditAssessment {
        tier,
        approval_probability: probability.clamp(0, 100) as u8,
        estimated_rate: tier.base_rate(),
        recommendations: recommendations_for(tier),
    }
}

fn recommendations_for(tier: CreditTier) -> Vec<String> {
    let down_payment = if tier == CreditTier::DeepSubprime {
        "Consider larger down payment"
    } else {
        "Good financing options available"
    };
    let rates = if tier.qualifies_for_best_rates() {
        "Eligible for best rates"
    } else {
        "Focus on shorter terms"
    };

    vec![
        down_payment.to_string(),
        rates.to_string(),
        PRE_APPROVAL_NOTE.to_string(),
    ]
}
