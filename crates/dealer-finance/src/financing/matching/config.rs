use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lower credit bound applied when a lender publishes none.
pub const DEFAULT_MIN_CREDIT_SCORE: u16 = 0;
/// Upper credit bound applied when a lender publishes none.
pub const DEFAULT_MAX_CREDIT_SCORE: u16 = 850;
pub const DEFAULT_MIN_INCOME: f64 = 0.0;
pub const DEFAULT_MIN_LOAN_AMOUNT: f64 = 0.0;
pub const DEFAULT_MAX_VEHICLE_AGE: u32 = 20;
/// Rate assumed for lenders without a published base rate.
pub const DEFAULT_BASE_RATE: f64 = 10.0;
/// Income assumed for customers who did not declare one.
pub const DEFAULT_CUSTOMER_INCOME: f64 = 0.0;

pub const BASE_APPROVAL_PROBABILITY: i32 = 50;
pub const MIN_APPROVAL_PROBABILITY: i32 = 5;
pub const MAX_APPROVAL_PROBABILITY: i32 = 95;
pub const RATE_FLOOR: f64 = 3.5;

/// `(minimum score, probability delta, rate delta)`, evaluated top to bottom.
pub const CREDIT_BANDS: [(u16, i32, f64); 4] = [
    (750, 40, -2.0),
    (700, 30, -1.0),
    (650, 20, 0.0),
    (600, 10, 1.0),
];
/// Applied when no credit band matches.
pub const BELOW_BANDS_ADJUSTMENT: (i32, f64) = (0, 3.0);

/// `(income strictly above, probability delta)`, evaluated top to bottom.
pub const INCOME_BANDS: [(f64, i32); 3] = [(75_000.0, 15), (50_000.0, 10), (30_000.0, 5)];

/// Share of the loan amount a down payment must exceed to earn the bonus.
pub const DOWN_PAYMENT_BONUS_RATIO: f64 = 0.2;
pub const DOWN_PAYMENT_PROBABILITY_BONUS: i32 = 15;
pub const DOWN_PAYMENT_RATE_RELIEF: f64 = 0.5;

pub const CREDIT_UNION_TYPE: &str = "Credit Union";
pub const CREDIT_UNION_BIAS: i32 = 10;
pub const DEFAULT_QUOTE_TERM_MONTHS: u32 = 60;

/// Tunables for ranking and advisory quoting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Match score bias keyed by exact lender type label.
    #[serde(default = "default_type_bias")]
    pub type_bias: BTreeMap<String, i32>,
    /// Term used for the advisory monthly payment on each match.
    #[serde(default = "default_quote_term")]
    pub quote_term_months: u32,
}

impl MatchingConfig {
    pub fn bias_for(&self, lender_type: &str) -> i32 {
        self.type_bias.get(lender_type).copied().unwrap_or(0)
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            type_bias: default_type_bias(),
            quote_term_months: DEFAULT_QUOTE_TERM_MONTHS,
        }
    }
}

fn default_type_bias() -> BTreeMap<String, i32> {
    BTreeMap::from([(CREDIT_UNION_TYPE.to_string(), CREDIT_UNION_BIAS)])
}

fn default_quote_term() -> u32 {
    DEFAULT_QUOTE_TERM_MONTHS
}
