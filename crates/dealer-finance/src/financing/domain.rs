use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Customer snapshot captured by the intake form and consumed read-only by the engines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Gross annual income.
    #[serde(default)]
    pub income: Option<f64>,
    #[serde(default)]
    pub credit_score: Option<u16>,
    #[serde(default)]
    pub down_payment: Option<f64>,
    #[serde(default)]
    pub current_vehicle: Option<String>,
    #[serde(default)]
    pub trade_in_value: Option<f64>,
}

impl CustomerProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Financing request attached to a specific vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub loan_amount: f64,
    pub vehicle_year: i32,
    pub vehicle_value: f64,
}

impl LoanRequest {
    /// Vehicle age in whole years relative to `reference_year`. Negative when the
    /// vehicle year lies after the reference year, `None` when the difference overflows.
    pub fn vehicle_age(&self, reference_year: i32) -> Option<i32> {
        reference_year.checked_sub(self.vehicle_year)
    }

    /// Loan amount as a percentage of the vehicle value.
    pub fn loan_to_value(&self) -> Option<f64> {
        if self.vehicle_value > 0.0 {
            Some(self.loan_amount / self.vehicle_value * 100.0)
        } else {
            None
        }
    }
}

/// Identifier wrapper for catalog lenders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LenderId(pub String);

impl fmt::Display for LenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static catalog entry describing a financing provider and its guidelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderDefinition {
    pub id: LenderId,
    pub name: String,
    #[serde(rename = "type")]
    pub lender_type: String,
    pub is_active: bool,

    #[serde(default)]
    pub min_credit_score: Option<u16>,
    #[serde(default)]
    pub max_credit_score: Option<u16>,
    #[serde(default)]
    pub min_income: Option<f64>,

    #[serde(default)]
    pub min_loan_amount: Option<f64>,
    #[serde(default)]
    pub max_loan_amount: Option<f64>,
    #[serde(default)]
    pub min_term: Option<u32>,
    #[serde(default)]
    pub max_term: Option<u32>,
    #[serde(default)]
    pub max_ltv: Option<f64>,
    #[serde(default)]
    pub max_pti: Option<f64>,

    #[serde(default)]
    pub max_vehicle_age: Option<u32>,
    #[serde(default)]
    pub max_mileage: Option<u32>,

    #[serde(default)]
    pub acquisition_fee: Option<f64>,
    #[serde(default)]
    pub base_rate: Option<f64>,

    #[serde(default)]
    pub programs: Vec<LenderProgram>,
}

/// Credit-tiered program offered by a lender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderProgram {
    pub name: String,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub fico_range: Option<FicoRange>,
    #[serde(default)]
    pub max_ltv: Option<f64>,
    #[serde(default)]
    pub max_term: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl LenderProgram {
    /// Programs without a FICO range accept every score.
    pub fn accepts(&self, credit_score: u16) -> bool {
        self.fico_range
            .map(|range| range.contains(credit_score))
            .unwrap_or(true)
    }
}

/// Inclusive credit score interval written as `"min-max"` in catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FicoRange {
    pub min: u16,
    pub max: u16,
}

impl FicoRange {
    pub fn new(min: u16, max: u16) -> Result<Self, FicoRangeError> {
        if min > max {
            return Err(FicoRangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, score: u16) -> bool {
        score >= self.min && score <= self.max
    }
}

impl FromStr for FicoRange {
    type Err = FicoRangeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split('-');
        let (Some(min), Some(max), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(FicoRangeError::Malformed(raw.to_string()));
        };

        let parse = |value: &str| {
            value
                .trim()
                .parse::<u16>()
                .map_err(|_| FicoRangeError::Malformed(raw.to_string()))
        };

        Self::new(parse(min)?, parse(max)?)
    }
}

impl TryFrom<String> for FicoRange {
    type Error = FicoRangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FicoRange> for String {
    fn from(value: FicoRange) -> Self {
        value.to_string()
    }
}

impl fmt::Display for FicoRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FicoRangeError {
    #[error("FICO range '{0}' must be written as min-max")]
    Malformed(String),
    #[error("FICO range {min}-{max} has a minimum above its maximum")]
    Inverted { min: u16, max: u16 },
}
