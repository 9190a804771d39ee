use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::super::domain::{FicoRange, LenderDefinition, LenderId, LenderProgram};
use super::CatalogError;

/// Parse a lender spreadsheet export with one row per program.
///
/// Lender columns repeat on every row of the same `Lender ID`; the first row wins for them.
/// Lenders keep first-appearance order, programs keep row order.
pub(crate) fn parse_lenders<R: Read>(reader: R) -> Result<Vec<LenderDefinition>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut lenders: Vec<LenderDefinition> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in csv_reader.deserialize::<LenderRow>() {
        let row = record?;
        let program = row.program()?;

        let index = match positions.get(&row.lender_id) {
            Some(index) => *index,
            None => {
                lenders.push(row.lender());
                positions.insert(row.lender_id.clone(), lenders.len() - 1);
                lenders.len() - 1
            }
        };

        if let Some(program) = program {
            lenders[index].programs.push(program);
        }
    }

    Ok(lenders)
}

#[derive(Debug, Deserialize)]
struct LenderRow {
    #[serde(rename = "Lender ID")]
    lender_id: String,
    #[serde(rename = "Lender Name")]
    name: String,
    #[serde(rename = "Lender Type")]
    lender_type: String,
    #[serde(rename = "Active", default, deserialize_with = "empty_string_as_none")]
    active: Option<String>,
    #[serde(rename = "Min Credit Score", default)]
    min_credit_score: Option<u16>,
    #[serde(rename = "Max Credit Score", default)]
    max_credit_score: Option<u16>,
    #[serde(rename = "Min Income", default)]
    min_income: Option<f64>,
    #[serde(rename = "Min Loan Amount", default)]
    min_loan_amount: Option<f64>,
    #[serde(rename = "Max Loan Amount", default)]
    max_loan_amount: Option<f64>,
    #[serde(rename = "Min Term", default)]
    min_term: Option<u32>,
    #[serde(rename = "Max Term", default)]
    max_term: Option<u32>,
    #[serde(rename = "Max LTV", default)]
    max_ltv: Option<f64>,
    #[serde(rename = "Max PTI", default)]
    max_pti: Option<f64>,
    #[serde(rename = "Max Vehicle Age", default)]
    max_vehicle_age: Option<u32>,
    #[serde(rename = "Max Mileage", default)]
    max_mileage: Option<u32>,
    #[serde(rename = "Acquisition Fee", default)]
    acquisition_fee: Option<f64>,
    #[serde(rename = "Base Rate", default)]
    base_rate: Option<f64>,
    #[serde(
        rename = "Program Name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    program_name: Option<String>,
    #[serde(
        rename = "Program Tier",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    program_tier: Option<String>,
    #[serde(rename = "FICO Range", default, deserialize_with = "empty_string_as_none")]
    fico_range: Option<String>,
    #[serde(rename = "Program Max LTV", default)]
    program_max_ltv: Option<f64>,
    #[serde(rename = "Program Max Term", default)]
    program_max_term: Option<u32>,
    #[serde(
        rename = "Program Active",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    program_active: Option<String>,
}

impl LenderRow {
    fn lender(&self) -> LenderDefinition {
        LenderDefinition {
            id: LenderId(self.lender_id.clone()),
            name: self.name.clone(),
            lender_type: self.lender_type.clone(),
            is_active: self.active.as_deref().map(parse_flag).unwrap_or(true),
            min_credit_score: self.min_credit_score,
            max_credit_score: self.max_credit_score,
            min_income: self.min_income,
            min_loan_amount: self.min_loan_amount,
            max_loan_amount: self.max_loan_amount,
            min_term: self.min_term,
            max_term: self.max_term,
            max_ltv: self.max_ltv,
            max_pti: self.max_pti,
            max_vehicle_age: self.max_vehicle_age,
            max_mileage: self.max_mileage,
            acquisition_fee: self.acquisition_fee,
            base_rate: self.base_rate,
            programs: Vec::new(),
        }
    }

    fn program(&self) -> Result<Option<LenderProgram>, CatalogError> {
        let Some(name) = self.program_name.clone() else {
            return Ok(None);
        };

        let fico_range = self
            .fico_range
            .as_deref()
            .map(str::parse::<FicoRange>)
            .transpose()
            .map_err(|err| CatalogError::Invalid {
                lender: self.lender_id.clone(),
                reason: format!("program '{name}': {err}"),
            })?;

        Ok(Some(LenderProgram {
            name,
            tier: self.program_tier.clone(),
            fico_range,
            max_ltv: self.program_max_ltv,
            max_term: self.program_max_term,
            is_active: self.program_active.as_deref().map(parse_flag).unwrap_or(true),
        }))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "active"
    )
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
