//! Lender catalog loading and validation.

mod reference;
mod sheet;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::domain::{LenderDefinition, LenderId};

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    Invalid { lender: String, reason: String },
    UnsupportedExtension(PathBuf),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read lender catalog: {}", err),
            CatalogError::Json(err) => write!(f, "invalid lender catalog JSON: {}", err),
            CatalogError::Csv(err) => write!(f, "invalid lender spreadsheet data: {}", err),
            CatalogError::Invalid { lender, reason } => {
                write!(f, "lender '{}' is invalid: {}", lender, reason)
            }
            CatalogError::UnsupportedExtension(path) => write!(
                f,
                "lender catalog '{}' must be a .json or .csv file",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
            CatalogError::Invalid { .. } | CatalogError::UnsupportedExtension(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Validated, ordered set of lender definitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LenderCatalog {
    lenders: Vec<LenderDefinition>,
}

impl LenderCatalog {
    pub fn new(lenders: Vec<LenderDefinition>) -> Result<Self, CatalogError> {
        validate(&lenders)?;
        Ok(Self { lenders })
    }

    /// Five-lender catalog spanning bank, tiered, subprime, deep subprime, and credit union.
    pub fn reference() -> Self {
        Self {
            lenders: reference::reference_lenders(),
        }
    }

    /// Read a JSON array of lender definitions.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let lenders: Vec<LenderDefinition> = serde_json::from_reader(reader)?;
        Self::new(lenders)
    }

    /// Read a spreadsheet export with one row per lender program.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::new(sheet::parse_lenders(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_reader(BufReader::new(File::open(path)?)),
            Some("csv") => Self::from_csv_reader(File::open(path)?),
            _ => Err(CatalogError::UnsupportedExtension(path.to_path_buf())),
        }
    }

    pub fn lenders(&self) -> &[LenderDefinition] {
        &self.lenders
    }

    pub fn get(&self, id: &LenderId) -> Option<&LenderDefinition> {
        self.lenders.iter().find(|lender| &lender.id == id)
    }

    pub fn len(&self) -> usize {
        self.lenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lenders.is_empty()
    }
}

fn validate(lenders: &[LenderDefinition]) -> Result<(), CatalogError> {
    let mut seen: HashSet<&str> = HashSet::new();

    for lender in lenders {
        let id = lender.id.0.as_str();
        let invalid = |reason: String| CatalogError::Invalid {
            lender: id.to_string(),
            reason,
        };

        if id.trim().is_empty() {
            return Err(invalid("lender id must not be empty".to_string()));
        }
        if !seen.insert(id) {
            return Err(invalid("lender id appears more than once".to_string()));
        }

        if let (Some(min), Some(max)) = (lender.min_credit_score, lender.max_credit_score) {
            if min > max {
                return Err(invalid(format!(
                    "minimum credit score {min} exceeds maximum {max}"
                )));
            }
        }
        if let (Some(min), Some(max)) = (lender.min_loan_amount, lender.max_loan_amount) {
            if min > max {
                return Err(invalid(format!(
                    "minimum loan amount {min} exceeds maximum {max}"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reference_catalog_is_valid() {
        let catalog = LenderCatalog::reference();
        assert_eq!(catalog.len(), 5);
        validate(catalog.lenders()).expect("reference catalog validates");

        let types: Vec<&str> = catalog
            .lenders()
            .iter()
            .map(|lender| lender.lender_type.as_str())
            .collect();
        assert_eq!(
            types,
            vec![
                "Traditional Bank",
                "Tier-Based Lender",
                "Subprime Specialist",
                "Deep Subprime",
                "Credit Union"
            ]
        );
    }

    #[test]
    fn json_catalog_rejects_duplicate_ids() {
        let json = r#"[
            {"id":"a","name":"First","type":"Traditional Bank","is_active":true},
            {"id":"a","name":"Second","type":"Credit Union","is_active":true}
        ]"#;

        let err = LenderCatalog::from_json_reader(Cursor::new(json)).expect_err("duplicate id");
        assert!(matches!(err, CatalogError::Invalid { ref lender, .. } if lender == "a"));
    }

    #[test]
    fn json_catalog_rejects_inverted_bounds() {
        let json = r#"[
            {"id":"a","name":"First","type":"Traditional Bank","is_active":true,
             "min_credit_score":720,"max_credit_score":680}
        ]"#;

        let err = LenderCatalog::from_json_reader(Cursor::new(json)).expect_err("inverted");
        assert!(err.to_string().contains("minimum credit score 720"));
    }

    #[test]
    fn json_catalog_rejects_inverted_fico_ranges() {
        let json = r#"[
            {"id":"a","name":"First","type":"Traditional Bank","is_active":true,
             "programs":[{"name":"Broken","fico_range":"700-600"}]}
        ]"#;

        let err = LenderCatalog::from_json_reader(Cursor::new(json)).expect_err("bad range");
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        let err = LenderCatalog::from_path("lenders.xlsx").expect_err("xlsx unsupported");
        assert!(matches!(err, CatalogError::UnsupportedExtension(_)));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = LenderCatalog::reference();
        let lender = catalog
            .get(&LenderId("5".to_string()))
            .expect("credit union present");
        assert_eq!(lender.lender_type, "Credit Union");
    }
}
