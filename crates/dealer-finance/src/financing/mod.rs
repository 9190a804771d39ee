//! Dealership financing: credit tiers, lender matching, payments, and profile analysis.

pub mod catalog;
pub mod credit;
pub mod domain;
pub mod matching;
pub mod payment;
pub mod profiling;
pub mod router;
pub mod service;

pub use catalog::{CatalogError, LenderCatalog};
pub use credit::{classify, CreditAssessment, CreditTier};
pub use domain::{
    CustomerProfile, FicoRange, FicoRangeError, LenderDefinition, LenderId, LenderProgram,
    LoanRequest,
};
pub use matching::{
    match_lenders, Ineligibility, LenderMatcher, MatchError, MatchResult, MatchingConfig,
    ScreeningEntry,
};
pub use payment::{monthly_payment, PaymentError, PaymentQuote, PaymentRequest};
pub use profiling::{analyze_profile, ProfileAnalysis, VehicleRange};
pub use router::financing_router;
pub use service::{FinancingService, FinancingServiceError};
