use std::sync::Arc;

use tracing::debug;

use super::catalog::LenderCatalog;
use super::credit::{classify, CreditAssessment};
use super::domain::{CustomerProfile, LoanRequest};
use super::matching::{LenderMatcher, MatchError, MatchResult, ScreeningEntry};
use super::payment::{monthly_payment, PaymentError, PaymentQuote, PaymentRequest};
use super::profiling::{analyze_profile, ProfileAnalysis};

/// Service composing the lender catalog, matcher, classifier, and payment helper.
pub struct FinancingService {
    catalog: Arc<LenderCatalog>,
    matcher: Arc<LenderMatcher>,
}

impl FinancingService {
    pub fn new(catalog: Arc<LenderCatalog>, matcher: LenderMatcher) -> Self {
        Self {
            catalog,
            matcher: Arc::new(matcher),
        }
    }

    pub fn catalog(&self) -> &LenderCatalog {
        &self.catalog
    }

    pub fn matcher(&self) -> &LenderMatcher {
        &self.matcher
    }

    /// Rank the catalog for a customer and requested loan.
    pub fn match_lenders(
        &self,
        profile: &CustomerProfile,
        request: &LoanRequest,
    ) -> Result<Vec<MatchResult>, FinancingServiceError> {
        let matches = self
            .matcher
            .match_lenders(profile, request, self.catalog.lenders())?;
        Ok(matches)
    }

    /// Explain which catalog lenders accept or reject the request.
    pub fn screen(
        &self,
        profile: &CustomerProfile,
        request: &LoanRequest,
    ) -> Result<Vec<ScreeningEntry>, FinancingServiceError> {
        let entries = self
            .matcher
            .screen(profile, request, self.catalog.lenders())?;
        Ok(entries)
    }

    pub fn classify(
        &self,
        credit_score: u16,
        income: Option<f64>,
        debt_to_income: Option<f64>,
    ) -> CreditAssessment {
        classify(credit_score, income, debt_to_income)
    }

    pub fn quote_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentQuote, FinancingServiceError> {
        let quote = monthly_payment(request)?;
        debug!(
            loan_amount = quote.loan_amount,
            monthly_payment = quote.monthly_payment,
            term_months = request.term_months,
            "payment quoted"
        );
        Ok(quote)
    }

    pub fn analyze_profile(
        &self,
        profile: &CustomerProfile,
        debt_to_income: Option<f64>,
    ) -> ProfileAnalysis {
        analyze_profile(profile, debt_to_income)
    }
}

/// Error raised by the financing service.
#[derive(Debug, thiserror::Error)]
pub enum FinancingServiceError {
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
}
