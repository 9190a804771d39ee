use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use super::domain::{CustomerProfile, LoanRequest};
use super::payment::PaymentRequest;
use super::service::FinancingService;
use crate::error::AppError;

/// Router builder exposing lender matching, credit, payment, and profiling endpoints.
pub fn financing_router(service: Arc<FinancingService>) -> Router {
    Router::new()
        .route("/api/v1/lenders", get(catalog_handler))
        .route("/api/v1/lenders/match", post(match_handler))
        .route("/api/v1/lenders/screen", post(screen_handler))
        .route("/api/v1/credit/classify", post(classify_handler))
        .route("/api/v1/payments/calculate", post(payment_handler))
        .route("/api/v1/profiles/analyze", post(profile_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatchPayload {
    #[serde(default)]
    profile: CustomerProfile,
    request: LoanRequest,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyPayload {
    credit_score: u16,
    #[serde(default)]
    income: Option<f64>,
    #[serde(default)]
    debt_to_income: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfilePayload {
    #[serde(default)]
    profile: CustomerProfile,
    #[serde(default)]
    debt_to_income: Option<f64>,
}

pub(crate) async fn catalog_handler(State(service): State<Arc<FinancingService>>) -> Response {
    (StatusCode::OK, axum::Json(service.catalog().lenders())).into_response()
}

pub(crate) async fn match_handler(
    State(service): State<Arc<FinancingService>>,
    axum::Json(payload): axum::Json<MatchPayload>,
) -> Result<Response, AppError> {
    let matches = service.match_lenders(&payload.profile, &payload.request)?;
    Ok((StatusCode::OK, axum::Json(matches)).into_response())
}

pub(crate) async fn screen_handler(
    State(service): State<Arc<FinancingService>>,
    axum::Json(payload): axum::Json<MatchPayload>,
) -> Result<Response, AppError> {
    let entries = service.screen(&payload.profile, &payload.request)?;
    Ok((StatusCode::OK, axum::Json(entries)).into_response())
}

pub(crate) async fn classify_handler(
    State(service): State<Arc<FinancingService>>,
    axum::Json(payload): axum::Json<ClassifyPayload>,
) -> Response {
    let assessment = service.classify(
        payload.credit_score,
        payload.income,
        payload.debt_to_income,
    );
    (StatusCode::OK, axum::Json(assessment)).into_response()
}

pub(crate) async fn payment_handler(
    State(service): State<Arc<FinancingService>>,
    axum::Json(request): axum::Json<PaymentRequest>,
) -> Result<Response, AppError> {
    let quote = service.quote_payment(&request)?;
    Ok((StatusCode::OK, axum::Json(quote)).into_response())
}

pub(crate) async fn profile_handler(
    State(service): State<Arc<FinancingService>>,
    axum::Json(payload): axum::Json<ProfilePayload>,
) -> Response {
    let analysis = service.analyze_profile(&payload.profile, payload.debt_to_income);
    (StatusCode::OK, axum::Json(analysis)).into_response()
}
