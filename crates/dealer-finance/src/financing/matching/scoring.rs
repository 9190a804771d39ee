use super::super::domain::{CustomerProfile, LenderDefinition, LenderProgram, LoanRequest};
use super::config::{
    BASE_APPROVAL_PROBABILITY, BELOW_BANDS_ADJUSTMENT, CREDIT_BANDS, DEFAULT_BASE_RATE,
    DEFAULT_CUSTOMER_INCOME, DOWN_PAYMENT_BONUS_RATIO, DOWN_PAYMENT_PROBABILITY_BONUS,
    DOWN_PAYMENT_RATE_RELIEF, INCOME_BANDS, MAX_APPROVAL_PROBABILITY, MIN_APPROVAL_PROBABILITY,
    RATE_FLOOR,
};

pub(crate) struct ScoreSignals {
    /// Accumulated probability before clamping; feeds the match score.
    pub raw_probability: i32,
    pub approval_probability: u8,
    pub estimated_rate: f64,
}

pub(crate) fn score_lender(
    lender: &LenderDefinition,
    profile: &CustomerProfile,
    credit_score: u16,
    request: &LoanRequest,
) -> ScoreSignals {
    let mut probability = BASE_APPROVAL_PROBABILITY;
    let mut rate = lender.base_rate.unwrap_or(DEFAULT_BASE_RATE);

    let (credit_delta, rate_delta) = CREDIT_BANDS
        .iter()
        .find(|(minimum, _, _)| credit_score >= *minimum)
        .map(|(_, probability_delta, rate_delta)| (*probability_delta, *rate_delta))
        .unwrap_or(BELOW_BANDS_ADJUSTMENT);
    probability += credit_delta;
    rate += rate_delta;

    let income = profile.income.unwrap_or(DEFAULT_CUSTOMER_INCOME);
    probability += INCOME_BANDS
        .iter()
        .find(|(threshold, _)| income > *threshold)
        .map(|(_, delta)| *delta)
        .unwrap_or(0);

    if profile
        .down_payment
        .is_some_and(|down| down > request.loan_amount * DOWN_PAYMENT_BONUS_RATIO)
    {
        probability += DOWN_PAYMENT_PROBABILITY_BONUS;
        rate -= DOWN_PAYMENT_RATE_RELIEF;
    }

    let approval_probability =
        probability.clamp(MIN_APPROVAL_PROBABILITY, MAX_APPROVAL_PROBABILITY) as u8;

    ScoreSignals {
        raw_probability: probability,
        approval_probability,
        estimated_rate: rate.max(RATE_FLOOR),
    }
}

/// First program in catalog order accepting `credit_score`.
pub(crate) fn select_program(
    lender: &LenderDefinition,
    credit_score: u16,
) -> Option<&LenderProgram> {
    lender
        .programs
        .iter()
        .find(|program| program.accepts(credit_score))
}
