use serde::{Deserialize, Serialize};

/// Inputs for a level-payment amortizing loan quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Vehicle price before down payment and trade.
    pub principal: f64,
    #[serde(default)]
    pub down_payment: f64,
    #[serde(default)]
    pub trade_value: f64,
    pub annual_rate_percent: f64,
    pub term_months: u32,
    /// Gross annual income, enabling the payment-to-income ratio.
    #[serde(default)]
    pub annual_income: Option<f64>,
}

/// Monthly payment breakdown, monetary values rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentQuote {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_to_income_ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentError {
    #[error("term must be at least one month")]
    ZeroTerm,
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("rate {annual_rate_percent}% over {term_months} months has no finite payment")]
    DegeneratePayment {
        annual_rate_percent: f64,
        term_months: u32,
    },
}

/// Compute the amortized monthly payment for `request`.
///
/// A zero rate divides the loan evenly across the term. A loan amount at or below zero
/// (down payment and trade covering the price) yields a zero payment and no interest;
/// the negative loan amount is still reported so callers can surface it.
pub fn monthly_payment(request: &PaymentRequest) -> Result<PaymentQuote, PaymentError> {
    let checks = [
        ("principal", request.principal),
        ("down_payment", request.down_payment),
        ("trade_value", request.trade_value),
        ("annual_rate_percent", request.annual_rate_percent),
    ];
    if let Some((field, _)) = checks.iter().find(|(_, value)| !value.is_finite()) {
        return Err(PaymentError::NonFinite { field: *field });
    }
    if request.term_months == 0 {
        return Err(PaymentError::ZeroTerm);
    }

    let loan_amount = request.principal - request.down_payment - request.trade_value;
    let payment =
        amortized_payment(loan_amount, request.annual_rate_percent, request.term_months);
    if !payment.is_finite() {
        return Err(PaymentError::DegeneratePayment {
            annual_rate_percent: request.annual_rate_percent,
            term_months: request.term_months,
        });
    }
    let total_interest = if loan_amount > 0.0 {
        payment * f64::from(request.term_months) - loan_amount
    } else {
        0.0
    };
    let total_cost = request.principal + total_interest;

    let payment_to_income_ratio = request
        .annual_income
        .filter(|income| income.is_finite() && *income > 0.0)
        .map(|income| round_cents(payment * 12.0 / income * 100.0));

    Ok(PaymentQuote {
        loan_amount: round_cents(loan_amount),
        monthly_payment: round_cents(payment),
        total_interest: round_cents(total_interest),
        total_cost: round_cents(total_cost),
        payment_to_income_ratio,
    })
}

/// Unrounded level payment. `term_months` must be non-zero.
///
/// Compound growth is taken through `ln_1p`/`exp_m1` so rates too small to register
/// in `1 + r` still amortize; when the growth term underflows to zero the loan is
/// divided evenly. Monthly rates below -100% yield NaN.
pub(crate) fn amortized_payment(
    loan_amount: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> f64 {
    if loan_amount <= 0.0 {
        return 0.0;
    }

    let term = f64::from(term_months);
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let growth_minus_one = (term * monthly_rate.ln_1p()).exp_m1();
    if growth_minus_one == 0.0 {
        return loan_amount / term;
    }

    loan_amount * monthly_rate * (1.0 + growth_minus_one) / growth_minus_one
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(principal: f64, rate: f64, term_months: u32) -> PaymentRequest {
        PaymentRequest {
            principal,
            down_payment: 0.0,
            trade_value: 0.0,
            annual_rate_percent: rate,
            term_months,
            annual_income: None,
        }
    }

    #[test]
    fn standard_amortization_matches_reference_values() {
        let quote = monthly_payment(&PaymentRequest {
            down_payment: 5_000.0,
            ..request(30_000.0, 6.0, 60)
        })
        .expect("quote computes");

        assert_eq!(quote.loan_amount, 25_000.0);
        assert!((quote.monthly_payment - 483.32).abs() <= 0.01);
        assert!((quote.total_interest - 3_999.20).abs() <= 0.01);
        assert!((quote.total_cost - 33_999.20).abs() <= 0.01);
        assert!(quote.payment_to_income_ratio.is_none());
    }

    #[test]
    fn zero_rate_divides_evenly() {
        let quote = monthly_payment(&request(12_000.0, 0.0, 12)).expect("quote computes");
        assert_eq!(quote.monthly_payment, 1_000.0);
        assert_eq!(quote.total_interest, 0.0);
        assert_eq!(quote.total_cost, 12_000.0);
    }

    #[test]
    fn vanishing_rate_stays_finite() {
        let quote = monthly_payment(&PaymentRequest {
            annual_income: Some(60_000.0),
            ..request(12_000.0, 1e-14, 12)
        })
        .expect("quote computes");

        assert_eq!(quote.monthly_payment, 1_000.0);
        assert_eq!(quote.total_interest, 0.0);
        assert_eq!(quote.total_cost, 12_000.0);
        assert_eq!(quote.payment_to_income_ratio, Some(20.0));
    }

    #[test]
    fn rate_wiping_out_principal_is_rejected() {
        assert_eq!(
            monthly_payment(&request(12_000.0, -2_400.0, 12)),
            Err(PaymentError::DegeneratePayment {
                annual_rate_percent: -2_400.0,
                term_months: 12,
            })
        );
    }

    #[test]
    fn fully_covered_price_yields_zero_payment() {
        let quote = monthly_payment(&PaymentRequest {
            down_payment: 8_000.0,
            trade_value: 4_000.0,
            ..request(10_000.0, 7.5, 48)
        })
        .expect("quote computes");

        assert_eq!(quote.loan_amount, -2_000.0);
        assert_eq!(quote.monthly_payment, 0.0);
        assert_eq!(quote.total_interest, 0.0);
        assert_eq!(quote.total_cost, 10_000.0);
    }

    #[test]
    fn payment_to_income_requires_positive_income() {
        let with_income = monthly_payment(&PaymentRequest {
            annual_income: Some(60_000.0),
            ..request(12_000.0, 0.0, 12)
        })
        .expect("quote computes");
        assert_eq!(with_income.payment_to_income_ratio, Some(20.0));

        let zero_income = monthly_payment(&PaymentRequest {
            annual_income: Some(0.0),
            ..request(12_000.0, 0.0, 12)
        })
        .expect("quote computes");
        assert!(zero_income.payment_to_income_ratio.is_none());
    }

    #[test]
    fn rejects_zero_term_and_non_finite_inputs() {
        assert_eq!(
            monthly_payment(&request(12_000.0, 5.0, 0)),
            Err(PaymentError::ZeroTerm)
        );
        assert_eq!(
            monthly_payment(&request(12_000.0, f64::NAN, 12)),
            Err(PaymentError::NonFinite {
                field: "annual_rate_percent"
            })
        );
    }
}
