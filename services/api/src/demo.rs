use crate::infra::{financing_service, with_overrides};
use chrono::Local;
use clap::Args;
use dealer_finance::config::AppConfig;
use dealer_finance::error::AppError;
use dealer_finance::financing::{
    classify, monthly_payment, CreditAssessment, CustomerProfile, FinancingService,
    FinancingServiceError, LoanRequest, MatchResult, PaymentQuote, PaymentRequest,
    ProfileAnalysis, ScreeningEntry,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Customer credit score; matching refuses to run without one
    #[arg(long)]
    pub(crate) credit_score: Option<u16>,
    /// Gross annual income
    #[arg(long)]
    pub(crate) income: Option<f64>,
    /// Cash down payment
    #[arg(long)]
    pub(crate) down_payment: Option<f64>,
    /// Amount to finance
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// Model year of the vehicle
    #[arg(long)]
    pub(crate) vehicle_year: i32,
    /// Vehicle value used for loan-to-value
    #[arg(long)]
    pub(crate) vehicle_value: f64,
    /// JSON or CSV lender catalog (defaults to FINANCING_CATALOG_PATH or the reference catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Year vehicle ages are measured against (defaults to the current year)
    #[arg(long)]
    pub(crate) reference_year: Option<i32>,
    /// Print the ranked matches as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Also list lenders that declined the request and why
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    #[arg(long)]
    pub(crate) credit_score: u16,
    #[arg(long)]
    pub(crate) income: Option<f64>,
    /// Debt-to-income ratio as a percentage
    #[arg(long)]
    pub(crate) debt_to_income: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct PaymentArgs {
    /// Vehicle price before down payment and trade
    #[arg(long)]
    pub(crate) principal: f64,
    #[arg(long, default_value_t = 0.0)]
    pub(crate) down_payment: f64,
    #[arg(long, default_value_t = 0.0)]
    pub(crate) trade_value: f64,
    /// Annual percentage rate
    #[arg(long)]
    pub(crate) rate: f64,
    /// Term in months
    #[arg(long, default_value_t = 60)]
    pub(crate) term: u32,
    /// Gross annual income for the payment-to-income ratio
    #[arg(long)]
    pub(crate) income: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// JSON or CSV lender catalog (defaults to FINANCING_CATALOG_PATH or the reference catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Year vehicle ages are measured against (defaults to the current year)
    #[arg(long)]
    pub(crate) reference_year: Option<i32>,
}

#[derive(Debug, Serialize)]
struct MatchReport<'a> {
    reference_year: i32,
    profile: &'a CustomerProfile,
    request: &'a LoanRequest,
    matches: &'a [MatchResult],
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs {
        credit_score,
        income,
        down_payment,
        loan_amount,
        vehicle_year,
        vehicle_value,
        catalog,
        reference_year,
        json,
        explain,
    } = args;

    let config = with_overrides(AppConfig::load()?.financing, catalog, reference_year);
    let service = financing_service(&config)?;

    let profile = CustomerProfile {
        credit_score,
        income,
        down_payment,
        ..CustomerProfile::default()
    };
    let request = LoanRequest {
        loan_amount,
        vehicle_year,
        vehicle_value,
    };

    let matches = service.match_lenders(&profile, &request)?;

    if json {
        let report = MatchReport {
            reference_year: service.matcher().reference_year(),
            profile: &profile,
            request: &request,
            matches: &matches,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Match report unavailable: {}", err),
        }
        return Ok(());
    }

    render_matches(&matches, service.matcher().config().quote_term_months);
    if explain {
        render_screening(&service.screen(&profile, &request)?);
    }
    Ok(())
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let assessment = classify(args.credit_score, args.income, args.debt_to_income);
    render_assessment(args.credit_score, &assessment);
    Ok(())
}

pub(crate) fn run_payment(args: PaymentArgs) -> Result<(), AppError> {
    let request = PaymentRequest {
        principal: args.principal,
        down_payment: args.down_payment,
        trade_value: args.trade_value,
        annual_rate_percent: args.rate,
        term_months: args.term,
        annual_income: args.income,
    };
    let quote = monthly_payment(&request).map_err(FinancingServiceError::from)?;
    render_quote(&request, &quote);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = with_overrides(
        AppConfig::load()?.financing,
        args.catalog,
        args.reference_year,
    );
    let service = financing_service(&config)?;

    println!("Dealer finance desk demo");
    println!(
        "Prepared {} | {} lenders | vehicle ages measured against {}",
        Local::now().format("%Y-%m-%d"),
        service.catalog().len(),
        service.matcher().reference_year()
    );

    let reference_year = service.matcher().reference_year();
    for (profile, request) in sample_customers(reference_year) {
        demo_customer(&service, &profile, &request)?;
    }

    Ok(())
}

fn demo_customer(
    service: &FinancingService,
    profile: &CustomerProfile,
    request: &LoanRequest,
) -> Result<(), AppError> {
    println!(
        "\n== {} | credit {} | income {:.0} | financing {:.0} on a {} vehicle",
        profile.display_name(),
        profile
            .credit_score
            .map(|score| score.to_string())
            .unwrap_or_else(|| "n/a".to_string()),
        profile.income.unwrap_or(0.0),
        request.loan_amount,
        request.vehicle_year
    );

    render_analysis(&service.analyze_profile(profile, None));

    let matches = service.match_lenders(profile, request)?;
    render_matches(&matches, service.matcher().config().quote_term_months);
    render_screening(&service.screen(profile, request)?);

    if let Some(top) = matches.first() {
        let term = top
            .best_program
            .as_ref()
            .and_then(|program| program.max_term)
            .or(top.lender.max_term)
            .unwrap_or(service.matcher().config().quote_term_months);
        let payment_request = PaymentRequest {
            principal: request.loan_amount + profile.down_payment.unwrap_or(0.0),
            down_payment: profile.down_payment.unwrap_or(0.0),
            trade_value: 0.0,
            annual_rate_percent: top.estimated_rate,
            term_months: term,
            annual_income: profile.income,
        };
        let quote = service.quote_payment(&payment_request)?;
        println!("  Top lender quote at the program's longest term:");
        render_quote(&payment_request, &quote);
    }

    Ok(())
}

fn sample_customers(reference_year: i32) -> Vec<(CustomerProfile, LoanRequest)> {
    vec![
        (
            CustomerProfile {
                first_name: "Marisol".to_string(),
                last_name: "Ortega".to_string(),
                email: "marisol.ortega@example.com".to_string(),
                income: Some(32_000.0),
                credit_score: Some(640),
                current_vehicle: Some("2011 Toyota Corolla".to_string()),
                ..CustomerProfile::default()
            },
            LoanRequest {
                loan_amount: 25_000.0,
                vehicle_year: reference_year - 4,
                vehicle_value: 28_000.0,
            },
        ),
        (
            CustomerProfile {
                first_name: "Theo".to_string(),
                last_name: "Banks".to_string(),
                email: "theo.banks@example.com".to_string(),
                income: Some(80_000.0),
                credit_score: Some(760),
                down_payment: Some(6_000.0),
                ..CustomerProfile::default()
            },
            LoanRequest {
                loan_amount: 25_000.0,
                vehicle_year: reference_year - 2,
                vehicle_value: 31_000.0,
            },
        ),
        (
            CustomerProfile {
                first_name: "Jordan".to_string(),
                last_name: "Lee".to_string(),
                email: "jordan.lee@example.com".to_string(),
                income: Some(24_000.0),
                credit_score: Some(580),
                trade_in_value: Some(1_500.0),
                ..CustomerProfile::default()
            },
            LoanRequest {
                loan_amount: 12_000.0,
                vehicle_year: reference_year - 8,
                vehicle_value: 10_500.0,
            },
        ),
    ]
}

fn render_analysis(analysis: &ProfileAnalysis) {
    println!(
        "  Profile: {} tier, {}% baseline approval, {:.1}% baseline rate",
        analysis.credit.tier.label(),
        analysis.credit.approval_probability,
        analysis.credit.estimated_rate
    );
    println!(
        "  Affordability: vehicles {:.0}-{:.0}, {:.0}/month capacity, {:.0} down suggested",
        analysis.recommended_vehicle_range.min,
        analysis.recommended_vehicle_range.max,
        analysis.monthly_payment_capacity,
        analysis.optimal_down_payment
    );
    println!(
        "  Suggested lenders: {}",
        analysis.lender_recommendations.join(", ")
    );
}

fn render_matches(matches: &[MatchResult], quote_term_months: u32) {
    if matches.is_empty() {
        println!("  No eligible lenders");
        return;
    }

    println!("  Ranked lenders (payments at {} months)", quote_term_months);
    for (position, result) in matches.iter().enumerate() {
        let program = result
            .best_program
            .as_ref()
            .map(|program| program.name.as_str())
            .unwrap_or("no matching program");
        let ltv_flag = if result.exceeds_max_ltv {
            " [LTV over limit]"
        } else {
            ""
        };
        println!(
            "  {}. {} ({}) score {} | approval {}% | rate {:.2}% | {:.2}/month | {}{}",
            position + 1,
            result.lender.name,
            result.lender.lender_type,
            result.match_score,
            result.approval_probability,
            result.estimated_rate,
            result.estimated_monthly_payment,
            program,
            ltv_flag
        );
    }
}

fn render_screening(entries: &[ScreeningEntry]) {
    let declined: Vec<&ScreeningEntry> = entries.iter().filter(|entry| !entry.eligible).collect();
    if declined.is_empty() {
        return;
    }

    println!("  Declined");
    for entry in declined {
        println!("    - {}: {}", entry.lender_name, entry.summary());
    }
}

fn render_assessment(credit_score: u16, assessment: &CreditAssessment) {
    println!("Credit score {}", credit_score);
    println!("  Tier: {}", assessment.tier.label());
    println!("  Approval probability: {}%", assessment.approval_probability);
    println!("  Estimated rate: {:.1}%", assessment.estimated_rate);
    println!("  Recommendations:");
    for note in &assessment.recommendations {
        println!("    - {}", note);
    }
}

fn render_quote(request: &PaymentRequest, quote: &PaymentQuote) {
    println!(
        "  Financed {:.2} at {:.2}% over {} months",
        quote.loan_amount, request.annual_rate_percent, request.term_months
    );
    println!("  Monthly payment: {:.2}", quote.monthly_payment);
    println!("  Total interest: {:.2}", quote.total_interest);
    println!("  Total cost: {:.2}", quote.total_cost);
    if let Some(ratio) = quote.payment_to_income_ratio {
        println!("  Payment-to-income: {:.2}%", ratio);
    }
}
