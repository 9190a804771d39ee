use crate::demo::{
    run_classify, run_demo, run_match, run_payment, ClassifyArgs, DemoArgs, MatchArgs,
    PaymentArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dealer_finance::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Dealer Finance Desk",
    about = "Match customers to lenders, classify credit, and quote payments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank catalog lenders for one customer and loan request
    Match(MatchArgs),
    /// Classify a credit score into a tier with baseline odds and rate
    Classify(ClassifyArgs),
    /// Quote an amortized monthly payment
    Payment(PaymentArgs),
    /// Walk sample customers through profiling, matching, and quoting
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Match(args) => run_match(args),
        Command::Classify(args) => run_classify(args),
        Command::Payment(args) => run_payment(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["dealer-finance-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn match_arguments_parse() {
        let cli = Cli::try_parse_from([
            "dealer-finance-api",
            "match",
            "--credit-score",
            "640",
            "--income",
            "32000",
            "--loan-amount",
            "25000",
            "--vehicle-year",
            "2020",
            "--vehicle-value",
            "28000",
            "--reference-year",
            "2024",
        ])
        .expect("parses");

        let Some(Command::Match(args)) = cli.command else {
            panic!("expected match command");
        };
        assert_eq!(args.credit_score, Some(640));
        assert_eq!(args.reference_year, Some(2024));
        assert!(!args.json);
    }

    #[test]
    fn payment_term_defaults_to_sixty_months() {
        let cli = Cli::try_parse_from([
            "dealer-finance-api",
            "payment",
            "--principal",
            "30000",
            "--rate",
            "6",
        ])
        .expect("parses");

        let Some(Command::Payment(args)) = cli.command else {
            panic!("expected payment command");
        };
        assert_eq!(args.term, 60);
        assert_eq!(args.down_payment, 0.0);
    }

    #[test]
    fn classify_requires_a_score() {
        assert!(Cli::try_parse_from(["dealer-finance-api", "classify"]).is_err());
    }
}
