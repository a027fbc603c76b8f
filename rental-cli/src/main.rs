use std::path::PathBuf;

use clap::{ArgAction, Parser};
use rental_cli::app::{self, PlannerConfig};
use rental_cli::edits::FieldEdit;
use rental_cli::logging::init_logging;
use rental_cli::table::render_report;
use rental_core::TaxBasePolicy;
use tracing::debug;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Rental profitability planner.
///
/// Computes yearly rent, operating income, debt service, income tax and net
/// cash flow for each apartment of a building, plus building totals and
/// 5/10/15 year cash projections.
#[derive(Debug, Parser)]
#[command(name = "rental-planner", version, about)]
struct Cli {
    /// CSV file of apartments. Uses the default three-unit building when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// What the income tax is levied on: `gross` (annual rent) or
    /// `pre-debt` (cash flow after the loan, losses owe nothing).
    #[arg(short, long, default_value = "gross")]
    tax_base: TaxBasePolicy,

    /// Append a blank apartment with this name. Repeatable.
    #[arg(long, value_name = "NAME")]
    add: Vec<String>,

    /// Edit one field, e.g. `"Appartement 2.loan_monthly=200"`. Repeatable.
    #[arg(long, value_name = "APARTMENT.FIELD=VALUE")]
    set: Vec<FieldEdit>,

    /// Remove the apartment with this name. Repeatable.
    #[arg(long, value_name = "NAME")]
    remove: Vec<String>,

    /// Also write the report as CSV to this path.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for PlannerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            policy: cli.tax_base,
            add: cli.add,
            set: cli.set,
            remove: cli.remove,
            output: cli.output,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = PlannerConfig::from(cli);
    debug!(?config, "starting");

    let report = app::run(&config)?;
    print!("{}", render_report(&report));

    Ok(())
}
