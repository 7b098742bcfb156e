use std::env;
use std::io;
use std::process::ExitCode;

use debt_payoff::csv::{read_debts, write_schedule};
use debt_payoff::{
    Amount, DebtBook, DebtId, MAX_MONTHS, PayoffMethod, calculate_payoff_schedule,
};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "usage: debt-payoff <debts.csv> <snowball|avalanche|custom> <monthly_payment> [debt ids...]";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let (Some(path), Some(method), Some(payment)) = (args.next(), args.next(), args.next()) else {
        error!("{USAGE}");
        return ExitCode::from(2);
    };
    let custom_order: Vec<DebtId> = args.collect();

    let method: PayoffMethod = match method.parse() {
        Ok(method) => method,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };
    let monthly_payment = match payment
        .parse::<f64>()
        .ok()
        .and_then(Amount::checked_from_float)
    {
        Some(value) => value,
        None => {
            error!(payment = %payment, "monthly payment must be a number within range");
            return ExitCode::from(2);
        }
    };

    if !path.ends_with(".csv") {
        warn!(path = %path, "input file seems to not be a csv file");
    }

    let rows = match read_debts(path) {
        Ok(rows) => rows,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let (debt_sender, debt_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in rows {
            match result {
                Ok(debt) => {
                    if debt_sender.send(debt).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    let mut book = DebtBook::new();
    book.load(ReceiverStream::new(debt_receiver)).await;

    let custom_order = (!custom_order.is_empty()).then_some(custom_order);
    if custom_order.is_some() && method != PayoffMethod::Custom {
        warn!(%method, "debt ids are only used by the custom method");
    }

    let plan = book.plan(method, monthly_payment, custom_order);
    if let Err(e) = plan.validate() {
        error!("no valid plan: {e}");
        return ExitCode::FAILURE;
    }

    let summary = book.summary();
    info!(
        debts = summary.count,
        total_balance = %summary.total_balance,
        minimum_payments = %summary.total_minimum_payments,
        weighted_rate = summary.weighted_interest_rate,
        method = %method,
        "planning payoff"
    );

    let schedule = calculate_payoff_schedule(&plan);
    if let Err(e) = write_schedule(&schedule, io::stdout().lock()) {
        error!("failed to write schedule: {e}");
        return ExitCode::FAILURE;
    }

    if schedule.is_complete(&plan.debts) {
        info!(
            months = schedule.total_months,
            years = schedule.years(),
            total_interest = %schedule.total_interest,
            total_payments = %schedule.total_payments,
            "debt free"
        );
    } else {
        warn!(
            months = MAX_MONTHS,
            total_interest = %schedule.total_interest,
            total_payments = %schedule.total_payments,
            "plan does not pay off every debt, minimum payments may not cover interest"
        );
    }

    ExitCode::SUCCESS
}
