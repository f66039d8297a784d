//! Billfold console demo.
//!
//! Breaks an amount into bills, walks a person through getting paid and
//! spending, then shows the flight capability.
//!
//! Usage: billfold [AMOUNT] [POLICY_TAG]

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use billfold_core::Person;
use billfold_core::breakdown::{BreakdownError, BreakdownService};
use billfold_core::flight::{Bird, Flyer, Plane, describe};
use billfold_shared::{AppConfig, AppError, AppResult, Bill};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "billfold=info,billfold_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "demo failed");
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Exit status for a failed run: the `AppError` code when there is one.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<AppError>().map_or(1, AppError::exit_code)
}

fn run(args: impl IntoIterator<Item = String>) -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;

    let mut args = args.into_iter();
    let amount = match args.next() {
        Some(raw) => parse_amount(&raw)?,
        None => config.breakdown.default_amount,
    };
    let tag = args
        .next()
        .unwrap_or_else(|| config.breakdown.default_policy.clone());
    info!(amount, policy = %tag, "starting demo");

    println!("== Breakdown of {amount} ({tag})");
    let breakdown = BreakdownService::compute_for_tag(amount, &tag);
    for (bill, count) in breakdown.iter().filter(|(_, count)| *count > 0) {
        println!("  {:>4} x {count}", bill.to_string());
    }
    println!("  total {} in {} bills", breakdown.total(), breakdown.bill_count());
    println!();

    run_wallet_demo(&config, amount, &tag)?;
    run_flight_demo();

    Ok(())
}

fn parse_amount(raw: &str) -> AppResult<u64> {
    let signed: i64 = raw
        .parse()
        .map_err(|_| AppError::Validation(format!("amount must be a whole number, got {raw:?}")))?;
    let amount =
        u64::try_from(signed).map_err(|_| AppError::from(BreakdownError::InvalidAmount(signed)))?;
    Ok(amount)
}

fn run_wallet_demo(config: &AppConfig, amount: u64, tag: &str) -> anyhow::Result<()> {
    let mut person = Person::from_config(&config.person);
    println!("== {}", person.full_name());
    println!("{person}");
    println!();

    if let Some(wallet) = person.wallet_mut() {
        wallet.insert_bill(Bill::Five, 3).map_err(AppError::from)?;
        wallet.insert_bill(Bill::Hundred, 2).map_err(AppError::from)?;
    }
    println!("{person}");
    println!();

    if !person.set_denomination_preference(tag) {
        println!("Unknown preference {tag:?}, keeping {}", person.preference());
    }
    let paid = person.get_paid(amount).map_err(AppError::from)?;
    println!("Got paid {amount}: {paid}");

    match person.spend_money(amount) {
        Ok(spent) => println!("Spent {amount}: {spent}"),
        Err(err) => println!("Could not spend {amount}: {err}"),
    }
    println!("Current Money - {}", person.cash());
    println!();
    Ok(())
}

fn run_flight_demo() {
    println!("== Flight");
    let flyers: [Box<dyn Flyer>; 2] = [Box::new(Bird), Box::new(Plane)];
    for flyer in &flyers {
        for line in describe(flyer.as_ref()) {
            println!("{line}");
        }
    }
}
