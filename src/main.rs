use anyhow::{bail, Context, Result};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use expense_tracker::{Expense, ExpenseDatabase, ExpenseRecord, ExpenseUpdate, VERSION};

const DISCOUNT_VAR: &str = "EXPENSE_DEMO_DISCOUNT";
const VERBOSE_VAR: &str = "EXPENSE_DEMO_VERBOSE";

/// Demo knobs, read from the environment
#[derive(Debug, Clone, PartialEq)]
struct DemoSettings {
    /// Fraction taken off every amount (0.1 = 10%)
    discount: f64,
    verbose: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        DemoSettings {
            discount: 0.1,
            verbose: false,
        }
    }
}

impl DemoSettings {
    fn from_env() -> Result<Self> {
        let mut settings = DemoSettings::default();

        if let Ok(raw) = env::var(DISCOUNT_VAR) {
            settings.discount = parse_discount(&raw)?;
        }
        if let Ok(raw) = env::var(VERBOSE_VAR) {
            settings.verbose = matches!(raw.trim(), "1" | "true" | "yes");
        }

        Ok(settings)
    }
}

fn parse_discount(raw: &str) -> Result<f64> {
    let discount: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{} must be a number, got {:?}", DISCOUNT_VAR, raw))?;

    if !(0.0..=1.0).contains(&discount) {
        bail!("{} must be between 0 and 1, got {}", DISCOUNT_VAR, discount);
    }

    Ok(discount)
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("expense_tracker=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("expense_tracker=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let settings = DemoSettings::from_env()?;
    init_logger(settings.verbose);

    tracing::info!(version = VERSION, discount = settings.discount, "starting expense demo");

    let mut database = ExpenseDatabase::new();
    database.add_expense(Expense::new("Altschool Tuition (Monthly)", 30.0));
    database.add_expense(Expense::new("Altschool Tuition (Quarterly)", 80.0));
    database.add_expense(Expense::new("Altschool Tuition (Annual)", 290.0));

    println!("Initial expenses:");
    let records = database.to_dict();
    print_records(&records)?;

    apply_discount(&mut database, &records, settings.discount);

    println!("After update:");
    print_records(&database.to_dict())?;

    tracing::info!(count = database.len(), "expense demo finished");

    Ok(())
}

/// Take `discount` off every listed expense through its live handle
fn apply_discount(database: &mut ExpenseDatabase, records: &[ExpenseRecord], discount: f64) {
    for record in records {
        let Some(expense) = database.get_expense_by_id_mut(&record.id) else {
            tracing::warn!(expense_id = %record.id, "expense vanished before discount");
            continue;
        };

        let discounted = expense.amount() - expense.amount() * discount;
        expense.update(ExpenseUpdate::new().amount(discounted));
    }
}

fn print_records(records: &[ExpenseRecord]) -> Result<()> {
    for record in records {
        let json = serde_json::to_string(record).context("failed to serialize expense record")?;
        println!("{}\n", json);
    }
    Ok(())
}
