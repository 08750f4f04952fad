// Expense Tracker - Core Library
// Exposes the entities and the clock for the demo binary and tests

pub mod temporal;
pub mod entities;

// Re-export commonly used types
pub use entities::{Expense, ExpenseDatabase, ExpenseRecord, ExpenseUpdate};
pub use temporal::{format_timestamp, now_utc, now_utc_string, TIMESTAMP_FORMAT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
