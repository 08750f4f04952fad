// Entity Models
//
// Each entity has:
// - Stable identity (UUID) that NEVER changes
// - Values that change only through explicit updates
// - A container for ordered storage and lookups

pub mod expense;

pub use expense::{Expense, ExpenseDatabase, ExpenseRecord, ExpenseUpdate};
