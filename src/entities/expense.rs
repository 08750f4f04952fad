// 💸 Expense Entity - a named amount with stable identity
//
// "Title and amount are VALUES (can change), the UUID is IDENTITY (never changes)"
//
// - Identity: UUID v4 generated on construction
// - Values: title, amount (changed only through `update`)
// - Time: created_at is fixed, updated_at moves on every applied update
//
// ExpenseDatabase owns the expenses in insertion order and answers
// exact-match lookups by id or title.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::temporal::{format_timestamp, now_utc};

// ============================================================================
// EXPENSE UPDATE
// ============================================================================

/// Change set for `Expense::update`
///
/// `None` means "not supplied". Empty titles and zero amounts are real values
/// and get applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub title: Option<String>,
    pub amount: Option<f64>,
}

impl ExpenseUpdate {
    /// Empty change set
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the amount
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.amount.is_none()
    }
}

// ============================================================================
// EXPENSE RECORD
// ============================================================================

/// Plain exported form of an Expense
///
/// Field order is the serialization order:
/// id, title, amount, created_at, updated_at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub created_at: String,
    pub updated_at: String,
}

// ============================================================================
// EXPENSE ENTITY
// ============================================================================

/// A single expense
///
/// Fields are private so that every mutation goes through `update` and
/// `updated_at` can't drift from the values it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Stable identity (UUID) - NEVER changes
    id: String,

    /// Human readable label, not unique
    title: String,

    /// No currency, no sign constraint
    amount: f64,

    created_at: DateTime<Utc>,

    /// Equals created_at until the first applied update
    updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create new expense with a fresh UUID
    pub fn new(title: impl Into<String>, amount: f64) -> Self {
        let now = now_utc();

        Expense {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            amount,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply a change set
    ///
    /// An empty change set is a no-op and leaves `updated_at` alone. Otherwise
    /// the supplied fields are replaced and `updated_at` is bumped, even when
    /// the new values equal the old ones. Returns whether anything was applied.
    pub fn update(&mut self, changes: ExpenseUpdate) -> bool {
        if changes.is_empty() {
            return false;
        }

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(amount) = changes.amount {
            self.amount = amount;
        }

        self.updated_at = now_utc();

        tracing::debug!(
            expense_id = %self.id,
            title = %self.title,
            amount = self.amount,
            "expense updated"
        );

        true
    }

    /// Replace only the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.update(ExpenseUpdate::new().title(title));
    }

    /// Replace only the amount
    pub fn set_amount(&mut self, amount: f64) {
        self.update(ExpenseUpdate::new().amount(amount));
    }

    /// Snapshot of the current values
    pub fn to_dict(&self) -> ExpenseRecord {
        ExpenseRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            amount: self.amount,
            created_at: format_timestamp(&self.created_at),
            updated_at: format_timestamp(&self.updated_at),
        }
    }
}

// ============================================================================
// EXPENSE DATABASE
// ============================================================================

/// In-memory collection of expenses
///
/// Keeps insertion order. Titles may repeat; ids are unique because every
/// Expense generates its own UUID. Lookups are linear scans.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDatabase {
    expenses: Vec<Expense>,
}

impl ExpenseDatabase {
    /// Create new empty database
    pub fn new() -> Self {
        ExpenseDatabase {
            expenses: Vec::new(),
        }
    }

    /// Append an expense (no duplicate check)
    pub fn add_expense(&mut self, expense: Expense) {
        tracing::debug!(expense_id = %expense.id, title = %expense.title, "expense added");
        self.expenses.push(expense);
    }

    /// Remove the first expense with this id
    ///
    /// Scans the whole list. Unknown ids are ignored and yield `None`.
    pub fn remove_expense(&mut self, expense_id: &str) -> Option<Expense> {
        let position = self.expenses.iter().position(|e| e.id == expense_id)?;
        let removed = self.expenses.remove(position);

        tracing::debug!(expense_id = %removed.id, "expense removed");

        Some(removed)
    }

    /// Find expense by UUID (first match in insertion order)
    pub fn get_expense_by_id(&self, expense_id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == expense_id)
    }

    /// Live handle to an expense, borrowed from the database
    pub fn get_expense_by_id_mut(&mut self, expense_id: &str) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == expense_id)
    }

    /// Find expense by title (exact, case-sensitive; earliest inserted wins)
    pub fn get_expense_by_title(&self, expense_title: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.title == expense_title)
    }

    pub fn get_expense_by_title_mut(&mut self, expense_title: &str) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.title == expense_title)
    }

    /// Exported form of every expense, in insertion order
    pub fn to_dict(&self) -> Vec<ExpenseRecord> {
        self.expenses.iter().map(Expense::to_dict).collect()
    }

    /// Exported records as a pretty-printed JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_dict())
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Expense> {
        self.expenses.iter_mut()
    }
}

impl FromIterator<Expense> for ExpenseDatabase {
    fn from_iter<I: IntoIterator<Item = Expense>>(iter: I) -> Self {
        let mut database = ExpenseDatabase::new();
        database.extend(iter);
        database
    }
}

impl Extend<Expense> for ExpenseDatabase {
    fn extend<I: IntoIterator<Item = Expense>>(&mut self, iter: I) {
        for expense in iter {
            self.add_expense(expense);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
