mod form;

pub(crate) use form::{FormField, TransactionForm};

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::db::Database;
use crate::errors::TrackerError;
use crate::models::{Transaction, TransactionType};
use crate::tracker::{parse_amount, BudgetTracker, MAX_AMOUNT};

/// Raw form input for a transaction, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TransactionDraft {
    pub(crate) kind: TransactionType,
    pub(crate) amount: String,
    pub(crate) category: String,
    pub(crate) description: String,
    /// `YYYY-MM-DD`; empty means today.
    pub(crate) date: String,
    pub(crate) notes: String,
}

impl TransactionDraft {
    pub(crate) fn new(kind: TransactionType) -> Self {
        Self {
            kind,
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            date: String::new(),
            notes: String::new(),
        }
    }
}

/// Turn a draft into a storable record, or explain what is missing.
pub(crate) fn validate(draft: &TransactionDraft, today: NaiveDate) -> Result<Transaction, TrackerError> {
    let amount_str = draft.amount.trim();
    let category = draft.category.trim();
    let description = draft.description.trim();
    if amount_str.is_empty() || category.is_empty() || description.is_empty() {
        return Err(TrackerError::validation("Please fill in all required fields."));
    }

    let amount = parse_amount(amount_str)
        .ok_or_else(|| TrackerError::validation(format!("Invalid amount '{amount_str}'")))?;
    if amount <= Decimal::ZERO {
        return Err(TrackerError::validation("Amount must be greater than zero"));
    }
    if amount > MAX_AMOUNT {
        return Err(TrackerError::validation(format!("Amount cannot exceed {MAX_AMOUNT}")));
    }

    let date_str = draft.date.trim();
    let date = if date_str.is_empty() {
        today
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            TrackerError::validation(format!("Invalid date '{date_str}', expected YYYY-MM-DD"))
        })?
    };

    let notes = draft.notes.trim();
    Ok(Transaction {
        id: uuid::Uuid::new_v4().to_string(),
        kind: draft.kind,
        amount,
        category: category.to_string(),
        description: description.to_string(),
        date,
        notes: (!notes.is_empty()).then(|| notes.to_string()),
        created_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Validate, append to the persisted history and count expenses against the
/// matching budget goal. The log and the goal list are written together, and
/// `tracker` only changes once that write has committed. Validation failures
/// come back as [`TrackerError`] inside the `anyhow::Error` so callers can
/// tell them apart from storage faults.
pub(crate) fn submit(
    db: &mut Database,
    tracker: &mut BudgetTracker,
    draft: &TransactionDraft,
) -> Result<Transaction> {
    let today = chrono::Local::now().date_naive();
    let txn = validate(draft, today).inspect_err(|e| log::warn!("Rejected transaction: {e}"))?;

    let mut next = tracker.clone();
    let goal_changed = txn.is_expense() && next.record_expense(&txn.category, txn.amount).is_some();
    db.record_submission(&txn, goal_changed.then_some(next.goals()))?;
    *tracker = next;

    log::info!(
        "Recorded {} of {} in {} ({})",
        txn.kind,
        txn.amount,
        txn.category,
        txn.id
    );
    Ok(txn)
}
