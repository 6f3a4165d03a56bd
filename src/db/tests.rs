#![allow(clippy::unwrap_used)]

use super::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::models::{Period, TransactionType};

fn make_txn(id: &str, description: &str) -> Transaction {
    Transaction {
        id: id.into(),
        kind: TransactionType::Expense,
        amount: dec!(120.50),
        category: "food".into(),
        description: description.into(),
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        notes: Some("team lunch".into()),
        created_at: "2024-06-01T12:00:00Z".into(),
    }
}

// ── Default data ──────────────────────────────────────────────

#[test]
fn test_default_goals_seeded() {
    let db = Database::open_in_memory().unwrap();
    let goals = db.get_goals().unwrap();
    assert_eq!(goals.len(), 5);
    assert!(goals.iter().any(|g| g.category == "Food & Dining"));
}

#[test]
fn test_default_goals_not_reseeded() {
    let mut db = Database::open_in_memory().unwrap();
    db.save_goals(&[]).unwrap();
    db.seed_default_goals().unwrap();
    assert!(db.get_goals().unwrap().is_empty());
}

#[test]
fn test_no_transactions_initially() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.get_transactions().unwrap().is_empty());
    assert_eq!(db.get_transaction_count().unwrap(), 0);
}

// ── Raw key-value access ──────────────────────────────────────

#[test]
fn test_raw_put_overwrites() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.get_raw("theme").unwrap().is_none());
    db.put_raw("theme", "dark").unwrap();
    db.put_raw("theme", "light").unwrap();
    assert_eq!(db.get_raw("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn test_corrupt_value_is_an_error() {
    let db = Database::open_in_memory().unwrap();
    db.put_raw("transactions", "{not json").unwrap();
    assert!(db.get_transactions().is_err());
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_append_preserves_order() {
    let mut db = Database::open_in_memory().unwrap();
    db.append_transaction(&make_txn("a", "First")).unwrap();
    db.append_transaction(&make_txn("b", "Second")).unwrap();
    db.append_transaction(&make_txn("c", "Third")).unwrap();

    let all = db.get_transactions().unwrap();
    let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(all[0], make_txn("a", "First"));
}

#[test]
fn test_transactions_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("budgetai.db");
    {
        let mut db = Database::open(&path).unwrap();
        db.append_transaction(&make_txn("a", "Lunch")).unwrap();
    }
    let mut db = Database::open(&path).unwrap();
    db.append_transaction(&make_txn("b", "Dinner")).unwrap();
    let all = db.get_transactions().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].description, "Dinner");
    assert_eq!(all[0].notes.as_deref(), Some("team lunch"));
}

// ── Budget goals ──────────────────────────────────────────────

#[test]
fn test_goals_roundtrip_through_store() {
    let db = Database::open_in_memory().unwrap();
    let mut goals = db.get_goals().unwrap();
    goals[0].budget_amount = dec!(9999.99);
    goals[0].period = Period::Yearly;
    db.save_goals(&goals).unwrap();

    let reloaded = db.get_goals().unwrap();
    assert_eq!(reloaded, goals);
}

#[test]
fn test_schema_version_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("budgetai.db");
    drop(Database::open(&path).unwrap());
    let db = Database::open(&path).unwrap();
    let version: i32 = db
        .conn
        .query_row("SELECT version FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, schema::CURRENT_VERSION);
}

// ── Submissions ───────────────────────────────────────────────

#[test]
fn test_record_submission_writes_log_and_goals() {
    let mut db = Database::open_in_memory().unwrap();
    let mut goals = db.get_goals().unwrap();
    goals[0].current_spent = dec!(123);

    db.record_submission(&make_txn("a", "Lunch"), Some(&goals)).unwrap();

    assert_eq!(db.get_transaction_count().unwrap(), 1);
    assert_eq!(db.get_goals().unwrap(), goals);
}

#[test]
fn test_record_submission_rolls_back_when_goals_fail() {
    let mut db = Database::open_in_memory().unwrap();
    db.append_transaction(&make_txn("a", "Lunch")).unwrap();
    let before = db.get_goals().unwrap();
    db.block_writes_to(schema::GOALS_KEY).unwrap();

    let mut goals = before.clone();
    goals[0].current_spent = dec!(123);
    assert!(db.record_submission(&make_txn("b", "Dinner"), Some(&goals)).is_err());

    let ids: Vec<String> = db.get_transactions().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["a"]);
    assert_eq!(db.get_goals().unwrap(), before);
}
