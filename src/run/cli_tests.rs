#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_parse_add_args_basic() {
    let draft = parse_add_args(&args(&["expense", "450", "food", "Lunch", "at", "work"])).unwrap();
    assert_eq!(draft.kind, TransactionType::Expense);
    assert_eq!(draft.amount, "450");
    assert_eq!(draft.category, "food");
    assert_eq!(draft.description, "Lunch at work");
    assert!(draft.date.is_empty());
    assert!(draft.notes.is_empty());
}

#[test]
fn test_parse_add_args_flags_and_label() {
    let draft = parse_add_args(&args(&[
        "income",
        "--date",
        "2024-06-01",
        "75000",
        "Salary",
        "Monthly",
        "salary",
        "--notes",
        "June pay",
    ]))
    .unwrap();
    assert_eq!(draft.kind, TransactionType::Income);
    assert_eq!(draft.category, "salary");
    assert_eq!(draft.description, "Monthly salary");
    assert_eq!(draft.date, "2024-06-01");
    assert_eq!(draft.notes, "June pay");
}

#[test]
fn test_parse_add_args_errors() {
    assert!(parse_add_args(&args(&["expense", "450", "food"])).is_err());
    assert!(parse_add_args(&args(&["transfer", "450", "food", "Lunch"])).is_err());
    assert!(parse_add_args(&args(&["expense", "450", "food", "Lunch", "--date"])).is_err());
}

#[test]
fn test_cli_add_rejects_invalid_amount() {
    let mut db = Database::open_in_memory().unwrap();
    let tracker = BudgetTracker::from_goals(db.get_goals().unwrap());
    let err = as_cli(
        &args(&["budgetai", "add", "expense", "0", "food", "Nothing"]),
        &mut db,
        tracker,
    )
    .unwrap_err();
    assert!(err.to_string().contains("greater than zero"));
    assert!(db.get_transactions().unwrap().is_empty());
}

#[test]
fn test_cli_budget_edit_unknown_id() {
    let mut db = Database::open_in_memory().unwrap();
    let tracker = BudgetTracker::from_goals(db.get_goals().unwrap());
    let err = as_cli(
        &args(&["budgetai", "budget", "edit", "missing", "Travel", "100"]),
        &mut db,
        tracker,
    )
    .unwrap_err();
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_shellexpand_home() {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    assert_eq!(shellexpand("~/report.csv"), format!("{home}/report.csv"));
    assert_eq!(shellexpand("report.csv"), "report.csv");
}

#[test]
fn test_cli_add_counts_against_goal_in_any_case() {
    let mut db = Database::open_in_memory().unwrap();
    db.save_goals(&[]).unwrap();
    let tracker = BudgetTracker::from_goals(db.get_goals().unwrap());
    as_cli(&args(&["budgetai", "budget", "add", "pets", "300"]), &mut db, tracker).unwrap();

    let tracker = BudgetTracker::from_goals(db.get_goals().unwrap());
    as_cli(
        &args(&["budgetai", "add", "expense", "40", "Pets", "Vet", "visit"]),
        &mut db,
        tracker,
    )
    .unwrap();

    let tracker = BudgetTracker::from_goals(db.get_goals().unwrap());
    assert_eq!(tracker.find_by_category("pets").unwrap().current_spent, dec!(40));
}

#[test]
fn test_cli_budget_add_rejects_huge_amount() {
    let mut db = Database::open_in_memory().unwrap();
    let before = db.get_goals().unwrap();
    let tracker = BudgetTracker::from_goals(before.clone());
    let err = as_cli(
        &args(&["budgetai", "budget", "add", "Food", "1000000000000000000000000000"]),
        &mut db,
        tracker,
    )
    .unwrap_err();
    assert!(err.to_string().contains("cannot exceed"));
    assert_eq!(db.get_goals().unwrap(), before);
}
