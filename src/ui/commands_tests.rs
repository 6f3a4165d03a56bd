#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::{App, Screen};
use super::commands::{handle_command, parse_goal_args, submit_form};
use crate::db::Database;
use crate::models::{Period, TransactionType};
use crate::tracker::BudgetTracker;

fn setup() -> (App, Database) {
    let db = Database::open_in_memory().unwrap();
    let app = App::new(BudgetTracker::from_goals(db.get_goals().unwrap()));
    (app, db)
}

// ── parse_goal_args ───────────────────────────────────────────

#[test]
fn test_parse_goal_args_with_period() {
    assert_eq!(
        parse_goal_args("Food & Dining 9000 yearly"),
        Some(("Food & Dining", "9000", Period::Yearly))
    );
}

#[test]
fn test_parse_goal_args_defaults_to_monthly() {
    assert_eq!(
        parse_goal_args("Travel 5000"),
        Some(("Travel", "5000", Period::Monthly))
    );
}

#[test]
fn test_parse_goal_args_needs_category_and_amount() {
    assert_eq!(parse_goal_args(""), None);
    assert_eq!(parse_goal_args("5000"), None);
    assert_eq!(parse_goal_args("monthly"), None);
}

// ── handle_command ────────────────────────────────────────────

#[test]
fn test_budget_command_adds_and_persists() {
    let (mut app, mut db) = setup();
    handle_command("budget travel 5000 weekly", &mut app, &mut db).unwrap();

    assert_eq!(app.screen, Screen::Budgets);
    let goals = db.get_goals().unwrap();
    assert_eq!(goals.len(), 6);
    let added = goals.last().unwrap();
    assert_eq!(added.category, "Travel");
    assert_eq!(added.budget_amount, dec!(5000));
    assert_eq!(added.period, Period::Weekly);
    assert_eq!(app.budget_index, 5);
}

#[test]
fn test_budget_command_reports_validation() {
    let (mut app, mut db) = setup();
    handle_command("budget Travel -5", &mut app, &mut db).unwrap();
    assert!(app.status_message.contains("negative"));
    assert_eq!(db.get_goals().unwrap().len(), 5);
}

#[test]
fn test_edit_command_updates_selected_goal() {
    let (mut app, mut db) = setup();
    app.budget_index = 1;
    let before = app.selected_goal().unwrap().clone();

    handle_command("edit Shopping 12000", &mut app, &mut db).unwrap();

    let after = &db.get_goals().unwrap()[1];
    assert_eq!(after.id, before.id);
    assert_eq!(after.category, "Shopping");
    assert_eq!(after.budget_amount, dec!(12000));
    assert_eq!(after.current_spent, before.current_spent);
}

#[test]
fn test_unknown_command_suggests() {
    let (mut app, mut db) = setup();
    handle_command("expor", &mut app, &mut db).unwrap();
    assert!(app.status_message.contains(":export"));
}

#[test]
fn test_export_command_writes_file() {
    let (mut app, mut db) = setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    handle_command(&format!("export {}", path.display()), &mut app, &mut db).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("Month,Income,Expenses,Savings\nJan,"));
    assert!(app.status_message.contains("Exported 6 months"));
}

#[test]
fn test_quit_command() {
    let (mut app, mut db) = setup();
    handle_command("q", &mut app, &mut db).unwrap();
    assert!(!app.running);
}

// ── submit_form ───────────────────────────────────────────────

#[test]
fn test_submit_form_invalid_keeps_input() {
    let (mut app, mut db) = setup();
    app.form.amount = "250".into();

    submit_form(&mut app, &mut db).unwrap();

    assert_eq!(app.status_message, "Please fill in all required fields.");
    assert_eq!(app.form.amount, "250");
    assert!(db.get_transactions().unwrap().is_empty());
}

#[test]
fn test_submit_form_success_resets_and_refreshes() {
    let (mut app, mut db) = setup();
    app.form.set_kind(TransactionType::Expense);
    app.form.amount = "300".into();
    app.form.cycle_category(1);
    app.form.description = "Uber ride".into();

    submit_form(&mut app, &mut db).unwrap();

    assert!(app.status_message.starts_with("Transaction added successfully!"));
    assert!(app.form.amount.is_empty());
    assert!(app.form.category.is_none());
    assert_eq!(app.transactions.len(), 1);
    assert_eq!(app.transactions[0].description, "Uber ride");
}
