#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

// ── Transaction ───────────────────────────────────────────────

fn make_txn(kind: TransactionType) -> Transaction {
    Transaction {
        id: "t-1".into(),
        kind,
        amount: dec!(250.00),
        category: "food".into(),
        description: "Coffee".into(),
        date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        notes: None,
        created_at: String::new(),
    }
}

#[test]
fn test_income_direction() {
    let txn = make_txn(TransactionType::Income);
    assert!(txn.is_income());
    assert!(!txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(250.00));
}

#[test]
fn test_expense_direction() {
    let txn = make_txn(TransactionType::Expense);
    assert!(txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(-250.00));
}

#[test]
fn test_transaction_type_parse() {
    assert_eq!(TransactionType::parse("income"), Some(TransactionType::Income));
    assert_eq!(TransactionType::parse("EXPENSE"), Some(TransactionType::Expense));
    assert_eq!(TransactionType::parse("transfer"), None);
    assert_eq!(TransactionType::Income.toggle(), TransactionType::Expense);
}

#[test]
fn test_transaction_json_shape() {
    let json = serde_json::to_value(make_txn(TransactionType::Expense)).unwrap();
    assert_eq!(json["type"], "expense");
    assert_eq!(json["date"], "2024-06-15");
    assert!(json.get("notes").is_none());
}

// ── Period ────────────────────────────────────────────────────

#[test]
fn test_period_parse() {
    assert_eq!(Period::parse("monthly"), Some(Period::Monthly));
    assert_eq!(Period::parse("Weekly"), Some(Period::Weekly));
    assert_eq!(Period::parse("yearly"), Some(Period::Yearly));
    assert_eq!(Period::parse("daily"), None);
    assert_eq!(Period::parse(""), None);
}

#[test]
fn test_period_roundtrip() {
    for p in Period::all() {
        assert_eq!(Period::parse(p.as_str()), Some(*p), "Roundtrip failed for {p}");
    }
}

#[test]
fn test_period_cycles() {
    assert_eq!(Period::Weekly.next(), Period::Monthly);
    assert_eq!(Period::Yearly.next(), Period::Weekly);
}

// ── Category catalog ──────────────────────────────────────────

#[test]
fn test_category_find_by_value_and_label() {
    assert_eq!(CategoryInfo::find("food").unwrap().label, "Food & Dining");
    assert_eq!(CategoryInfo::find("food & dining").unwrap().value, "food");
    assert_eq!(CategoryInfo::find("  Transport ").unwrap().label, "Transportation");
    assert!(CategoryInfo::find("Pets").is_none());
}

#[test]
fn test_category_fallbacks() {
    assert_eq!(CategoryInfo::label_for("Pets"), "Pets");
    assert_eq!(CategoryInfo::color_for("Pets"), category::DEFAULT_COLOR);
    assert_eq!(CategoryInfo::color_for("travel"), "#ec4899");
}

#[test]
fn test_income_categories() {
    let values: Vec<&str> = CategoryInfo::for_type(TransactionType::Income)
        .iter()
        .map(|c| c.value)
        .collect();
    assert_eq!(values, vec!["investment", "salary", "freelance", "other"]);
}

#[test]
fn test_expense_categories_exclude_income_only() {
    let values: Vec<&str> = CategoryInfo::for_type(TransactionType::Expense)
        .iter()
        .map(|c| c.value)
        .collect();
    assert_eq!(values.len(), 10);
    assert!(!values.contains(&"salary"));
    assert!(!values.contains(&"freelance"));
    assert!(values.contains(&"investment"));
    assert!(values.contains(&"other"));
}

#[test]
fn test_budget_categories() {
    let cats = CategoryInfo::budget_categories();
    assert_eq!(cats.len(), 8);
    assert_eq!(cats[0].value, "food");
    assert_eq!(cats[7].value, "travel");
}

#[test]
fn test_suggested_descriptions() {
    let food = CategoryInfo::find("food").unwrap();
    assert_eq!(food.suggested_descriptions().len(), 4);
    let other = CategoryInfo::find("other").unwrap();
    assert!(other.suggested_descriptions().is_empty());
}

// ── BudgetGoal ────────────────────────────────────────────────

#[test]
fn test_goal_remaining_can_go_negative() {
    let goal = BudgetGoal {
        id: "g".into(),
        category: "Shopping".into(),
        budget_amount: dec!(2500),
        current_spent: dec!(3200),
        period: Period::Monthly,
        color: "#22c55e".into(),
    };
    assert_eq!(goal.remaining(), dec!(-700));
}
