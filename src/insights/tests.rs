#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::models::Period;

fn make_goal(category: &str, budget: Decimal, spent: Decimal) -> BudgetGoal {
    BudgetGoal {
        id: category.to_lowercase(),
        category: category.into(),
        budget_amount: budget,
        current_spent: spent,
        period: Period::Monthly,
        color: String::new(),
    }
}

#[test]
fn test_no_goals_no_insights() {
    assert!(budget_insights(&[]).is_empty());
}

#[test]
fn test_exceeded_goal_raises_alert() {
    let insights = budget_insights(&[make_goal("Food & Dining", dec!(4000), dec!(4500))]);
    let alert = &insights[0];
    assert_eq!(alert.kind, InsightKind::Alert);
    assert_eq!(alert.priority, Priority::High);
    assert_eq!(alert.title, "Budget Alert");
    assert!(alert.body.contains("Food & Dining"));
    assert!(alert.body.contains("₹500.00"));
    assert!(alert.body.contains("₹4,500.00"));
}

#[test]
fn test_under_budget_goal_reports_progress() {
    let insights = budget_insights(&[make_goal("Transportation", dec!(3000), dec!(1000))]);
    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0].title, "Great Progress");
    assert!(insights[0].body.contains("₹2,000.00 under budget"));
    assert_eq!(insights[1].title, "Growth Opportunity");
}

#[test]
fn test_untouched_goal_is_quiet() {
    let insights = budget_insights(&[make_goal("Travel", dec!(3000), dec!(0))]);
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].kind, InsightKind::Growth);
}

#[test]
fn test_alerts_precede_progress() {
    let goals = vec![
        make_goal("Transportation", dec!(3000), dec!(1000)),
        make_goal("Entertainment", dec!(2000), dec!(1900)),
        make_goal("Shopping", dec!(2500), dec!(3200)),
    ];
    let titles: Vec<String> = budget_insights(&goals).into_iter().map(|i| i.title).collect();
    assert_eq!(
        titles,
        vec!["Near Limit", "Budget Alert", "Great Progress", "Overall Budget"]
    );
}

#[test]
fn test_seeded_goals_overall_exceeded() {
    let tracker = crate::tracker::BudgetTracker::seeded();
    let insights = budget_insights(tracker.goals());
    let overall = insights.last().unwrap();
    assert_eq!(overall.title, "Overall Budget");
    assert!(overall.body.contains("₹400.00 over"));
}

#[test]
fn test_advisor_tips_are_fixed() {
    let tips = advisor_tips();
    assert_eq!(tips.len(), 3);
    assert_eq!(tips[0].priority.as_str(), "high");
    assert_eq!(tips[2].title, "Budget Rebalancing");
}
