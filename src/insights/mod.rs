//! Advice derived from budget classification, plus the fixed advisor tips.

use rust_decimal::Decimal;

use crate::models::{format_amount, BudgetGoal};
use crate::tracker::{aggregate, classify, BudgetStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsightKind {
    Alert,
    Progress,
    Tip,
    Growth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Insight {
    pub(crate) kind: InsightKind,
    pub(crate) priority: Priority,
    pub(crate) title: String,
    pub(crate) body: String,
}

impl Insight {
    fn new(kind: InsightKind, priority: Priority, title: &str, body: String) -> Self {
        Self {
            kind,
            priority,
            title: title.to_string(),
            body,
        }
    }
}

/// Evaluate the budget rules over `goals`. Alerts come first, then progress
/// notes, then one overall note.
pub(crate) fn budget_insights(goals: &[BudgetGoal]) -> Vec<Insight> {
    let mut alerts = Vec::new();
    let mut progress = Vec::new();

    for goal in goals {
        let c = classify(goal);
        match c.status {
            BudgetStatus::Exceeded => {
                let over = goal.current_spent - goal.budget_amount;
                alerts.push(Insight::new(
                    InsightKind::Alert,
                    Priority::High,
                    "Budget Alert",
                    format!(
                        "You've exceeded your {} budget by {}. Consider cutting back or raising the limit to {} based on your spending.",
                        goal.category,
                        format_amount(over),
                        format_amount(goal.current_spent),
                    ),
                ));
            }
            BudgetStatus::Warning => {
                alerts.push(Insight::new(
                    InsightKind::Alert,
                    Priority::Medium,
                    "Near Limit",
                    format!(
                        "{} is at {}% of its {} budget with {} left.",
                        goal.category,
                        c.ratio_percent.map(|r| r.round_dp(1)).unwrap_or_default(),
                        goal.period,
                        format_amount(goal.remaining()),
                    ),
                ));
            }
            BudgetStatus::Good if goal.current_spent > Decimal::ZERO => {
                progress.push(Insight::new(
                    InsightKind::Progress,
                    Priority::Low,
                    "Great Progress",
                    format!(
                        "You're doing well with {}! You're {} under budget. This amount could go to your emergency fund.",
                        goal.category,
                        format_amount(goal.remaining()),
                    ),
                ));
            }
            BudgetStatus::Good => {}
        }
    }

    let mut out = alerts;
    out.append(&mut progress);

    if !goals.is_empty() {
        let totals = aggregate(goals);
        let overall = match totals.status {
            BudgetStatus::Exceeded => Insight::new(
                InsightKind::Alert,
                Priority::High,
                "Overall Budget",
                format!(
                    "Total spending is {} over your combined budget of {}.",
                    format_amount(-totals.remaining),
                    format_amount(totals.total_budget),
                ),
            ),
            BudgetStatus::Warning => Insight::new(
                InsightKind::Alert,
                Priority::Medium,
                "Overall Budget",
                format!(
                    "{} of your combined budget is left. Slow down for the rest of the period.",
                    format_amount(totals.remaining),
                ),
            ),
            BudgetStatus::Good => Insight::new(
                InsightKind::Growth,
                Priority::Low,
                "Growth Opportunity",
                format!(
                    "You are within budget with {} to spare. Consider moving part of it into investments.",
                    format_amount(totals.remaining),
                ),
            ),
        };
        out.push(overall);
    }
    out
}

/// Fixed advisor recommendations.
pub(crate) fn advisor_tips() -> Vec<Insight> {
    vec![
        Insight::new(
            InsightKind::Tip,
            Priority::High,
            "Spending Pattern Analysis",
            "You spend 23% more on weekends. Planning meals and entertainment in advance could save ₹3,200 monthly.".into(),
        ),
        Insight::new(
            InsightKind::Growth,
            Priority::Medium,
            "Savings Optimization",
            "Increase your SIP by ₹5,000/month. With your current savings rate, you could build a ₹50L corpus in 10 years.".into(),
        ),
        Insight::new(
            InsightKind::Tip,
            Priority::Low,
            "Budget Rebalancing",
            "Consider reallocating ₹1,000 from shopping to healthcare budget based on your actual spending patterns.".into(),
        ),
    ]
}

pub(crate) const WEEKLY_TIP: &str = "The 50/30/20 Rule: Allocate 50% for needs, 30% for wants, and 20% for savings. You're currently at 68/20/12 - try reducing wants by 10% to boost savings!";

#[cfg(test)]
mod tests;
