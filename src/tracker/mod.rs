use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::TrackerError;
use crate::models::{BudgetGoal, CategoryInfo, Period};

/// Share of the limit (in percent) above which a goal is "near limit".
const WARNING_THRESHOLD_PERCENT: u32 = 80;

/// One trillion: the largest amount accepted for budgets and transactions.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Good,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Exceeded => "exceeded",
        }
    }

    /// Badge text shown next to a goal.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Good => "On Track",
            Self::Warning => "Near Limit",
            Self::Exceeded => "Over Budget",
        }
    }

    /// Place `spent` against `limit` using exact decimal comparison.
    fn of(spent: Decimal, limit: Decimal) -> Self {
        let threshold = Decimal::from(WARNING_THRESHOLD_PERCENT);
        if spent > limit {
            return Self::Exceeded;
        }
        let near = match (
            spent.checked_mul(Decimal::ONE_HUNDRED),
            limit.checked_mul(threshold),
        ) {
            (Some(s), Some(l)) => s > l,
            // Near `Decimal::MAX`: compare against the limit scaled down first
            _ => spent > limit / Decimal::ONE_HUNDRED * threshold,
        };
        if near {
            Self::Warning
        } else {
            Self::Good
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: BudgetStatus,
    /// `None` when the limit is zero but something was spent.
    pub ratio_percent: Option<Decimal>,
}

impl Classification {
    /// Ratio for progress bars: capped to `0..=100`, a missing ratio is full.
    pub fn bar_ratio(&self) -> f64 {
        use rust_decimal::prelude::ToPrimitive;
        match self.ratio_percent {
            Some(r) => (r.to_f64().unwrap_or(0.0) / 100.0).clamp(0.0, 1.0),
            None => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    pub remaining: Decimal,
    pub overall_ratio_percent: Option<Decimal>,
    pub status: BudgetStatus,
}

fn ratio_percent(spent: Decimal, limit: Decimal) -> Option<Decimal> {
    if limit.is_zero() {
        if spent.is_zero() {
            Some(Decimal::ZERO)
        } else {
            None
        }
    } else {
        spent
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(limit))
            .or_else(|| {
                spent
                    .checked_div(limit)
                    .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
            })
    }
}

/// Sums saturate at `Decimal::MAX` instead of overflowing.
fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

pub fn classify(goal: &BudgetGoal) -> Classification {
    Classification {
        status: BudgetStatus::of(goal.current_spent, goal.budget_amount),
        ratio_percent: ratio_percent(goal.current_spent, goal.budget_amount),
    }
}

pub fn aggregate(goals: &[BudgetGoal]) -> Totals {
    let total_budget = saturating_sum(goals.iter().map(|g| g.budget_amount));
    let total_spent = saturating_sum(goals.iter().map(|g| g.current_spent));
    Totals {
        total_budget,
        total_spent,
        remaining: total_budget.saturating_sub(total_spent),
        overall_ratio_percent: ratio_percent(total_spent, total_budget),
        status: BudgetStatus::of(total_spent, total_budget),
    }
}

/// Parse a user-entered amount, tolerating currency symbols and thousands separators.
pub(crate) fn parse_amount(input: &str) -> Option<Decimal> {
    let cleaned = input.trim().replace(['₹', '$', ','], "");
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned.trim()).ok()
}

/// Owns the budget goals. Goals can be added and edited but not removed.
#[derive(Debug, Clone, Default)]
pub struct BudgetTracker {
    goals: Vec<BudgetGoal>,
}

impl BudgetTracker {
    pub fn from_goals(goals: Vec<BudgetGoal>) -> Self {
        Self { goals }
    }

    #[cfg(test)]
    pub fn seeded() -> Self {
        Self::from_goals(crate::sample::initial_goals())
    }

    pub fn goals(&self) -> &[BudgetGoal] {
        &self.goals
    }

    pub fn get(&self, id: &str) -> Option<&BudgetGoal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Goal tracking `category`, given as a catalog value or label in any case.
    pub fn find_by_category(&self, category: &str) -> Option<&BudgetGoal> {
        let idx = self.category_index(category)?;
        Some(&self.goals[idx])
    }

    fn category_index(&self, category: &str) -> Option<usize> {
        let label = CategoryInfo::label_for(category).to_lowercase();
        self.goals
            .iter()
            .position(|g| g.category.to_lowercase() == label)
    }

    pub fn totals(&self) -> Totals {
        aggregate(&self.goals)
    }

    pub fn add_goal(
        &mut self,
        category: &str,
        budget_amount: &str,
        period: Period,
    ) -> Result<BudgetGoal, TrackerError> {
        let (label, amount) = validate_goal_input(category, budget_amount)?;
        let goal = BudgetGoal {
            id: uuid::Uuid::new_v4().to_string(),
            color: CategoryInfo::color_for(&label).to_string(),
            category: label,
            budget_amount: amount,
            current_spent: Decimal::ZERO,
            period,
        };
        log::info!(
            "Added budget goal {} for {} ({} {})",
            goal.id,
            goal.category,
            goal.budget_amount,
            goal.period
        );
        self.goals.push(goal.clone());
        Ok(goal)
    }

    pub fn update_goal(
        &mut self,
        id: &str,
        category: &str,
        budget_amount: &str,
        period: Period,
    ) -> Result<BudgetGoal, TrackerError> {
        let idx = self
            .goals
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| TrackerError::not_found(format!("No budget goal with id '{id}'")))?;
        let (label, amount) = validate_goal_input(category, budget_amount)?;

        let goal = &mut self.goals[idx];
        goal.color = CategoryInfo::color_for(&label).to_string();
        goal.category = label;
        goal.budget_amount = amount;
        goal.period = period;
        log::info!("Updated budget goal {} ({})", goal.id, goal.category);
        Ok(goal.clone())
    }

    /// Add an expense to the goal tracking `category`, if there is one.
    pub fn record_expense(&mut self, category: &str, amount: Decimal) -> Option<&BudgetGoal> {
        let idx = self.category_index(category)?;
        let goal = &mut self.goals[idx];
        goal.current_spent = goal.current_spent.saturating_add(amount.abs());
        log::debug!(
            "Recorded {} against {}, now {}",
            amount,
            goal.category,
            goal.current_spent
        );
        Some(&*goal)
    }
}

fn validate_goal_input(category: &str, budget_amount: &str) -> Result<(String, Decimal), TrackerError> {
    if category.trim().is_empty() {
        return Err(TrackerError::validation("Please select a category"));
    }
    if budget_amount.trim().is_empty() {
        return Err(TrackerError::validation("Please enter a budget amount"));
    }
    let amount = parse_amount(budget_amount).ok_or_else(|| {
        TrackerError::validation(format!("Invalid budget amount '{}'", budget_amount.trim()))
    })?;
    if amount < Decimal::ZERO {
        return Err(TrackerError::validation("Budget amount cannot be negative"));
    }
    if amount > MAX_AMOUNT {
        return Err(TrackerError::validation(format!(
            "Budget amount cannot exceed {MAX_AMOUNT}"
        )));
    }
    Ok((CategoryInfo::label_for(category), amount))
}
