//! Fixed demo datasets rendered by the dashboard and analytics views.

use rust_decimal::Decimal;

use crate::models::{
    BudgetGoal, CategoryInfo, CategoryTrend, ExpenseSlice, MonthlySummary, Period, WeeklySpend,
};

/// Month shown as "current" by the dashboard.
pub(crate) const CURRENT_MONTH_LABEL: &str = "June 2024";

pub(crate) fn monthly_trend() -> Vec<MonthlySummary> {
    [
        ("Jan", 65000, 45000, 20000),
        ("Feb", 68000, 48000, 20000),
        ("Mar", 62000, 44000, 18000),
        ("Apr", 70000, 52000, 18000),
        ("May", 72000, 49000, 23000),
        ("Jun", 75000, 51000, 24000),
    ]
    .into_iter()
    .map(|(month, income, expenses, savings)| MonthlySummary {
        month: month.to_string(),
        income: Decimal::from(income),
        expenses: Decimal::from(expenses),
        savings: Decimal::from(savings),
    })
    .collect()
}

pub(crate) fn expense_breakdown() -> Vec<ExpenseSlice> {
    [
        ("Food & Dining", 4500),
        ("Transportation", 2800),
        ("Entertainment", 1900),
        ("Shopping", 3200),
        ("Bills & Utilities", 5500),
        ("Healthcare", 1200),
    ]
    .into_iter()
    .map(|(name, value)| ExpenseSlice {
        name: name.to_string(),
        value: Decimal::from(value),
        color: CategoryInfo::color_for(name).to_string(),
    })
    .collect()
}

pub(crate) fn category_trends() -> Vec<CategoryTrend> {
    [
        ("Food", [4200, 4500, 3800, 4100, 4000, 4500]),
        ("Transport", [2800, 3200, 2500, 2900, 2700, 2800]),
        ("Shopping", [3500, 4200, 2800, 3800, 3200, 3200]),
        ("Bills", [5200, 5400, 5100, 5600, 5300, 5500]),
    ]
    .into_iter()
    .map(|(category, monthly)| CategoryTrend {
        category: category.to_string(),
        monthly: monthly.into_iter().map(Decimal::from).collect(),
    })
    .collect()
}

pub(crate) fn weekly_spending() -> Vec<WeeklySpend> {
    [12500, 14200, 11800, 13500]
        .into_iter()
        .enumerate()
        .map(|(i, amount)| WeeklySpend {
            week: format!("Week {}", i + 1),
            amount: Decimal::from(amount),
        })
        .collect()
}

/// Goals a fresh store starts with. Ids are generated so that they never
/// collide with goals added later.
pub(crate) fn initial_goals() -> Vec<BudgetGoal> {
    [
        ("Food & Dining", 4000, 4500),
        ("Transportation", 3000, 2800),
        ("Entertainment", 2000, 1900),
        ("Shopping", 2500, 3200),
        ("Bills & Utilities", 6000, 5500),
    ]
    .into_iter()
    .map(|(category, budget, spent)| BudgetGoal {
        id: uuid::Uuid::new_v4().to_string(),
        category: category.to_string(),
        budget_amount: Decimal::from(budget),
        current_spent: Decimal::from(spent),
        period: Period::Monthly,
        color: CategoryInfo::color_for(category).to_string(),
    })
    .collect()
}
