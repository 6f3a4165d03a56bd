use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{ExpenseSlice, MonthlySummary, Transaction, WeeklySpend};

/// Figures shown on the dashboard cards for the current month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DashboardMetrics {
    pub(crate) total_income: Decimal,
    pub(crate) total_expenses: Decimal,
    pub(crate) total_savings: Decimal,
    /// Savings as a share of income, one decimal place. `None` without income.
    pub(crate) savings_rate_percent: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrendSummary {
    pub(crate) total_income: Decimal,
    pub(crate) total_expenses: Decimal,
    pub(crate) avg_monthly_savings: Decimal,
    pub(crate) avg_savings_rate_percent: Option<Decimal>,
    /// First month to last month income change.
    pub(crate) income_growth_percent: Option<Decimal>,
}

fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return None;
    }
    Some(
        (part * Decimal::ONE_HUNDRED / whole)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
    )
}

/// Current month income is the last month of the trend; expenses come from
/// the category breakdown.
pub(crate) fn dashboard_metrics(trend: &[MonthlySummary], breakdown: &[ExpenseSlice]) -> DashboardMetrics {
    let total_income = trend.last().map(|m| m.income).unwrap_or_default();
    let total_expenses: Decimal = breakdown.iter().map(|s| s.value).sum();
    let total_savings = total_income - total_expenses;
    DashboardMetrics {
        total_income,
        total_expenses,
        total_savings,
        savings_rate_percent: percent_of(total_savings, total_income),
    }
}

pub(crate) fn trend_summary(trend: &[MonthlySummary]) -> TrendSummary {
    let total_income: Decimal = trend.iter().map(|m| m.income).sum();
    let total_expenses: Decimal = trend.iter().map(|m| m.expenses).sum();
    let total_savings: Decimal = trend.iter().map(|m| m.savings).sum();
    let avg_monthly_savings = if trend.is_empty() {
        Decimal::ZERO
    } else {
        total_savings / Decimal::from(trend.len())
    };
    let income_growth_percent = match (trend.first(), trend.last()) {
        (Some(first), Some(last)) if trend.len() > 1 => {
            percent_of(last.income - first.income, first.income)
        }
        _ => None,
    };
    TrendSummary {
        total_income,
        total_expenses,
        avg_monthly_savings,
        avg_savings_rate_percent: percent_of(total_savings, total_income),
        income_growth_percent,
    }
}

pub(crate) fn peak_week(weeks: &[WeeklySpend]) -> Option<&WeeklySpend> {
    weeks.iter().max_by_key(|w| w.amount)
}

/// Income and expense totals (both positive) over recorded transactions.
pub(crate) fn ledger_totals(txns: &[Transaction]) -> (Decimal, Decimal) {
    txns.iter().fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), t| {
        if t.is_income() {
            (inc + t.amount, exp)
        } else {
            (inc, exp + t.amount)
        }
    })
}
