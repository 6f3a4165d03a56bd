use anyhow::Result;
use chrono::Local;

use crate::analytics::{self, DashboardMetrics, TrendSummary};
use crate::db::Database;
use crate::ingest::TransactionForm;
use crate::models::*;
use crate::sample;
use crate::tracker::BudgetTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    AddTransaction,
    Analytics,
    Budgets,
    Advisor,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::AddTransaction,
            Self::Analytics,
            Self::Budgets,
            Self::Advisor,
        ]
    }

    pub(crate) fn next(&self) -> Self {
        let screens = Self::all();
        let idx = screens.iter().position(|s| s == self).unwrap_or(0);
        screens[(idx + 1) % screens.len()]
    }

    pub(crate) fn prev(&self) -> Self {
        let screens = Self::all();
        let idx = screens.iter().position(|s| s == self).unwrap_or(0);
        screens[(idx + screens.len() - 1) % screens.len()]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::AddTransaction => write!(f, "Add Transaction"),
            Self::Analytics => write!(f, "Analytics"),
            Self::Budgets => write!(f, "Budget Goals"),
            Self::Advisor => write!(f, "AI Advisor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    /// Typing into a text field of the transaction form.
    Insert,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Insert => write!(f, "INSERT"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Budget goals
    pub(crate) tracker: BudgetTracker,
    pub(crate) budget_index: usize,

    // Transactions
    pub(crate) form: TransactionForm,
    /// Recorded history, newest first.
    pub(crate) transactions: Vec<Transaction>,

    // Sample datasets
    pub(crate) monthly_trend: Vec<MonthlySummary>,
    pub(crate) expense_breakdown: Vec<ExpenseSlice>,
    pub(crate) category_trends: Vec<CategoryTrend>,
    pub(crate) weekly_spending: Vec<WeeklySpend>,
    pub(crate) metrics: DashboardMetrics,
    pub(crate) trend: TrendSummary,
}

impl App {
    pub(crate) fn new(tracker: BudgetTracker) -> Self {
        let monthly_trend = sample::monthly_trend();
        let expense_breakdown = sample::expense_breakdown();
        let metrics = analytics::dashboard_metrics(&monthly_trend, &expense_breakdown);
        let trend = analytics::trend_summary(&monthly_trend);

        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            tracker,
            budget_index: 0,

            form: TransactionForm::new(Local::now().date_naive()),
            transactions: Vec::new(),

            monthly_trend,
            expense_breakdown,
            category_trends: sample::category_trends(),
            weekly_spending: sample::weekly_spending(),
            metrics,
            trend,
        }
    }

    pub(crate) fn refresh_transactions(&mut self, db: &Database) -> Result<()> {
        let mut txns = db.get_transactions()?;
        txns.reverse();
        self.transactions = txns;
        Ok(())
    }

    pub(crate) fn selected_goal(&self) -> Option<&BudgetGoal> {
        self.tracker.goals().get(self.budget_index)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
