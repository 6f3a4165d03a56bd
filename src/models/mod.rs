mod budget_goal;
mod category;
mod money;
mod summary;
mod transaction;

pub use budget_goal::{BudgetGoal, Period};
pub use category::CategoryInfo;
pub(crate) use money::format_amount;
pub use summary::{CategoryTrend, ExpenseSlice, MonthlySummary, WeeklySpend};
pub use transaction::{Transaction, TransactionType};

#[cfg(test)]
mod tests;
