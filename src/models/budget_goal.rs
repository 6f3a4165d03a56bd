use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Strict parse; unlike category lookup there is no fallback value.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" | "w" => Some(Self::Weekly),
            "monthly" | "month" | "m" => Some(Self::Monthly),
            "yearly" | "year" | "annual" | "y" => Some(Self::Yearly),
            _ => None,
        }
    }

    pub fn all() -> &'static [Period] {
        &[Self::Weekly, Self::Monthly, Self::Yearly]
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Weekly => Self::Monthly,
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Weekly,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetGoal {
    pub id: String,
    pub category: String,
    pub budget_amount: Decimal,
    pub current_spent: Decimal,
    pub period: Period,
    /// Hex display tag, e.g. `#ef4444`. Not used in any computation.
    pub color: String,
}

impl BudgetGoal {
    pub fn remaining(&self) -> Decimal {
        self.budget_amount - self.current_spent
    }
}
