use super::TransactionType;

pub const DEFAULT_COLOR: &str = "#6b7280";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { value: "food", label: "Food & Dining", color: "#ef4444" },
    CategoryInfo { value: "transport", label: "Transportation", color: "#f97316" },
    CategoryInfo { value: "entertainment", label: "Entertainment", color: "#eab308" },
    CategoryInfo { value: "shopping", label: "Shopping", color: "#22c55e" },
    CategoryInfo { value: "bills", label: "Bills & Utilities", color: "#3b82f6" },
    CategoryInfo { value: "healthcare", label: "Healthcare", color: "#8b5cf6" },
    CategoryInfo { value: "education", label: "Education", color: "#06b6d4" },
    CategoryInfo { value: "travel", label: "Travel", color: "#ec4899" },
    CategoryInfo { value: "investment", label: "Investment", color: "#8b5cf6" },
    CategoryInfo { value: "salary", label: "Salary", color: "#22c55e" },
    CategoryInfo { value: "freelance", label: "Freelance", color: "#10b981" },
    CategoryInfo { value: "other", label: "Other", color: "#6b7280" },
];

/// Number of leading catalog entries that can carry a budget goal.
const BUDGET_CATEGORY_COUNT: usize = 8;

const INCOME_CATEGORIES: &[&str] = &["salary", "freelance", "investment", "other"];
const INCOME_ONLY: &[&str] = &["salary", "freelance"];

impl CategoryInfo {
    /// Find a catalog entry by value key or label (case-insensitive).
    pub fn find(name: &str) -> Option<&'static CategoryInfo> {
        let lower = name.trim().to_lowercase();
        CATEGORIES
            .iter()
            .find(|c| c.value == lower || c.label.to_lowercase() == lower)
    }

    /// Display label for a category name, falling back to the name itself.
    pub fn label_for(name: &str) -> String {
        Self::find(name)
            .map(|c| c.label.to_string())
            .unwrap_or_else(|| name.trim().to_string())
    }

    pub fn color_for(name: &str) -> &'static str {
        Self::find(name).map(|c| c.color).unwrap_or(DEFAULT_COLOR)
    }

    pub fn budget_categories() -> &'static [CategoryInfo] {
        &CATEGORIES[..BUDGET_CATEGORY_COUNT]
    }

    /// Categories offered by the transaction form for the given type.
    pub fn for_type(kind: TransactionType) -> Vec<&'static CategoryInfo> {
        CATEGORIES
            .iter()
            .filter(|c| match kind {
                TransactionType::Income => INCOME_CATEGORIES.contains(&c.value),
                TransactionType::Expense => !INCOME_ONLY.contains(&c.value),
            })
            .collect()
    }

    pub fn suggested_descriptions(&self) -> &'static [&'static str] {
        match self.value {
            "food" => &["Lunch at restaurant", "Grocery shopping", "Coffee", "Dinner out"],
            "transport" => &["Uber ride", "Metro card recharge", "Fuel", "Bus ticket"],
            "entertainment" => &["Movie tickets", "Concert", "Gaming", "Streaming subscription"],
            "shopping" => &["Clothes", "Electronics", "Books", "Home items"],
            "bills" => &["Electricity bill", "Internet bill", "Phone bill", "Rent"],
            "healthcare" => &["Doctor consultation", "Medicines", "Health checkup", "Gym membership"],
            "salary" => &["Monthly salary", "Bonus", "Overtime pay"],
            "freelance" => &["Project payment", "Consulting fee", "Design work"],
            _ => &[],
        }
    }
}

impl std::fmt::Display for CategoryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
