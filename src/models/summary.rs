use rust_decimal::Decimal;

/// One row of the monthly income/expense/savings table.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSlice {
    pub name: String,
    pub value: Decimal,
    pub color: String,
}

/// Per-month spend for a category, ordered like the monthly table.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTrend {
    pub category: String,
    pub monthly: Vec<Decimal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySpend {
    pub week: String,
    pub amount: Decimal,
}
