use serde::{Deserialize, Serialize};

/// Total spend in one category for the requested month.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryExpense {
    pub category: String,
    pub total: f64,
}

/// The figures backing the dashboard. Monthly numbers cover the requested
/// month; the overall and available balances span the whole ledger.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_balance: f64,
    pub overall_balance: f64,
    pub total_planned_expenses: f64,
    pub available_balance: f64,
    pub category_expenses: Vec<CategoryExpense>,
}
