use crate::errors::Result;
use crate::summary::summary_model::FinancialSummary;

/// Trait for summary service operations
pub trait SummaryServiceTrait: Send + Sync {
    /// `month` as `YYYY-MM`; `None` means the current month.
    fn get_summary(&self, user_id: &str, month: Option<&str>) -> Result<FinancialSummary>;
}
