use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::income::income_model::{Income, IncomeCreate, NewIncome};

/// Trait for income repository operations
pub trait IncomeRepositoryTrait: Send + Sync {
    fn insert_new_income(&self, new_income: NewIncome) -> Result<Income>;
    fn load_incomes(
        &self,
        user_id: &str,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<Income>>;
    fn delete_income(&self, user_id: &str, income_id: &str) -> Result<usize>;
}

/// Trait for income service operations
#[async_trait]
pub trait IncomeServiceTrait: Send + Sync {
    async fn create_income(&self, user_id: &str, input: IncomeCreate) -> Result<Income>;
    fn get_incomes(&self, user_id: &str, month: Option<&str>) -> Result<Vec<Income>>;
    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<()>;
}
