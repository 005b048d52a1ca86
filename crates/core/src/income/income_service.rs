use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::errors::{Error, Result, ValidationError};
use crate::income::income_model::{Income, IncomeCreate, NewIncome};
use crate::income::income_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
use crate::utils::parse_month_param;

pub struct IncomeService {
    income_repository: Arc<dyn IncomeRepositoryTrait>,
}

impl IncomeService {
    pub fn new(income_repository: Arc<dyn IncomeRepositoryTrait>) -> Self {
        IncomeService { income_repository }
    }
}

/// Resolves the stored amount for an income submission, rejecting invalid
/// input. Hourly entries derive `hourly_rate * hours_worked` and ignore the
/// raw amount field entirely.
pub fn resolve_income_amount(input: &IncomeCreate) -> Result<f64> {
    if input.source.trim().is_empty() {
        return Err(ValidationError::MissingField("source".to_string()).into());
    }
    if input.category.trim().is_empty() {
        return Err(ValidationError::MissingField("category".to_string()).into());
    }

    if input.is_hourly {
        let rate = input
            .hourly_rate
            .ok_or_else(|| Error::from(ValidationError::MissingField("hourlyRate".to_string())))?;
        let hours = input.hours_worked.ok_or_else(|| {
            Error::from(ValidationError::MissingField("hoursWorked".to_string()))
        })?;
        if rate <= 0.0 || hours <= 0.0 {
            return Err(ValidationError::InvalidInput(
                "Hourly rate and hours worked must be positive".to_string(),
            )
            .into());
        }
        Ok(rate * hours)
    } else {
        let amount = input
            .amount
            .ok_or_else(|| Error::from(ValidationError::MissingField("amount".to_string())))?;
        if amount <= 0.0 {
            return Err(
                ValidationError::InvalidInput("Amount must be positive".to_string()).into(),
            );
        }
        Ok(amount)
    }
}

#[async_trait]
impl IncomeServiceTrait for IncomeService {
    async fn create_income(&self, user_id: &str, input: IncomeCreate) -> Result<Income> {
        let amount = resolve_income_amount(&input)?;
        debug!("Creating income '{}' of {}", input.source, amount);

        let new_income = NewIncome {
            id: None,
            user_id: user_id.to_string(),
            source: input.source.trim().to_string(),
            amount,
            income_date: input.income_date,
            category: input.category.trim().to_string(),
            description: input.description,
            is_recurring: input.is_recurring,
            is_hourly: input.is_hourly,
            hourly_rate: if input.is_hourly { input.hourly_rate } else { None },
            hours_worked: if input.is_hourly { input.hours_worked } else { None },
            created_at: None,
        };

        self.income_repository.insert_new_income(new_income)
    }

    fn get_incomes(&self, user_id: &str, month: Option<&str>) -> Result<Vec<Income>> {
        let range = month.map(parse_month_param).transpose()?;
        self.income_repository.load_incomes(user_id, range)
    }

    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<()> {
        let affected = self.income_repository.delete_income(user_id, income_id)?;
        if affected == 0 {
            return Err(Error::NotFound("income record".to_string()));
        }
        Ok(())
    }
}
