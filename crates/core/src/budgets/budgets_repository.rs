use chrono::NaiveDate;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::budgets::budgets_model::{Budget, NewBudget};
use crate::budgets::budgets_traits::BudgetRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::budgets;
use crate::schema::budgets::dsl::*;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        BudgetRepository { pool }
    }
}

impl BudgetRepositoryTrait for BudgetRepository {
    fn insert_new_budget(&self, mut new_budget: NewBudget) -> Result<Budget> {
        let mut conn = get_connection(&self.pool)?;

        new_budget.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(budgets::table)
            .values(&new_budget)
            .returning(budgets::all_columns)
            .get_result(&mut conn)?)
    }

    fn load_budgets(&self, user: &str) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;

        Ok(budgets
            .filter(user_id.eq(user))
            .order(start_date.desc())
            .load::<Budget>(&mut conn)?)
    }

    fn load_active_budgets(
        &self,
        user: &str,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;

        Ok(budgets
            .filter(user_id.eq(user))
            .filter(start_date.lt(period_end))
            .filter(end_date.is_null().or(end_date.ge(period_start)))
            .order(category.asc())
            .load::<Budget>(&mut conn)?)
    }

    fn delete_budget(&self, user: &str, budget_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::delete(
            budgets
                .filter(id.eq(budget_id))
                .filter(user_id.eq(user)),
        )
        .execute(&mut conn)?)
    }
}
