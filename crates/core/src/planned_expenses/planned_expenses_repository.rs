use chrono::NaiveDate;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::errors::Result;
use crate::expenses::NewExpense;
use crate::planned_expenses::planned_expenses_model::{NewPlannedExpense, PlannedExpense};
use crate::planned_expenses::planned_expenses_traits::PlannedExpenseRepositoryTrait;
use crate::schema::expenses;
use crate::schema::planned_expenses;
use crate::schema::planned_expenses::dsl::*;

pub struct PlannedExpenseRepository {
    pool: Arc<DbPool>,
}

impl PlannedExpenseRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        PlannedExpenseRepository { pool }
    }
}

impl PlannedExpenseRepositoryTrait for PlannedExpenseRepository {
    fn insert_new_planned_expense(
        &self,
        mut new_planned_expense: NewPlannedExpense,
    ) -> Result<PlannedExpense> {
        let mut conn = get_connection(&self.pool)?;

        new_planned_expense.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(planned_expenses::table)
            .values(&new_planned_expense)
            .returning(planned_expenses::all_columns)
            .get_result(&mut conn)?)
    }

    fn load_due(&self, user: &str, as_of: NaiveDate) -> Result<Vec<PlannedExpense>> {
        let mut conn = get_connection(&self.pool)?;

        Ok(planned_expenses
            .filter(user_id.eq(user))
            .filter(planned_date.le(as_of))
            .order(planned_date.asc())
            .load::<PlannedExpense>(&mut conn)?)
    }

    fn load_upcoming(&self, user: &str, as_of: NaiveDate) -> Result<Vec<PlannedExpense>> {
        let mut conn = get_connection(&self.pool)?;

        Ok(planned_expenses
            .filter(user_id.eq(user))
            .filter(planned_date.gt(as_of))
            .order(planned_date.asc())
            .load::<PlannedExpense>(&mut conn)?)
    }

    fn convert_to_expense(
        &self,
        user: &str,
        planned_expense_id: &str,
        mut new_expense: NewExpense,
    ) -> Result<()> {
        new_expense.id = Some(Uuid::new_v4().to_string());

        // Delete-then-insert in one transaction so a row converts exactly
        // once: a concurrent conversion of the same id deletes zero rows and
        // rolls the insert back.
        self.pool
            .execute(|conn| -> std::result::Result<(), diesel::result::Error> {
                let deleted = diesel::delete(
                    planned_expenses
                        .filter(id.eq(planned_expense_id))
                        .filter(user_id.eq(user)),
                )
                .execute(conn)?;
                if deleted == 0 {
                    return Err(diesel::result::Error::NotFound);
                }

                diesel::insert_into(expenses::table)
                    .values(&new_expense)
                    .execute(conn)?;
                Ok(())
            })
    }

    fn delete_planned_expense(&self, user: &str, planned_expense_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::delete(
            planned_expenses
                .filter(id.eq(planned_expense_id))
                .filter(user_id.eq(user)),
        )
        .execute(&mut conn)?)
    }
}
