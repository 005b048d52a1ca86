use chrono::NaiveDate;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, NewExpense};
use crate::expenses::expenses_traits::ExpenseRepositoryTrait;
use crate::schema::expenses;
use crate::schema::expenses::dsl::*;

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ExpenseRepository { pool }
    }
}

impl ExpenseRepositoryTrait for ExpenseRepository {
    fn insert_new_expense(&self, mut new_expense: NewExpense) -> Result<Expense> {
        let mut conn = get_connection(&self.pool)?;

        new_expense.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(expenses::table)
            .values(&new_expense)
            .returning(expenses::all_columns)
            .get_result(&mut conn)?)
    }

    fn load_expenses(
        &self,
        user: &str,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = expenses.filter(user_id.eq(user)).into_boxed();
        if let Some((start, end)) = range {
            query = query
                .filter(expense_date.ge(start))
                .filter(expense_date.lt(end));
        }

        Ok(query.order(expense_date.desc()).load::<Expense>(&mut conn)?)
    }

    fn delete_expense(&self, user: &str, expense_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::delete(
            expenses
                .filter(id.eq(expense_id))
                .filter(user_id.eq(user)),
        )
        .execute(&mut conn)?)
    }
}
