use chrono::NaiveDate;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::income::income_model::{Income, NewIncome};
use crate::income::income_traits::IncomeRepositoryTrait;
use crate::schema::income;
use crate::schema::income::dsl::*;

pub struct IncomeRepository {
    pool: Arc<DbPool>,
}

impl IncomeRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        IncomeRepository { pool }
    }
}

impl IncomeRepositoryTrait for IncomeRepository {
    fn insert_new_income(&self, mut new_income: NewIncome) -> Result<Income> {
        let mut conn = get_connection(&self.pool)?;

        new_income.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(income::table)
            .values(&new_income)
            .returning(income::all_columns)
            .get_result(&mut conn)?)
    }

    fn load_incomes(
        &self,
        user: &str,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<Income>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = income.filter(user_id.eq(user)).into_boxed();
        if let Some((start, end)) = range {
            query = query
                .filter(income_date.ge(start))
                .filter(income_date.lt(end));
        }

        Ok(query.order(income_date.desc()).load::<Income>(&mut conn)?)
    }

    fn delete_income(&self, user: &str, income_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::delete(
            income
                .filter(id.eq(income_id))
                .filter(user_id.eq(user)),
        )
        .execute(&mut conn)?)
    }
}
