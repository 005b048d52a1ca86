use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::savings::savings_model::{NewSavingsGoal, SavingsGoal, SavingsGoalChanges};
use crate::savings::savings_traits::SavingsGoalRepositoryTrait;
use crate::schema::savings_goals;
use crate::schema::savings_goals::dsl::*;

pub struct SavingsGoalRepository {
    pool: Arc<DbPool>,
}

impl SavingsGoalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SavingsGoalRepository { pool }
    }
}

impl SavingsGoalRepositoryTrait for SavingsGoalRepository {
    fn load_goals(&self, user: &str) -> Result<Vec<SavingsGoal>> {
        let mut conn = get_connection(&self.pool)?;

        Ok(savings_goals
            .filter(user_id.eq(user))
            .order((priority.desc(), created_at.asc()))
            .load::<SavingsGoal>(&mut conn)?)
    }

    fn load_active_goals(&self, user: &str) -> Result<Vec<SavingsGoal>> {
        let mut conn = get_connection(&self.pool)?;

        Ok(savings_goals
            .filter(user_id.eq(user))
            .filter(is_active.eq(true))
            .order(priority.desc())
            .load::<SavingsGoal>(&mut conn)?)
    }

    fn find_goal(&self, user: &str, goal_id: &str) -> Result<SavingsGoal> {
        let mut conn = get_connection(&self.pool)?;

        savings_goals
            .filter(id.eq(goal_id))
            .filter(user_id.eq(user))
            .first::<SavingsGoal>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound("savings goal".to_string()))
    }

    fn insert_new_goal(&self, mut new_goal: NewSavingsGoal) -> Result<SavingsGoal> {
        let mut conn = get_connection(&self.pool)?;

        new_goal.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(savings_goals::table)
            .values(&new_goal)
            .returning(savings_goals::all_columns)
            .get_result(&mut conn)?)
    }

    fn update_goal(
        &self,
        user: &str,
        goal_id: &str,
        changes: SavingsGoalChanges,
    ) -> Result<SavingsGoal> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            savings_goals
                .filter(id.eq(goal_id))
                .filter(user_id.eq(user)),
        )
        .set(&changes)
        .execute(&mut conn)?;
        if affected == 0 {
            return Err(Error::NotFound("savings goal".to_string()));
        }

        Ok(savings_goals
            .filter(id.eq(goal_id))
            .first::<SavingsGoal>(&mut conn)?)
    }

    fn set_progress(
        &self,
        user: &str,
        goal_id: &str,
        current: f64,
        completed: bool,
        updated: NaiveDateTime,
    ) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::update(
            savings_goals
                .filter(id.eq(goal_id))
                .filter(user_id.eq(user)),
        )
        .set((
            current_amount.eq(current),
            is_completed.eq(completed),
            updated_at.eq(updated),
        ))
        .execute(&mut conn)?)
    }

    fn set_active(
        &self,
        user: &str,
        goal_id: &str,
        active: bool,
        updated: NaiveDateTime,
    ) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::update(
            savings_goals
                .filter(id.eq(goal_id))
                .filter(user_id.eq(user)),
        )
        .set((is_active.eq(active), updated_at.eq(updated)))
        .execute(&mut conn)?)
    }

    fn delete_goal(&self, user: &str, goal_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::delete(
            savings_goals
                .filter(id.eq(goal_id))
                .filter(user_id.eq(user)),
        )
        .execute(&mut conn)?)
    }
}
