use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::job_applications::job_applications_model::{
    JobApplication, JobApplicationChanges, NewJobApplication,
};
use crate::job_applications::job_applications_traits::JobApplicationRepositoryTrait;
use crate::schema::job_applications;
use crate::schema::job_applications::dsl::*;

pub struct JobApplicationRepository {
    pool: Arc<DbPool>,
}

impl JobApplicationRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        JobApplicationRepository { pool }
    }
}

impl JobApplicationRepositoryTrait for JobApplicationRepository {
    fn insert_new_application(
        &self,
        mut new_application: NewJobApplication,
    ) -> Result<JobApplication> {
        let mut conn = get_connection(&self.pool)?;

        new_application.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(job_applications::table)
            .values(&new_application)
            .returning(job_applications::all_columns)
            .get_result(&mut conn)?)
    }

    fn load_applications(&self, user: &str) -> Result<Vec<JobApplication>> {
        let mut conn = get_connection(&self.pool)?;

        Ok(job_applications
            .filter(user_id.eq(user))
            .order(applied_date.desc())
            .load::<JobApplication>(&mut conn)?)
    }

    fn find_application(&self, user: &str, application_id: &str) -> Result<JobApplication> {
        let mut conn = get_connection(&self.pool)?;

        job_applications
            .filter(id.eq(application_id))
            .filter(user_id.eq(user))
            .first::<JobApplication>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound("job application".to_string()))
    }

    fn update_application(
        &self,
        user: &str,
        application_id: &str,
        changes: JobApplicationChanges,
    ) -> Result<JobApplication> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            job_applications
                .filter(id.eq(application_id))
                .filter(user_id.eq(user)),
        )
        .set(&changes)
        .execute(&mut conn)?;
        if affected == 0 {
            return Err(Error::NotFound("job application".to_string()));
        }

        Ok(job_applications
            .filter(id.eq(application_id))
            .first::<JobApplication>(&mut conn)?)
    }

    fn delete_application(&self, user: &str, application_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::delete(
            job_applications
                .filter(id.eq(application_id))
                .filter(user_id.eq(user)),
        )
        .execute(&mut conn)?)
    }
}
