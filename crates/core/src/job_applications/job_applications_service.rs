use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::constants::APPLICATION_STATUSES;
use crate::errors::{Error, Result, ValidationError};
use crate::job_applications::job_applications_model::{
    JobApplication, JobApplicationChanges, JobApplicationCreate, JobApplicationPatch,
    JobApplicationSummary, NewJobApplication,
};
use crate::job_applications::job_applications_traits::{
    JobApplicationRepositoryTrait, JobApplicationServiceTrait,
};

pub struct JobApplicationService {
    application_repository: Arc<dyn JobApplicationRepositoryTrait>,
}

impl JobApplicationService {
    pub fn new(application_repository: Arc<dyn JobApplicationRepositoryTrait>) -> Self {
        JobApplicationService {
            application_repository,
        }
    }
}

fn validate_status(status: &str) -> Result<()> {
    if APPLICATION_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(ValidationError::InvalidInput(format!("Unknown status '{}'", status)).into())
    }
}

fn validate_salary_range(salary_min: Option<f64>, salary_max: Option<f64>) -> Result<()> {
    if let Some(min) = salary_min {
        if min < 0.0 {
            return Err(ValidationError::InvalidInput(
                "Salary must not be negative".to_string(),
            )
            .into());
        }
    }
    if let Some(max) = salary_max {
        if max < 0.0 {
            return Err(ValidationError::InvalidInput(
                "Salary must not be negative".to_string(),
            )
            .into());
        }
    }
    if let (Some(min), Some(max)) = (salary_min, salary_max) {
        if min >= max {
            return Err(ValidationError::InvalidInput(
                "Salary range minimum must be below the maximum".to_string(),
            )
            .into());
        }
    }
    Ok(())
}

/// Pipeline totals over the given rows, one bucket per status.
pub fn summarize_applications(applications: &[JobApplication]) -> JobApplicationSummary {
    let mut summary = JobApplicationSummary {
        total: applications.len(),
        ..Default::default()
    };
    for application in applications {
        match application.status.as_str() {
            "applied" => summary.applied += 1,
            "interviewing" => summary.interviewing += 1,
            "offer" => summary.offer += 1,
            "rejected" => summary.rejected += 1,
            "accepted" => summary.accepted += 1,
            _ => {}
        }
    }
    summary
}

#[async_trait]
impl JobApplicationServiceTrait for JobApplicationService {
    async fn create_application(
        &self,
        user_id: &str,
        input: JobApplicationCreate,
    ) -> Result<JobApplication> {
        if input.company.trim().is_empty() {
            return Err(ValidationError::MissingField("company".to_string()).into());
        }
        if input.position.trim().is_empty() {
            return Err(ValidationError::MissingField("position".to_string()).into());
        }
        validate_status(&input.status)?;
        validate_salary_range(input.salary_min, input.salary_max)?;

        debug!(
            "Creating application for '{}' at '{}'",
            input.position, input.company
        );

        self.application_repository
            .insert_new_application(NewJobApplication {
                id: None,
                user_id: user_id.to_string(),
                company: input.company.trim().to_string(),
                position: input.position.trim().to_string(),
                status: input.status,
                applied_date: input.applied_date,
                salary_min: input.salary_min,
                salary_max: input.salary_max,
                location: input.location,
                job_url: input.job_url,
                notes: input.notes,
                created_at: None,
                updated_at: None,
            })
    }

    fn get_applications(&self, user_id: &str) -> Result<Vec<JobApplication>> {
        self.application_repository.load_applications(user_id)
    }

    async fn update_application(
        &self,
        user_id: &str,
        application_id: &str,
        patch: JobApplicationPatch,
    ) -> Result<JobApplication> {
        let existing = self
            .application_repository
            .find_application(user_id, application_id)?;

        if let Some(company) = &patch.company {
            if company.trim().is_empty() {
                return Err(ValidationError::MissingField("company".to_string()).into());
            }
        }
        if let Some(position) = &patch.position {
            if position.trim().is_empty() {
                return Err(ValidationError::MissingField("position".to_string()).into());
            }
        }
        if let Some(status) = &patch.status {
            validate_status(status)?;
        }

        let salary_min = patch.salary_min.or(existing.salary_min);
        let salary_max = patch.salary_max.or(existing.salary_max);
        validate_salary_range(salary_min, salary_max)?;

        self.application_repository.update_application(
            user_id,
            application_id,
            JobApplicationChanges {
                company: patch.company.map(|c| c.trim().to_string()),
                position: patch.position.map(|p| p.trim().to_string()),
                status: patch.status,
                applied_date: patch.applied_date,
                salary_min: patch.salary_min,
                salary_max: patch.salary_max,
                location: patch.location,
                job_url: patch.job_url,
                notes: patch.notes,
                updated_at: Some(Utc::now().naive_utc()),
            },
        )
    }

    async fn delete_application(&self, user_id: &str, application_id: &str) -> Result<()> {
        let affected = self
            .application_repository
            .delete_application(user_id, application_id)?;
        if affected == 0 {
            return Err(Error::NotFound("job application".to_string()));
        }
        Ok(())
    }

    fn status_counts(&self, user_id: &str) -> Result<JobApplicationSummary> {
        let applications = self.application_repository.load_applications(user_id)?;
        Ok(summarize_applications(&applications))
    }
}
