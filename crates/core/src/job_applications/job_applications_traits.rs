use async_trait::async_trait;

use crate::errors::Result;
use crate::job_applications::job_applications_model::{
    JobApplication, JobApplicationChanges, JobApplicationCreate, JobApplicationPatch,
    JobApplicationSummary, NewJobApplication,
};

/// Trait for job application repository operations
pub trait JobApplicationRepositoryTrait: Send + Sync {
    fn insert_new_application(&self, new_application: NewJobApplication) -> Result<JobApplication>;
    fn load_applications(&self, user_id: &str) -> Result<Vec<JobApplication>>;
    fn find_application(&self, user_id: &str, application_id: &str) -> Result<JobApplication>;
    fn update_application(
        &self,
        user_id: &str,
        application_id: &str,
        changes: JobApplicationChanges,
    ) -> Result<JobApplication>;
    fn delete_application(&self, user_id: &str, application_id: &str) -> Result<usize>;
}

/// Trait for job application service operations
#[async_trait]
pub trait JobApplicationServiceTrait: Send + Sync {
    async fn create_application(
        &self,
        user_id: &str,
        input: JobApplicationCreate,
    ) -> Result<JobApplication>;
    fn get_applications(&self, user_id: &str) -> Result<Vec<JobApplication>>;
    async fn update_application(
        &self,
        user_id: &str,
        application_id: &str,
        patch: JobApplicationPatch,
    ) -> Result<JobApplication>;
    async fn delete_application(&self, user_id: &str, application_id: &str) -> Result<()>;
    /// Per-status totals across the user's pipeline.
    fn status_counts(&self, user_id: &str) -> Result<JobApplicationSummary>;
}
