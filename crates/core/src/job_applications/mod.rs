//! Job application module - pipeline records and the per-status summary.

pub mod job_applications_model;
pub mod job_applications_repository;
pub mod job_applications_service;
pub mod job_applications_traits;


pub use job_applications_model::*;
pub use job_applications_repository::JobApplicationRepository;
pub use job_applications_service::JobApplicationService;
pub use job_applications_traits::{JobApplicationRepositoryTrait, JobApplicationServiceTrait};
