//! Savings module - goals, the contribution engine, and the aggregate view.

pub mod savings_model;
pub mod savings_repository;
pub mod savings_service;
pub mod savings_traits;

#[cfg(test)]
mod savings_service_tests;

pub use savings_model::*;
pub use savings_repository::SavingsGoalRepository;
pub use savings_service::SavingsGoalService;
pub use savings_traits::{SavingsGoalRepositoryTrait, SavingsGoalServiceTrait};
