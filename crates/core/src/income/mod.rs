//! Income module - records, repository, and the creation rules.

pub mod income_model;
pub mod income_repository;
pub mod income_service;
pub mod income_traits;

#[cfg(test)]
mod income_service_tests;

pub use income_model::*;
pub use income_repository::IncomeRepository;
pub use income_service::IncomeService;
pub use income_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
