//! Budget module - category limits and the monthly spend tracker.

pub mod budgets_model;
pub mod budgets_repository;
pub mod budgets_service;
pub mod budgets_traits;


pub use budgets_model::*;
pub use budgets_repository::BudgetRepository;
pub use budgets_service::{compute_budget_progress, BudgetService};
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
