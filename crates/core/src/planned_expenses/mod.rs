//! Planned expense module - future obligations and the due-date roll-forward.

pub mod planned_expenses_model;
pub mod planned_expenses_repository;
pub mod planned_expenses_service;
pub mod planned_expenses_traits;


pub use planned_expenses_model::*;
pub use planned_expenses_repository::PlannedExpenseRepository;
pub use planned_expenses_service::PlannedExpenseService;
pub use planned_expenses_traits::{PlannedExpenseRepositoryTrait, PlannedExpenseServiceTrait};
