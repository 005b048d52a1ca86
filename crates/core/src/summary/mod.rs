//! Summary module - the monthly and lifetime balance figures.

pub mod summary_model;
pub mod summary_service;
pub mod summary_traits;


pub use summary_model::*;
pub use summary_service::SummaryService;
pub use summary_traits::SummaryServiceTrait;
