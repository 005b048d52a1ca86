use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::expenses::Expense;

#[derive(
    Queryable,
    Identifiable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::planned_expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PlannedExpense {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub planned_date: NaiveDate,
    pub description: Option<String>,
    pub is_paid: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::planned_expenses)]
#[serde(rename_all = "camelCase")]
pub struct NewPlannedExpense {
    pub id: Option<String>,
    pub user_id: String,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub planned_date: NaiveDate,
    pub description: Option<String>,
    pub is_paid: bool,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExpenseCreate {
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub planned_date: NaiveDate,
    pub description: Option<String>,
}

/// Outcome of submitting a planned expense. A date that is already due
/// short-circuits into a regular expense instead of a planned row.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExpenseOutcome {
    pub converted_to_expense: bool,
    pub planned_expense: Option<PlannedExpense>,
    pub expense: Option<Expense>,
}
