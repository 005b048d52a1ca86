use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

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
#[diesel(table_name = crate::schema::income)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub user_id: String,
    pub source: String,
    pub amount: f64,
    pub income_date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
    pub is_recurring: bool,
    pub is_hourly: bool,
    pub hourly_rate: Option<f64>,
    pub hours_worked: Option<f64>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::income)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    pub id: Option<String>,
    pub user_id: String,
    pub source: String,
    pub amount: f64,
    pub income_date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
    pub is_recurring: bool,
    pub is_hourly: bool,
    pub hourly_rate: Option<f64>,
    pub hours_worked: Option<f64>,
    pub created_at: Option<NaiveDateTime>,
}

/// Income creation payload as submitted by the form. The stored amount is
/// derived from the hourly pair when `is_hourly` is set; the raw `amount`
/// field is ignored in that case.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IncomeCreate {
    pub source: String,
    pub amount: Option<f64>,
    pub income_date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub is_hourly: bool,
    pub hourly_rate: Option<f64>,
    pub hours_worked: Option<f64>,
}
