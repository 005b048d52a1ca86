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
#[diesel(table_name = crate::schema::job_applications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub user_id: String,
    pub company: String,
    pub position: String,
    pub status: String,
    pub applied_date: NaiveDate,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub location: Option<String>,
    pub job_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::job_applications)]
#[serde(rename_all = "camelCase")]
pub struct NewJobApplication {
    pub id: Option<String>,
    pub user_id: String,
    pub company: String,
    pub position: String,
    pub status: String,
    pub applied_date: NaiveDate,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub location: Option<String>,
    pub job_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationCreate {
    pub company: String,
    pub position: String,
    pub status: String,
    pub applied_date: NaiveDate,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub location: Option<String>,
    pub job_url: Option<String>,
    pub notes: Option<String>,
}

/// Partial update of an application's mutable fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationPatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub applied_date: Option<NaiveDate>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub location: Option<String>,
    pub job_url: Option<String>,
    pub notes: Option<String>,
}

/// Changeset applied by the repository; absent fields keep their value.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::job_applications)]
pub struct JobApplicationChanges {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub applied_date: Option<NaiveDate>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub location: Option<String>,
    pub job_url: Option<String>,
    pub notes: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Pipeline totals for the dashboard, one bucket per status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationSummary {
    pub applied: usize,
    pub interviewing: usize,
    pub offer: usize,
    pub rejected: usize,
    pub accepted: usize,
    pub total: usize,
}
