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
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
    pub description: Option<String>,
    pub merchant: Option<String>,
    pub is_recurring: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub id: Option<String>,
    pub user_id: String,
    pub category: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
    pub description: Option<String>,
    pub merchant: Option<String>,
    pub is_recurring: bool,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCreate {
    pub category: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
    pub description: Option<String>,
    pub merchant: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
}
