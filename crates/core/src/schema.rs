diesel::table! {
    income (id) {
        id -> Text,
        user_id -> Text,
        source -> Text,
        amount -> Double,
        income_date -> Date,
        category -> Text,
        description -> Nullable<Text>,
        is_recurring -> Bool,
        is_hourly -> Bool,
        hourly_rate -> Nullable<Double>,
        hours_worked -> Nullable<Double>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    expenses (id) {
        id -> Text,
        user_id -> Text,
        category -> Text,
        amount -> Double,
        expense_date -> Date,
        description -> Nullable<Text>,
        merchant -> Nullable<Text>,
        is_recurring -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    budgets (id) {
        id -> Text,
        user_id -> Text,
        category -> Text,
        monthly_limit -> Double,
        start_date -> Date,
        end_date -> Nullable<Date>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    planned_expenses (id) {
        id -> Text,
        user_id -> Text,
        title -> Text,
        category -> Text,
        amount -> Double,
        planned_date -> Date,
        description -> Nullable<Text>,
        is_paid -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    savings_goals (id) {
        id -> Text,
        user_id -> Text,
        goal_name -> Text,
        target_amount -> Double,
        current_amount -> Double,
        target_date -> Nullable<Date>,
        description -> Nullable<Text>,
        allocation_type -> Text,
        allocation_value -> Double,
        frequency -> Text,
        color -> Text,
        priority -> Integer,
        is_active -> Bool,
        is_completed -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    job_applications (id) {
        id -> Text,
        user_id -> Text,
        company -> Text,
        position -> Text,
        status -> Text,
        applied_date -> Date,
        salary_min -> Nullable<Double>,
        salary_max -> Nullable<Double>,
        location -> Nullable<Text>,
        job_url -> Nullable<Text>,
        notes -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    income,
    expenses,
    budgets,
    planned_expenses,
    savings_goals,
    job_applications,
);
