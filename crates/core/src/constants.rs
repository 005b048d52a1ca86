/// Allocation types for savings goals
pub const ALLOCATION_TYPE_FIXED: &str = "fixed";
pub const ALLOCATION_TYPE_PERCENTAGE: &str = "percentage";

/// Contribution frequencies for savings goals
pub const FREQUENCY_MONTHLY: &str = "monthly";
pub const FREQUENCY_OVERALL: &str = "overall";

/// Budget usage percentage at which a category counts as near its limit
pub const BUDGET_NEAR_LIMIT_PERCENTAGE: f64 = 80.0;

/// Default swatch for savings goals created without a color
pub const DEFAULT_GOAL_COLOR: &str = "#10b981";

/// Job application statuses
pub const APPLICATION_STATUSES: [&str; 5] =
    ["applied", "interviewing", "offer", "rejected", "accepted"];
