/// Action every successful mutation redirects back to
pub const INDEX_ACTION: &str = "Index";

/// View data key holding model-state errors for a redisplayed form
pub const VIEW_DATA_ERRORS: &str = "errors";

/// View data key for the citizen select list, named after the complaint
/// foreign-key field it populates
pub const VIEW_DATA_CITIZEN_ID: &str = "citizen_id";

/// View data key echoing the active list filter back to the search box
pub const VIEW_DATA_SEARCH: &str = "search";
