/// Value of the `all` query parameter that selects bulk deletion
pub const DELETE_ALL_FLAG: &str = "true";

// =============================================================================
// Response Messages
// =============================================================================

/// Message returned after a history record is stored
pub const MSG_INSERTED: &str = "Data inserted successfully";

/// Message returned after a single history record is deleted
pub const MSG_DELETED: &str = "Deleted";

// =============================================================================
// Error Messages
// =============================================================================

/// Single delete targeted an id with no matching row
pub const ERR_NOT_FOUND: &str = "Not found";

/// Bulk delete requested without a usable user id
pub const ERR_MISSING_USER_ID: &str = "Missing user_id";

/// Delete request matched neither the single nor the bulk mode
pub const ERR_NOTHING_TO_DELETE: &str = "Nothing to delete";

/// `id` query parameter is not an integer
pub const ERR_INVALID_ID: &str = "Invalid id";

/// `user_id` query parameter on the list endpoint is not an integer
pub const ERR_INVALID_USER_ID: &str = "Invalid user_id";
