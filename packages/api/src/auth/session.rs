//! Session constants shared by every server function.

/// Session key under which the authenticated user's id (UUID string) is
/// stored by register/login and read by every profile gateway call.
pub const SESSION_USER_ID_KEY: &str = "user_id";
