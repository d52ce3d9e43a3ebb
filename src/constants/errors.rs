//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_AUTH_REQUIRED: &str = "Authentication required";
pub const ERR_INVALID_AUTH_HEADER: &str = "Missing or invalid authorization header";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";

// Authorization errors
pub const ERR_ADMIN_REQUIRED: &str = "Forbidden: administrator role required";
pub const ERR_EMAIL_MISMATCH: &str = "Forbidden: you can only check your own admin status";

// Identifier errors
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";
pub const ERR_INVALID_PRODUCT_ID: &str = "Invalid product ID format";
pub const ERR_INVALID_CART_ID: &str = "Invalid cart entry ID format";

// Payment errors
pub const ERR_STRIPE_BAD_RESPONSE: &str = "Unexpected response from payment provider";
