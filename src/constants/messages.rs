//! Success and informational message constants.

pub const MSG_USER_EXISTS: &str = "user already exists";
pub const MSG_PAYMENT_PURGE_FAILED: &str =
    "payment recorded but cart purge failed; manual reconciliation required";
