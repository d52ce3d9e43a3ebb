//! MongoDB collection names.

pub const COLLECTION_USERS: &str = "users";
pub const COLLECTION_PRODUCTS: &str = "product";
pub const COLLECTION_CARTS: &str = "cart";
pub const COLLECTION_PAYMENTS: &str = "payments";
