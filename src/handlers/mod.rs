//! HTTP request handlers organized by domain.

pub mod auth_handler;
pub mod cart_handler;
pub mod payment_handler;
pub mod product_handler;
pub mod user_handler;

pub use auth_handler::*;
pub use cart_handler::*;
pub use payment_handler::*;
pub use product_handler::*;
pub use user_handler::*;
