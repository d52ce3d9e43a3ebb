//! Services organized by domain concern.

pub mod cart_service;
pub mod catalog_service;
pub mod checkout_service;
pub mod token_service;
pub mod user_service;

pub use cart_service::CartService;
pub use catalog_service::CatalogService;
pub use checkout_service::CheckoutService;
pub use token_service::TokenService;
pub use user_service::UserService;
