//! Repositories encapsulating all MongoDB access, one per collection.

pub mod cart_repository;
pub mod payment_repository;
pub mod product_repository;
pub mod traits;
pub mod user_repository;

pub use cart_repository::CartRepository;
pub use payment_repository::PaymentRepository;
pub use product_repository::ProductRepository;
pub use traits::{CartPurge, PaymentStore};
pub use user_repository::UserRepository;
