//! Data models organized by domain.

pub mod cart;
pub mod claims;
pub mod payment;
pub mod product;
pub mod summaries;
pub mod user;

pub use cart::*;
pub use claims::*;
pub use payment::*;
pub use product::*;
pub use summaries::*;
pub use user::*;
