//! Application constants module.
//!
//! Centralizes the constant strings used throughout the application:
//! collection names, role names, error messages, and success messages.

pub mod collections;
pub mod errors;
pub mod messages;
pub mod roles;

pub use collections::*;
pub use errors::*;
pub use messages::*;
pub use roles::*;
