//! Authorization guard middleware.
//!
//! Two composable checks: `RequireToken` proves identity from the bearer
//! token, `RequireAdmin` resolves the identity's current role from the user
//! directory. Splitting them lets most routes skip the directory read, and
//! lets the self-check route authenticate without requiring admin.

pub mod admin_middleware;
pub mod auth_middleware;
pub mod request_ext;

pub use admin_middleware::{RequireAdmin, RoleSource};
pub use auth_middleware::RequireToken;
pub use request_ext::RequestExt;
