//! JWT claims and token issuance payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// JWT claims. Deliberately minimal: the token proves possession of a
/// previously asserted identifier and nothing more. Role is never embedded;
/// authorization always re-resolves it from the user directory.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Email identifier asserted at issuance
    pub email: String,
    /// Expiration timestamp (Unix epoch seconds)
    pub exp: usize,
    /// Issued-at timestamp (Unix epoch seconds)
    pub iat: usize,
}

/// Request payload for token issuance.
///
/// Issuance is unauthenticated by design: any caller may request a token for
/// any identifier. All real authorization happens later against the directory.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TokenRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
}

/// Response carrying a freshly issued bearer token.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}
