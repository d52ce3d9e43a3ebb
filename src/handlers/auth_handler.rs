//! Token issuance handler.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::errors::ApiError;
use crate::models::{TokenRequest, TokenResponse};
use crate::services::TokenService;
use crate::validators::validation_errors_to_api_error;

/// Issue a signed bearer token for the supplied identity claim.
///
/// Unauthenticated by design: the token proves nothing beyond possession of
/// the asserted identifier, and every protected route re-checks role state
/// against the user directory.
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Auth",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn issue_token(
    tokens: web::Data<TokenService>,
    body: web::Json<TokenRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let token = tokens.issue(&body.email)?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}
