//! User directory handlers: registration, role checks, admin management.

use actix_web::{web, HttpRequest, HttpResponse};
use log::warn;
use validator::Validate;

use crate::constants::{ERR_AUTH_REQUIRED, ERR_EMAIL_MISMATCH};
use crate::errors::ApiError;
use crate::middleware::RequestExt;
use crate::models::{AdminCheckResponse, CreateUserRequest};
use crate::services::UserService;
use crate::validators::validation_errors_to_api_error;

/// List all user records (admin only, unbounded).
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All user records", body = [crate::models::UserResponse]),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_users(users: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let records = users.list_all().await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Check whether the given email belongs to an admin.
///
/// Token-gated but not admin-gated; a caller may only ask about their own
/// email, so this is the one route that authenticates without the directory
/// middleware.
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Email to check, must match the token's email")),
    responses(
        (status = 200, description = "Admin flag", body = AdminCheckResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Email does not match the authenticated identity")
    ),
    security(("bearer_auth" = []))
)]
pub async fn check_admin(
    users: web::Data<UserService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();

    let claims = req
        .get_claims()
        .ok_or_else(|| ApiError::Unauthorized(ERR_AUTH_REQUIRED.to_string()))?;

    if claims.email != email {
        warn!(
            "{} attempted admin check for another identity: {}",
            claims.email, email
        );
        return Err(ApiError::Forbidden(ERR_EMAIL_MISMATCH.to_string()));
    }

    let admin = users.is_admin(&email).await?;
    Ok(HttpResponse::Ok().json(AdminCheckResponse { admin }))
}

/// Self-register an identity. Idempotent: repeating with the same email
/// reports the existing state with `insertedId: null`.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Insert result or exists-report", body = crate::models::RegisterResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn register_user(
    users: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let outcome = users.register(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// Promote a user to admin (admin only). Unknown ids report zero matched.
#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID (hex)")),
    responses(
        (status = 200, description = "Update summary", body = crate::models::UpdateSummary),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn promote_user(
    users: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let summary = users.promote(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Remove a user record (admin only).
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID (hex)")),
    responses(
        (status = 200, description = "Delete summary", body = crate::models::DeleteSummary),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_user(
    users: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let summary = users.remove(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(summary))
}
