//! Admin authorization middleware.
//!
//! Must run after `RequireToken`. The role is resolved from the user
//! directory on every call; token claims are never trusted for role state,
//! so a promotion or demotion takes effect on the next request.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use async_trait::async_trait;
use futures::future::{ok, LocalBoxFuture, Ready};
use log::warn;
use std::rc::Rc;

use crate::constants::{ERR_ADMIN_REQUIRED, ERR_AUTH_REQUIRED};
use crate::errors::ApiError;
use crate::models::Claims;
use crate::services::UserService;

/// Role lookup the guard runs against. The user directory is the production
/// source; the seam keeps the guard decoupled from the database.
#[async_trait(?Send)]
pub trait RoleSource: Clone + 'static {
    async fn is_admin(&self, email: &str) -> Result<bool, ApiError>;
}

#[async_trait(?Send)]
impl RoleSource for web::Data<UserService> {
    async fn is_admin(&self, email: &str) -> Result<bool, ApiError> {
        self.get_ref().is_admin(email).await
    }
}

/// Requires the authenticated identity to carry the admin role.
///
/// Read-only: fails with 403 when the directory has no record for the
/// identity or its role is not admin, and proceeds otherwise.
pub struct RequireAdmin<R: RoleSource = web::Data<UserService>> {
    roles: R,
}

impl<R: RoleSource> RequireAdmin<R> {
    pub fn new(roles: R) -> Self {
        Self { roles }
    }
}

impl<S, B, R> Transform<S, ServiceRequest> for RequireAdmin<R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    R: RoleSource,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequireAdminService<S, R>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequireAdminService {
            service: Rc::new(service),
            roles: self.roles.clone(),
        })
    }
}

pub struct RequireAdminService<S, R: RoleSource> {
    service: Rc<S>,
    roles: R,
}

impl<S, B, R> Service<ServiceRequest> for RequireAdminService<S, R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    R: RoleSource,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let roles = self.roles.clone();

        Box::pin(async move {
            // Claims must have been attached by RequireToken; the extensions
            // borrow is dropped before the role lookup awaits.
            let claims = req.extensions().get::<Claims>().cloned();

            let claims = match claims {
                Some(claims) => claims,
                None => {
                    return Err(ApiError::Unauthorized(ERR_AUTH_REQUIRED.to_string()).into());
                }
            };

            if !roles.is_admin(&claims.email).await? {
                warn!("Non-admin {} attempted an admin-gated route", claims.email);
                return Err(ApiError::Forbidden(ERR_ADMIN_REQUIRED.to_string()).into());
            }

            let res = service.call(req).await?;
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::RequireToken;
    use crate::services::TokenService;
    use actix_web::{test, App, HttpResponse};
    use std::cell::Cell;

    async fn handler() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    /// Answers every lookup with a fixed role and records whether it was
    /// consulted at all.
    #[derive(Clone)]
    struct FixedRoles {
        admin: bool,
        consulted: Rc<Cell<bool>>,
    }

    impl FixedRoles {
        fn new(admin: bool) -> Self {
            Self {
                admin,
                consulted: Rc::new(Cell::new(false)),
            }
        }
    }

    #[async_trait(?Send)]
    impl RoleSource for FixedRoles {
        async fn is_admin(&self, _email: &str) -> Result<bool, ApiError> {
            self.consulted.set(true);
            Ok(self.admin)
        }
    }

    fn bearer(tokens: &TokenService, email: &str) -> (&'static str, String) {
        let token = tokens.issue(email).unwrap();
        ("Authorization", format!("Bearer {}", token))
    }

    #[actix_web::test]
    async fn test_missing_claims_fails_before_role_lookup() {
        let roles = FixedRoles::new(true);
        let app = test::init_service(
            App::new()
                .wrap(RequireAdmin::new(roles.clone()))
                .route("/admin", web::get().to(handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/admin").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.error_response().status(), 401);
        assert!(!roles.consulted.get());
    }

    // Middleware registered last runs first, so `.wrap(admin).wrap(token)`
    // decodes the token before the role check, same as the route table.
    #[actix_web::test]
    async fn test_non_admin_identity_is_forbidden() {
        let tokens = TokenService::new("test-secret");
        let roles = FixedRoles::new(false);
        let app = test::init_service(
            App::new()
                .wrap(RequireAdmin::new(roles.clone()))
                .wrap(RequireToken::new(tokens.clone()))
                .route("/admin", web::get().to(handler)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(bearer(&tokens, "standard@x.com"))
            .to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.error_response().status(), 403);
        assert!(roles.consulted.get());
    }

    #[actix_web::test]
    async fn test_admin_identity_reaches_handler() {
        let tokens = TokenService::new("test-secret");
        let roles = FixedRoles::new(true);
        let app = test::init_service(
            App::new()
                .wrap(RequireAdmin::new(roles))
                .wrap(RequireToken::new(tokens.clone()))
                .route("/admin", web::get().to(handler)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(bearer(&tokens, "admin@x.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
