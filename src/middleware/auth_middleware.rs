//! Bearer-token authentication middleware for protected routes.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use std::rc::Rc;

use crate::constants::ERR_INVALID_AUTH_HEADER;
use crate::errors::ApiError;
use crate::services::TokenService;

/// Requires a valid bearer token.
///
/// A missing or malformed Authorization header fails immediately with 401
/// before any signature work. On success the decoded claims are stored in
/// the request extensions for downstream handlers and middleware.
pub struct RequireToken {
    tokens: TokenService,
}

impl RequireToken {
    pub fn new(tokens: TokenService) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireToken
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequireTokenService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequireTokenService {
            service: Rc::new(service),
            tokens: self.tokens.clone(),
        })
    }
}

pub struct RequireTokenService<S> {
    service: Rc<S>,
    tokens: TokenService,
}

impl<S, B> Service<ServiceRequest> for RequireTokenService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let tokens = self.tokens.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok());

            let token = match auth_header {
                Some(header) if header.starts_with("Bearer ") => &header[7..],
                _ => {
                    return Err(
                        ApiError::Unauthorized(ERR_INVALID_AUTH_HEADER.to_string()).into()
                    );
                }
            };

            let claims = tokens.verify(token)?;

            // Add claims to request extensions for use downstream
            req.extensions_mut().insert(claims);

            let res = service.call(req).await?;
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::RequestExt;
    use actix_web::{test, web, App, HttpRequest, HttpResponse};

    async fn echo_email(req: HttpRequest) -> HttpResponse {
        match req.get_claims() {
            Some(claims) => HttpResponse::Ok().body(claims.email),
            None => HttpResponse::InternalServerError().finish(),
        }
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let tokens = TokenService::new("test-secret");
        let app = test::init_service(
            App::new()
                .wrap(RequireToken::new(tokens))
                .route("/protected", web::get().to(echo_email)),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.error_response().status(), 401);
    }

    #[actix_web::test]
    async fn test_invalid_token_is_unauthorized() {
        let tokens = TokenService::new("test-secret");
        let app = test::init_service(
            App::new()
                .wrap(RequireToken::new(tokens))
                .route("/protected", web::get().to(echo_email)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.error_response().status(), 401);
    }

    #[actix_web::test]
    async fn test_valid_token_attaches_claims() {
        let tokens = TokenService::new("test-secret");
        let token = tokens.issue("a@x.com").unwrap();

        let app = test::init_service(
            App::new()
                .wrap(RequireToken::new(tokens))
                .route("/protected", web::get().to(echo_email)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(body, "a@x.com");
    }
}
