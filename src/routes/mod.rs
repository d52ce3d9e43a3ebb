use actix_web::web;

use crate::handlers;
use crate::middleware::{RequireAdmin, RequireToken};
use crate::services::{TokenService, UserService};

/// Route table. Auth is applied per route: middleware registered last runs
/// first, so `.wrap(admin).wrap(token)` checks the token before the
/// directory role lookup.
pub fn configure_routes(
    cfg: &mut web::ServiceConfig,
    tokens: TokenService,
    users: web::Data<UserService>,
) {
    let token = || RequireToken::new(tokens.clone());
    let admin = || RequireAdmin::new(users.clone());

    cfg.route("/health", web::get().to(health_check))
        // Token issuance (public)
        .service(web::resource("/jwt").route(web::post().to(handlers::issue_token)))
        // User directory
        .service(
            web::resource("/users")
                .route(
                    web::get()
                        .to(handlers::list_users)
                        .wrap(admin())
                        .wrap(token()),
                )
                // Self-registration is open and idempotent
                .route(web::post().to(handlers::register_user)),
        )
        // `{key}` is an email for the GET self-check and a record id for the
        // admin-gated PATCH promotion
        .service(
            web::resource("/users/admin/{key}")
                .route(web::get().to(handlers::check_admin).wrap(token()))
                .route(
                    web::patch()
                        .to(handlers::promote_user)
                        .wrap(admin())
                        .wrap(token()),
                ),
        )
        .service(
            web::resource("/users/{id}").route(
                web::delete()
                    .to(handlers::delete_user)
                    .wrap(admin())
                    .wrap(token()),
            ),
        )
        // Catalog: reads, PATCH, and DELETE are open; only creation is
        // admin-gated
        .service(
            web::resource("/product")
                .route(web::get().to(handlers::list_products))
                .route(
                    web::post()
                        .to(handlers::create_product)
                        .wrap(admin())
                        .wrap(token()),
                ),
        )
        .service(
            web::resource("/product/{id}")
                .route(web::get().to(handlers::get_product))
                .route(web::patch().to(handlers::update_product))
                .route(web::delete().to(handlers::delete_product)),
        )
        // Carts (open)
        .service(
            web::resource("/carts")
                .route(web::post().to(handlers::add_cart_item))
                .route(web::get().to(handlers::list_cart)),
        )
        .service(web::resource("/carts/{id}").route(web::delete().to(handlers::remove_cart_item)))
        // Checkout (open; confirmed client-side against the provider)
        .route(
            "/create-payment-intent",
            web::post().to(handlers::create_payment_intent),
        )
        .route("/payments", web::post().to(handlers::record_payment));
}

async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "Server is running"
    }))
}
