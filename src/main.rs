mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod stripe;
mod validators;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::repositories::PaymentRepository;
use crate::services::{CartService, CatalogService, CheckoutService, TokenService, UserService};
use crate::stripe::StripeClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Required configuration is read once here (`from_env` loads `.env`
    // before the logger so RUST_LOG from the file applies); a missing value
    // aborts now rather than degrading at first use.
    let config = Config::from_env();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&config.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");
    let db = client.database(&config.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 })
        .await
        .expect("Failed to ping MongoDB");
    info!("Connected to MongoDB successfully!");

    // Initialize services with their dependencies injected explicitly
    let token_service = TokenService::new(&config.access_token_secret);
    let user_service = web::Data::new(UserService::new(&db));
    user_service
        .create_indexes()
        .await
        .expect("Failed to create database indexes");

    let catalog_service = web::Data::new(CatalogService::new(&db));
    let cart_service = web::Data::new(CartService::new(&db));
    let checkout_service = web::Data::new(CheckoutService::new(
        StripeClient::new(config.stripe_secret_key.clone()),
        PaymentRepository::new(&db),
        cart_service.repository(),
    ));

    let server_addr = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        let tokens = token_service.clone();
        let users = user_service.clone();

        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(token_service.clone()))
            .app_data(user_service.clone())
            .app_data(catalog_service.clone())
            .app_data(cart_service.clone())
            .app_data(checkout_service.clone())
            .configure(|cfg| routes::configure_routes(cfg, tokens, users))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
