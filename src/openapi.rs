use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    AdminCheckResponse, CartItemInput, CartItemResponse, CreateIntentRequest,
    CreateIntentResponse, CreateUserRequest, DeleteSummary, InsertSummary, PaymentReceipt,
    PaymentRequest, ProductInput, ProductResponse, RegisterResponse, Role, TokenRequest,
    TokenResponse, UpdateSummary, UserResponse,
};

/// OpenAPI documentation for the storefront API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "1.0.0",
        description = "Storefront backend with JWT authentication, role-based access control, and Stripe checkout reconciliation.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    tags(
        (name = "Auth", description = "Token issuance"),
        (name = "Users", description = "User directory and role management"),
        (name = "Catalog", description = "Product catalog CRUD"),
        (name = "Carts", description = "Shopping cart entries"),
        (name = "Checkout", description = "Payment intents and payment recording")
    ),
    paths(
        crate::handlers::issue_token,
        crate::handlers::list_users,
        crate::handlers::check_admin,
        crate::handlers::register_user,
        crate::handlers::promote_user,
        crate::handlers::delete_user,
        crate::handlers::list_products,
        crate::handlers::get_product,
        crate::handlers::create_product,
        crate::handlers::update_product,
        crate::handlers::delete_product,
        crate::handlers::add_cart_item,
        crate::handlers::list_cart,
        crate::handlers::remove_cart_item,
        crate::handlers::create_payment_intent,
        crate::handlers::record_payment
    ),
    components(
        schemas(
            TokenRequest,
            TokenResponse,
            CreateUserRequest,
            RegisterResponse,
            AdminCheckResponse,
            Role,
            UserResponse,
            ProductInput,
            ProductResponse,
            CartItemInput,
            CartItemResponse,
            CreateIntentRequest,
            CreateIntentResponse,
            PaymentRequest,
            PaymentReceipt,
            InsertSummary,
            UpdateSummary,
            DeleteSummary
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
