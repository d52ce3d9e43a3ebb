//! Cart handlers.

use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::models::{CartItemInput, CartListQuery};
use crate::services::CartService;

/// Add an item to a cart.
#[utoipa::path(
    post,
    path = "/carts",
    tag = "Carts",
    request_body = CartItemInput,
    responses((status = 200, description = "Insert summary", body = crate::models::InsertSummary))
)]
pub async fn add_cart_item(
    carts: web::Data<CartService>,
    body: web::Json<CartItemInput>,
) -> Result<HttpResponse, ApiError> {
    let summary = carts.add(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// List cart entries, scoped to the owner when `?email=` is supplied.
#[utoipa::path(
    get,
    path = "/carts",
    tag = "Carts",
    params(("email" = Option<String>, Query, description = "Owner email to scope the listing to")),
    responses((status = 200, description = "Cart entries", body = [crate::models::CartItemResponse]))
)]
pub async fn list_cart(
    carts: web::Data<CartService>,
    query: web::Query<CartListQuery>,
) -> Result<HttpResponse, ApiError> {
    let items = carts.list(query.email.as_deref()).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// Remove a single cart entry.
#[utoipa::path(
    delete,
    path = "/carts/{id}",
    tag = "Carts",
    params(("id" = String, Path, description = "Cart entry ID (hex)")),
    responses(
        (status = 200, description = "Delete summary", body = crate::models::DeleteSummary),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn remove_cart_item(
    carts: web::Data<CartService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let summary = carts.remove(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(summary))
}
