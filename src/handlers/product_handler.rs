//! Catalog handlers: plain forwarding to the catalog service.

use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::models::ProductInput;
use crate::services::CatalogService;

/// List the full catalog.
#[utoipa::path(
    get,
    path = "/product",
    tag = "Catalog",
    responses((status = 200, description = "All products", body = [crate::models::ProductResponse]))
)]
pub async fn list_products(catalog: web::Data<CatalogService>) -> Result<HttpResponse, ApiError> {
    let products = catalog.list().await?;
    Ok(HttpResponse::Ok().json(products))
}

/// Fetch a single product. A missing product is `null`, not an error.
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "Product ID (hex)")),
    responses(
        (status = 200, description = "Product or null", body = crate::models::ProductResponse),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn get_product(
    catalog: web::Data<CatalogService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let product = catalog.get(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Add a product to the catalog (admin only).
#[utoipa::path(
    post,
    path = "/product",
    tag = "Catalog",
    request_body = ProductInput,
    responses(
        (status = 200, description = "Insert summary", body = crate::models::InsertSummary),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_product(
    catalog: web::Data<CatalogService>,
    body: web::Json<ProductInput>,
) -> Result<HttpResponse, ApiError> {
    let summary = catalog.create(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Update a product's fields.
#[utoipa::path(
    patch,
    path = "/product/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "Product ID (hex)")),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Update summary", body = crate::models::UpdateSummary),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn update_product(
    catalog: web::Data<CatalogService>,
    path: web::Path<String>,
    body: web::Json<ProductInput>,
) -> Result<HttpResponse, ApiError> {
    let summary = catalog.update(&path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Remove a product from the catalog.
#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "Product ID (hex)")),
    responses(
        (status = 200, description = "Delete summary", body = crate::models::DeleteSummary),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn delete_product(
    catalog: web::Data<CatalogService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let summary = catalog.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(summary))
}
