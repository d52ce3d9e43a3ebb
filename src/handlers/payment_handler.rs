//! Checkout handlers: intent creation and payment recording.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::errors::ApiError;
use crate::models::{CreateIntentRequest, CreateIntentResponse, PaymentRequest};
use crate::services::CheckoutService;
use crate::validators::validation_errors_to_api_error;

/// Create a provider payment intent and return its client secret.
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    tag = "Checkout",
    request_body = CreateIntentRequest,
    responses(
        (status = 200, description = "Client secret for completing payment", body = CreateIntentResponse),
        (status = 502, description = "Provider rejected the intent")
    )
)]
pub async fn create_payment_intent(
    checkout: web::Data<CheckoutService>,
    body: web::Json<CreateIntentRequest>,
) -> Result<HttpResponse, ApiError> {
    let client_secret = checkout.create_intent(body.price).await?;
    Ok(HttpResponse::Ok().json(CreateIntentResponse { client_secret }))
}

/// Record a completed payment and purge the cart entries it settles.
///
/// The receipt carries both write outcomes; `reconciled: false` flags a
/// recorded payment whose cart purge did not complete.
#[utoipa::path(
    post,
    path = "/payments",
    tag = "Checkout",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment receipt", body = crate::models::PaymentReceipt),
        (status = 400, description = "Validation error or malformed cart id")
    )
)]
pub async fn record_payment(
    checkout: web::Data<CheckoutService>,
    body: web::Json<PaymentRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let receipt = checkout.record_payment(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(receipt))
}
