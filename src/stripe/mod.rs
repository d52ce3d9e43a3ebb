//! Minimal Stripe REST client for payment intents.
//!
//! Talks to the Stripe API directly with form-encoded requests; only the
//! payment-intent creation call is needed here. The client secret returned by
//! Stripe is opaque to this server and forwarded to the browser to complete
//! the charge.

use log::{error, info};
use reqwest::Client;
use serde::Deserialize;

use crate::constants::ERR_STRIPE_BAD_RESPONSE;
use crate::errors::ApiError;

const STRIPE_API_BASE: &str = "https://api.stripe.com";

/// A provider-side payment intent, trimmed to the fields this server uses.
#[derive(Debug, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct StripeClient {
    secret_key: String,
    api_base_url: String,
    http: Client,
}

impl StripeClient {
    pub fn new(secret_key: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            secret_key: secret_key.into(),
            api_base_url: STRIPE_API_BASE.to_string(),
            http,
        }
    }

    /// Builder: set custom API base URL (for testing)
    #[allow(dead_code)]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Create a payment intent for `amount` minor units of `currency`.
    ///
    /// Amount validation is left to Stripe: a non-positive or out-of-range
    /// amount comes back as a provider rejection and is propagated unretried.
    pub async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, ApiError> {
        let form_params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let url = format!("{}/v1/payment_intents", self.api_base_url);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .form(&form_params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(ApiError::PaymentProvider(error_response.error.message));
            }
            return Err(ApiError::PaymentProvider(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let intent: PaymentIntent = serde_json::from_str(&body).map_err(|e| {
            ApiError::PaymentProvider(format!("{}: {}", ERR_STRIPE_BAD_RESPONSE, e))
        })?;

        info!("Created Stripe payment intent: id={}", intent.id);
        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_payment_intent_returns_client_secret() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .and(body_string_contains("amount=2499"))
            .and(body_string_contains("currency=usd"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "pi_test_123",
                "client_secret": "pi_test_123_secret_abc"
            })))
            .mount(&server)
            .await;

        let client = StripeClient::new("sk_test_abc").with_api_base_url(server.uri());
        let intent = client.create_payment_intent(2499, "usd").await.unwrap();

        assert_eq!(intent.id, "pi_test_123");
        assert_eq!(intent.client_secret, "pi_test_123_secret_abc");
    }

    #[tokio::test]
    async fn test_provider_rejection_propagates_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": { "message": "Amount must be at least 50 cents" }
            })))
            .mount(&server)
            .await;

        let client = StripeClient::new("sk_test_abc").with_api_base_url(server.uri());
        let err = client.create_payment_intent(-100, "usd").await.unwrap_err();

        match err {
            ApiError::PaymentProvider(message) => {
                assert!(message.contains("Amount must be at least 50 cents"));
            }
            other => panic!("expected PaymentProvider error, got {:?}", other),
        }
    }
}
