use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::summaries::{DeleteSummary, InsertSummary};

/// Request payload for creating a provider payment intent.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateIntentRequest {
    /// Price in major units (e.g. dollars); coerced to integer cents.
    #[schema(example = 24.99)]
    pub price: f64,
}

/// Response carrying the client-opaque secret for completing the payment.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: String,
}

/// Request payload for recording a completed payment.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PaymentRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[schema(example = 49.98)]
    pub price: f64,
    #[serde(rename = "transactionId")]
    #[schema(example = "pi_3MtwBwLkdIwHu7ix28a3tqPa")]
    pub transaction_id: String,
    pub date: DateTime<Utc>,
    /// Cart entry ids this payment settles (hex). May be empty; duplicates
    /// are harmless since the purge matches on a distinct-id filter.
    #[serde(rename = "cartId")]
    pub cart_ids: Vec<String>,
}

/// Payment document stored in MongoDB. Created exactly once per completed
/// purchase; immutable thereafter.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Payment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub price: f64,
    pub currency: String,
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "cartId")]
    pub cart_ids: Vec<String>,
}

impl From<PaymentRequest> for Payment {
    fn from(req: PaymentRequest) -> Self {
        Self {
            id: None,
            email: req.email,
            price: req.price,
            currency: "usd".to_string(),
            transaction_id: req.transaction_id,
            date: req.date,
            cart_ids: req.cart_ids,
        }
    }
}

/// Outcome of the payment-then-purge sequence. Both write results are
/// returned so the caller can detect partial failure: `reconciled` is false
/// when the payment was recorded but the cart purge did not complete.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub payment_result: InsertSummary,
    pub delete_result: Option<DeleteSummary>,
    pub reconciled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_request_wire_names() {
        let req: PaymentRequest = serde_json::from_str(
            r#"{
                "email": "a@x.com",
                "price": 12.5,
                "transactionId": "pi_123",
                "date": "2024-03-01T12:00:00Z",
                "cartId": ["65f0aaaaaaaaaaaaaaaaaaaa"]
            }"#,
        )
        .unwrap();
        assert_eq!(req.transaction_id, "pi_123");
        assert_eq!(req.cart_ids.len(), 1);
    }

    #[test]
    fn test_receipt_marks_partial_reconciliation() {
        let receipt = PaymentReceipt {
            payment_result: InsertSummary {
                inserted_id: Some("65f0bbbbbbbbbbbbbbbbbbbb".to_string()),
            },
            delete_result: None,
            reconciled: false,
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["reconciled"], false);
        assert_eq!(json["deleteResult"], serde_json::Value::Null);
        assert!(json["paymentResult"]["insertedId"].is_string());
    }
}
