//! Checkout reconciler.
//!
//! Two independent entry points per purchase, sharing no transaction context:
//! intent creation before payment, and payment recording after the client
//! confirms the charge. Recording inserts the payment document and then
//! purges the settled cart entries; those two writes are not atomic, and a
//! purge failure after a successful insert is surfaced to the caller and
//! logged for operators rather than swallowed or retried.

use log::{error, info};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use crate::constants::{ERR_INVALID_CART_ID, MSG_PAYMENT_PURGE_FAILED};
use crate::errors::ApiError;
use crate::models::{Payment, PaymentReceipt, PaymentRequest};
use crate::repositories::{CartPurge, CartRepository, PaymentRepository, PaymentStore};
use crate::stripe::StripeClient;

/// Generic over its two persistence seams; production wires the MongoDB
/// repositories (the defaults), tests wire fakes.
pub struct CheckoutService<P = PaymentRepository, C = Arc<CartRepository>> {
    stripe: StripeClient,
    payments: P,
    carts: C,
}

impl<P, C> CheckoutService<P, C>
where
    P: PaymentStore,
    C: CartPurge,
{
    pub fn new(stripe: StripeClient, payments: P, carts: C) -> Self {
        Self {
            stripe,
            payments,
            carts,
        }
    }

    /// Create a provider payment intent for `price` major units and return
    /// the client secret. Amount validation is delegated to the provider;
    /// a rejection propagates unretried.
    pub async fn create_intent(&self, price: f64) -> Result<String, ApiError> {
        let amount = to_minor_units(price);
        let intent = self.stripe.create_payment_intent(amount, "usd").await?;
        Ok(intent.client_secret)
    }

    /// Record a completed payment, then purge the cart entries it settles.
    ///
    /// Cart ids are parsed before any write so a malformed id rejects the
    /// whole request instead of leaving a recorded payment behind. Ids that
    /// parse but match nothing simply lower the deleted count. An empty id
    /// set performs no deletions.
    pub async fn record_payment(&self, req: PaymentRequest) -> Result<PaymentReceipt, ApiError> {
        let ids = parse_cart_ids(&req.cart_ids)?;
        let payment: Payment = req.into();

        let inserted = self.payments.record(&payment).await?;
        info!(
            "Recorded payment {} settling {} cart entries",
            payment.transaction_id,
            ids.len()
        );

        match self.carts.purge(&ids).await {
            Ok(deleted) => Ok(PaymentReceipt {
                payment_result: inserted,
                delete_result: Some(deleted),
                reconciled: true,
            }),
            Err(err) => {
                // Billing-integrity gap: the payment is in the store but the
                // cart entries it settled remain. Operators reconcile by hand.
                error!(
                    "{}: transaction {}: {}",
                    MSG_PAYMENT_PURGE_FAILED, payment.transaction_id, err
                );
                Ok(PaymentReceipt {
                    payment_result: inserted,
                    delete_result: None,
                    reconciled: false,
                })
            }
        }
    }
}

/// Coerce a major-unit price to integer minor units (cents), rounding to the
/// nearest cent so binary float representation cannot shave a penny off.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

fn parse_cart_ids(ids: &[String]) -> Result<Vec<ObjectId>, ApiError> {
    ids.iter()
        .map(|id| {
            ObjectId::parse_str(id)
                .map_err(|_| ApiError::BadRequest(ERR_INVALID_CART_ID.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeleteSummary, InsertSummary};
    use async_trait::async_trait;
    use chrono::Utc;

    struct StubPayments;

    #[async_trait(?Send)]
    impl PaymentStore for StubPayments {
        async fn record(&self, _payment: &Payment) -> Result<InsertSummary, ApiError> {
            Ok(InsertSummary {
                inserted_id: Some("65f0bbbbbbbbbbbbbbbbbbbb".to_string()),
            })
        }
    }

    struct RefusingPayments;

    #[async_trait(?Send)]
    impl PaymentStore for RefusingPayments {
        async fn record(&self, _payment: &Payment) -> Result<InsertSummary, ApiError> {
            panic!("payment stored for a request that must be rejected first");
        }
    }

    struct PurgingCarts {
        deleted: u64,
    }

    #[async_trait(?Send)]
    impl CartPurge for PurgingCarts {
        async fn purge(&self, _ids: &[ObjectId]) -> Result<DeleteSummary, ApiError> {
            Ok(DeleteSummary {
                deleted_count: self.deleted,
            })
        }
    }

    struct FailingCarts;

    #[async_trait(?Send)]
    impl CartPurge for FailingCarts {
        async fn purge(&self, _ids: &[ObjectId]) -> Result<DeleteSummary, ApiError> {
            Err(ApiError::InternalServerError(
                "connection reset by peer".to_string(),
            ))
        }
    }

    fn checkout<P: PaymentStore, C: CartPurge>(payments: P, carts: C) -> CheckoutService<P, C> {
        CheckoutService::new(StripeClient::new("sk_test_abc".to_string()), payments, carts)
    }

    fn settled_request(cart_ids: Vec<String>) -> PaymentRequest {
        PaymentRequest {
            email: "a@x.com".to_string(),
            price: 19.99,
            transaction_id: "pi_123".to_string(),
            date: Utc::now(),
            cart_ids,
        }
    }

    #[tokio::test]
    async fn test_purge_failure_after_insert_yields_unreconciled_receipt() {
        let service = checkout(StubPayments, FailingCarts);
        let receipt = service
            .record_payment(settled_request(vec!["65f0aaaaaaaaaaaaaaaaaaaa".to_string()]))
            .await
            .unwrap();

        // The payment is recorded, so this is a success response carrying
        // the gap, not an error.
        assert!(!receipt.reconciled);
        assert!(receipt.delete_result.is_none());
        assert!(receipt.payment_result.inserted_id.is_some());
    }

    #[tokio::test]
    async fn test_successful_purge_yields_reconciled_receipt() {
        let service = checkout(StubPayments, PurgingCarts { deleted: 1 });
        let receipt = service
            .record_payment(settled_request(vec![
                "65f0aaaaaaaaaaaaaaaaaaaa".to_string(),
                "65f0cccccccccccccccccccc".to_string(),
            ]))
            .await
            .unwrap();

        // Fewer deletions than requested ids is partial effect, not failure.
        assert!(receipt.reconciled);
        assert_eq!(receipt.delete_result.unwrap().deleted_count, 1);
    }

    #[tokio::test]
    async fn test_malformed_cart_id_rejects_before_any_write() {
        let service = checkout(RefusingPayments, PurgingCarts { deleted: 0 });
        let err = service
            .record_payment(settled_request(vec!["not-hex".to_string()]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_to_minor_units() {
        assert_eq!(to_minor_units(10.0), 1000);
        assert_eq!(to_minor_units(0.5), 50);
        // 19.99 * 100 is 1998.999... in binary floating point; rounding keeps
        // the full amount instead of truncating a cent away.
        assert_eq!(to_minor_units(19.99), 1999);
    }

    #[test]
    fn test_parse_cart_ids_rejects_malformed_entries() {
        let ids = vec![
            "65f0aaaaaaaaaaaaaaaaaaaa".to_string(),
            "nope".to_string(),
        ];
        assert!(parse_cart_ids(&ids).is_err());
    }

    #[test]
    fn test_parse_cart_ids_empty_set_is_legal() {
        assert!(parse_cart_ids(&[]).unwrap().is_empty());
    }
}
