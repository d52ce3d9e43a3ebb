//! Narrow persistence traits behind the checkout reconciler.
//!
//! The concrete repositories implement them over their collections; tests
//! substitute in-memory fakes so both reconciliation outcomes run without a
//! live database.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::{DeleteSummary, InsertSummary, Payment};

/// Insert-only store for completed payment records.
#[async_trait(?Send)]
pub trait PaymentStore {
    async fn record(&self, payment: &Payment) -> Result<InsertSummary, ApiError>;
}

/// Bulk removal of cart entries settled by a payment.
#[async_trait(?Send)]
pub trait CartPurge {
    async fn purge(&self, ids: &[ObjectId]) -> Result<DeleteSummary, ApiError>;
}

#[async_trait(?Send)]
impl PaymentStore for super::PaymentRepository {
    async fn record(&self, payment: &Payment) -> Result<InsertSummary, ApiError> {
        Ok(self.insert(payment).await?.into())
    }
}

#[async_trait(?Send)]
impl CartPurge for super::CartRepository {
    async fn purge(&self, ids: &[ObjectId]) -> Result<DeleteSummary, ApiError> {
        Ok(self.delete_by_ids(ids).await?.into())
    }
}

// The cart repository is shared with the cart CRUD service via `Arc`.
#[async_trait(?Send)]
impl<T: CartPurge> CartPurge for Arc<T> {
    async fn purge(&self, ids: &[ObjectId]) -> Result<DeleteSummary, ApiError> {
        (**self).purge(ids).await
    }
}
