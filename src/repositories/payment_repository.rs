//! Payment repository. Payment records are insert-only.

use mongodb::results::InsertOneResult;
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_PAYMENTS;
use crate::errors::ApiError;
use crate::models::Payment;

pub struct PaymentRepository {
    collection: Collection<Payment>,
}

impl PaymentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_PAYMENTS),
        }
    }

    pub async fn insert(&self, payment: &Payment) -> Result<InsertOneResult, ApiError> {
        Ok(self.collection.insert_one(payment).await?)
    }
}
