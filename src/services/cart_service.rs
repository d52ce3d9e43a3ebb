//! Cart service: add, list, and remove individual cart entries.
//!
//! Bulk purging after payment is the checkout reconciler's job; this service
//! shares its repository with it but never deletes by id set itself.

use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::sync::Arc;

use crate::constants::ERR_INVALID_CART_ID;
use crate::errors::ApiError;
use crate::models::{CartItem, CartItemInput, CartItemResponse, DeleteSummary, InsertSummary};
use crate::repositories::CartRepository;

pub struct CartService {
    repository: Arc<CartRepository>,
}

impl CartService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(CartRepository::new(db)),
        }
    }

    /// Get the underlying repository (shared with the checkout service).
    pub fn repository(&self) -> Arc<CartRepository> {
        Arc::clone(&self.repository)
    }

    pub async fn add(&self, input: CartItemInput) -> Result<InsertSummary, ApiError> {
        let item = CartItem {
            id: None,
            email: input.email,
            product_id: input.product_id,
            name: input.name,
            price: input.price,
            image: input.image,
        };
        Ok(self.repository.insert(&item).await?.into())
    }

    /// List cart entries, scoped to `owner` when one is supplied.
    pub async fn list(&self, owner: Option<&str>) -> Result<Vec<CartItemResponse>, ApiError> {
        let items = self.repository.find(owner).await?;
        Ok(items.into_iter().map(CartItemResponse::from).collect())
    }

    pub async fn remove(&self, id: &str) -> Result<DeleteSummary, ApiError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_CART_ID.to_string()))?;
        Ok(self.repository.delete(object_id).await?.into())
    }
}
