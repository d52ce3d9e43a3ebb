//! Cart repository.
//!
//! Bulk deletion by id set is reserved for the checkout reconciler; no other
//! component removes cart entries as a side effect of payment.

use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::results::{DeleteResult, InsertOneResult};
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_CARTS;
use crate::errors::ApiError;
use crate::models::CartItem;

pub struct CartRepository {
    collection: Collection<CartItem>,
}

impl CartRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_CARTS),
        }
    }

    pub async fn insert(&self, item: &CartItem) -> Result<InsertOneResult, ApiError> {
        Ok(self.collection.insert_one(item).await?)
    }

    /// List cart entries, optionally scoped to an owner email.
    pub async fn find(&self, owner: Option<&str>) -> Result<Vec<CartItem>, ApiError> {
        let filter = match owner {
            Some(email) => doc! { "email": email },
            None => doc! {},
        };
        let cursor = self.collection.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, ApiError> {
        Ok(self.collection.delete_one(doc! { "_id": id }).await?)
    }

    /// Delete every cart entry whose id is in `ids`.
    ///
    /// An empty set legally deletes nothing; duplicate ids are deduplicated
    /// by the distinct-id `$in` match. A count lower than the number of ids
    /// means some entries were already gone.
    pub async fn delete_by_ids(&self, ids: &[ObjectId]) -> Result<DeleteResult, ApiError> {
        debug!("Repository: Purging {} cart entries", ids.len());
        Ok(self
            .collection
            .delete_many(doc! { "_id": { "$in": ids.to_vec() } })
            .await?)
    }
}
