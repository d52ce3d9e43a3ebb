//! Product repository. Catalog reads are open; writes happen behind the
//! authorization guard.

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_PRODUCTS;
use crate::errors::ApiError;
use crate::models::Product;

pub struct ProductRepository {
    collection: Collection<Product>,
}

impl ProductRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_PRODUCTS),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Product>, ApiError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Product>, ApiError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn insert(&self, product: &Product) -> Result<InsertOneResult, ApiError> {
        Ok(self.collection.insert_one(product).await?)
    }

    /// Replace the mutable fields of a product with `update`.
    pub async fn update(&self, id: ObjectId, update: Document) -> Result<UpdateResult, ApiError> {
        Ok(self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": update })
            .await?)
    }

    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, ApiError> {
        Ok(self.collection.delete_one(doc! { "_id": id }).await?)
    }
}
