//! User repository for all MongoDB operations related to users.

use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::results::{DeleteResult, UpdateResult};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{COLLECTION_USERS, ROLE_ADMIN};
use crate::errors::ApiError;
use crate::models::User;

/// Repository for user-related database operations.
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Create a unique index on `email`, the immutable identity key.
    ///
    /// Called once during application startup.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for users collection...");

        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                mongodb::options::IndexOptions::builder()
                    .unique(true)
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Insert a new user into the database.
    pub async fn insert(&self, user: &User) -> Result<Option<ObjectId>, ApiError> {
        let result = self.collection.insert_one(user).await?;
        Ok(result.inserted_id.as_object_id())
    }

    /// Find a user by email address (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by email: {}", email);
        Ok(self
            .collection
            .find_one(doc! { "email": email.to_lowercase() })
            .await?)
    }

    /// List all users, unbounded.
    pub async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Set a user's role to admin. Zero matched means the id was not found.
    pub async fn promote_to_admin(&self, id: ObjectId) -> Result<UpdateResult, ApiError> {
        debug!("Repository: Promoting user {} to admin", id);
        Ok(self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "role": ROLE_ADMIN } })
            .await?)
    }

    /// Delete a user by ObjectId.
    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, ApiError> {
        Ok(self.collection.delete_one(doc! { "_id": id }).await?)
    }
}
