//! User directory service: self-registration, role management, role lookup.

use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::sync::Arc;

use crate::constants::{ERR_INVALID_USER_ID, MSG_USER_EXISTS};
use crate::errors::ApiError;
use crate::models::{
    CreateUserRequest, DeleteSummary, RegisterResponse, UpdateSummary, User, UserResponse,
};
use crate::repositories::UserRepository;

pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(db)),
        }
    }

    /// Ensure collection indexes exist. Called once at startup.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        self.repository.create_indexes().await
    }

    /// Idempotent self-registration. A repeat registration with the same
    /// identifier reports the existing state (`insertedId: null`) without
    /// modifying the record.
    pub async fn register(&self, req: CreateUserRequest) -> Result<RegisterResponse, ApiError> {
        if self.repository.find_by_email(&req.email).await?.is_some() {
            debug!("Registration no-op, user exists: {}", req.email);
            return Ok(RegisterResponse {
                message: Some(MSG_USER_EXISTS.to_string()),
                inserted_id: None,
            });
        }

        let user = User {
            id: None,
            email: req.email.to_lowercase(),
            name: req.name,
            role: Default::default(),
        };

        let id = self.repository.insert(&user).await?;
        info!("Registered new user: {}", user.email);

        Ok(RegisterResponse {
            message: None,
            inserted_id: id.map(|id| id.to_hex()),
        })
    }

    /// List all user records, unbounded.
    pub async fn list_all(&self) -> Result<Vec<UserResponse>, ApiError> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Promote the user with the given id to admin. Unknown ids are a no-op
    /// reported through the zero matched count; repeating the promotion
    /// leaves the same end state.
    pub async fn promote(&self, id: &str) -> Result<UpdateSummary, ApiError> {
        let object_id = parse_user_id(id)?;
        let result = self.repository.promote_to_admin(object_id).await?;
        if result.matched_count == 0 {
            warn!("Promotion targeted unknown user id: {}", id);
        }
        Ok(result.into())
    }

    /// Remove the user with the given id.
    pub async fn remove(&self, id: &str) -> Result<DeleteSummary, ApiError> {
        let object_id = parse_user_id(id)?;
        Ok(self.repository.delete(object_id).await?.into())
    }

    /// Current role check against the directory, never against token claims.
    /// Unknown identifiers are simply not admins.
    pub async fn is_admin(&self, email: &str) -> Result<bool, ApiError> {
        let user = self.repository.find_by_email(email).await?;
        Ok(user.map(|u| u.role.is_admin()).unwrap_or(false))
    }
}

fn parse_user_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id_rejects_malformed_hex() {
        assert!(parse_user_id("not-an-object-id").is_err());
        assert!(parse_user_id("507f1f77bcf86cd799439011").is_ok());
    }
}
