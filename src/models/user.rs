use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

use crate::constants::{ROLE_ADMIN, ROLE_STANDARD};

/// User roles for role-based access control
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Standard,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "{}", ROLE_ADMIN),
            Role::Standard => write!(f, "{}", ROLE_STANDARD),
        }
    }
}

impl Role {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// User document stored in MongoDB.
///
/// Role state is owned exclusively by the user directory: only the
/// authorization guard reads it, only admin-gated handlers mutate it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// Request payload for self-registration.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
}

/// User data returned in API responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier (hex)
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

/// Response for the idempotent registration endpoint.
///
/// A repeat registration reports the existing state (`insertedId: null`)
/// instead of erroring, mirroring the insert summary shape otherwise.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "user already exists")]
    pub message: Option<String>,
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub inserted_id: Option<String>,
}

/// Response for the self-or-admin role check.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminCheckResponse {
    pub admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_default_is_standard() {
        assert_eq!(Role::default(), Role::Standard);
        assert!(!Role::default().is_admin());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::Standard).unwrap(),
            "\"standard\""
        );
    }

    #[test]
    fn test_user_deserializes_without_role_field() {
        // Records written before the role field existed default to standard.
        let user: User = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(user.role, Role::Standard);
    }

    #[test]
    fn test_register_response_reports_null_inserted_id_for_existing_user() {
        let resp = RegisterResponse {
            message: Some("user already exists".to_string()),
            inserted_id: None,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["insertedId"], serde_json::Value::Null);
        assert_eq!(json["message"], "user already exists");
    }
}
