//! Thin wrappers over MongoDB driver results.
//!
//! Clients consume the driver's result shapes directly, so these keep the
//! same field names (`insertedId`, `matchedCount`, ...).

use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;
use utoipa::ToSchema;

/// Outcome of a single-document insert.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertSummary {
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub inserted_id: Option<String>,
}

impl From<InsertOneResult> for InsertSummary {
    fn from(result: InsertOneResult) -> Self {
        Self {
            inserted_id: result.inserted_id.as_object_id().map(|id| id.to_hex()),
        }
    }
}

/// Outcome of a single-document update. Zero matched means the target id was
/// not found; the operation is a no-op rather than an error.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdateSummary {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

/// Outcome of a deletion. A count lower than the number of requested ids
/// signals partial effect without raising an error.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSummary {
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteSummary {
    fn from(result: DeleteResult) -> Self {
        Self {
            deleted_count: result.deleted_count,
        }
    }
}
