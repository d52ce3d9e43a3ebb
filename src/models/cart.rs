use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cart entry document. One document per item a caller added to their cart.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Owning identifier
    pub email: String,
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
}

/// Payload for adding an item to a cart.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CartItemInput {
    #[schema(example = "user@example.com")]
    pub email: String,
    #[serde(rename = "productId")]
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
}

/// Cart entry returned in API responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemResponse {
    pub id: String,
    pub email: String,
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: item.email,
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            image: item.image,
        }
    }
}

/// Query parameters accepted by the cart listing endpoint.
#[derive(Debug, Deserialize)]
pub struct CartListQuery {
    /// Owner email; when present the listing is scoped to that owner.
    pub email: Option<String>,
}
