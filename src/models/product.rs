use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product document stored in MongoDB. No invariant beyond id uniqueness.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldprice: Option<f64>,
    pub description: String,
    pub image: String,
}

/// Payload for creating or replacing the mutable fields of a product.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductInput {
    #[schema(example = "Wireless Mouse")]
    pub name: String,
    #[schema(example = "electronics")]
    pub category: String,
    #[schema(example = 24.99)]
    pub price: f64,
    #[schema(example = 29.99)]
    pub oldprice: Option<f64>,
    pub description: String,
    pub image: String,
}

/// Product data returned in API responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldprice: Option<f64>,
    pub description: String,
    pub image: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: product.name,
            category: product.category,
            price: product.price,
            oldprice: product.oldprice,
            description: product.description,
            image: product.image,
        }
    }
}
