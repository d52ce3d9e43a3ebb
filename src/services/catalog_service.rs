//! Catalog service: plain forwarding of product CRUD to the persistence
//! layer. Lookups that find nothing return `None` rather than an error.

use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Database;

use crate::constants::ERR_INVALID_PRODUCT_ID;
use crate::errors::ApiError;
use crate::models::{
    DeleteSummary, InsertSummary, Product, ProductInput, ProductResponse, UpdateSummary,
};
use crate::repositories::ProductRepository;

pub struct CatalogService {
    repository: ProductRepository,
}

impl CatalogService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: ProductRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<ProductResponse>, ApiError> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<ProductResponse>, ApiError> {
        let object_id = parse_product_id(id)?;
        let product = self.repository.find_by_id(object_id).await?;
        Ok(product.map(ProductResponse::from))
    }

    pub async fn create(&self, input: ProductInput) -> Result<InsertSummary, ApiError> {
        let product = Product {
            id: None,
            name: input.name,
            category: input.category,
            price: input.price,
            oldprice: input.oldprice,
            description: input.description,
            image: input.image,
        };
        Ok(self.repository.insert(&product).await?.into())
    }

    pub async fn update(&self, id: &str, input: ProductInput) -> Result<UpdateSummary, ApiError> {
        let object_id = parse_product_id(id)?;

        let mut update: Document = doc! {
            "name": input.name,
            "category": input.category,
            "price": input.price,
            "description": input.description,
            "image": input.image,
        };
        if let Some(oldprice) = input.oldprice {
            update.insert("oldprice", oldprice);
        }

        Ok(self.repository.update(object_id, update).await?.into())
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteSummary, ApiError> {
        let object_id = parse_product_id(id)?;
        Ok(self.repository.delete(object_id).await?.into())
    }
}

fn parse_product_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(ERR_INVALID_PRODUCT_ID.to_string()))
}
