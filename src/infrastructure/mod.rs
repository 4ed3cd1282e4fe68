use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    errors::DomainError,
    product::{NewProduct, Product},
    review::{NewReview, Review, ReviewListCriteria},
    user::{NewUser, User, UserListCriteria},
};

pub mod memory;

/// One aggregate group keyed by the id the reviews were grouped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCount {
    pub key: Uuid,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupMean {
    pub key: Uuid,
    pub mean: f64,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, new: NewUser) -> Result<User, DomainError>;
    async fn user_by_id(&self, uuid: Uuid) -> Result<Option<User>, DomainError>;
    async fn list_users(&self, criteria: UserListCriteria) -> Result<Vec<User>, DomainError>;
    /// Full-row write keyed by `user.uuid`. Read-then-save sequences are not
    /// atomic against concurrent writers to the same row.
    async fn save_user(&self, user: User) -> Result<User, DomainError>;
    /// Hard delete. Cascades to the user's reviews; returns the removed row.
    async fn delete_user(&self, uuid: Uuid) -> Result<Option<User>, DomainError>;
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create_product(&self, new: NewProduct) -> Result<Product, DomainError>;
    async fn product_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError>;
    async fn list_products(&self) -> Result<Vec<Product>, DomainError>;
    /// Full-row write keyed by `product.id`.
    async fn save_product(&self, product: Product) -> Result<Product, DomainError>;
    /// Hard delete. Cascades to the product's reviews; returns the removed row.
    async fn delete_product(&self, id: Uuid) -> Result<Option<Product>, DomainError>;
}

#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn create_review(&self, new: NewReview) -> Result<Review, DomainError>;
    async fn review_by_id(&self, review_id: i64) -> Result<Option<Review>, DomainError>;
    async fn list_reviews(
        &self,
        criteria: ReviewListCriteria,
    ) -> Result<Vec<Review>, DomainError>;
    async fn save_review(&self, review: Review) -> Result<Review, DomainError>;
    /// Group all reviews (soft-deleted included) by product and count rows.
    async fn review_counts_by_product(&self) -> Result<Vec<GroupCount>, DomainError>;
    /// Group all reviews by product and take the arithmetic mean of ratings.
    async fn rating_means_by_product(&self) -> Result<Vec<GroupMean>, DomainError>;
    /// Group all reviews by submitting user and count rows.
    async fn review_counts_by_user(&self) -> Result<Vec<GroupCount>, DomainError>;
}
