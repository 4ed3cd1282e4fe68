use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    errors::DomainError,
    product::{self, Product, ProductPatch},
    query::SortOrder,
    review::{self, Review, ReviewListCriteria},
    user::{User, UserLifecycleCommand, UserListCriteria},
};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrderRequest {
    Asc,
    Desc,
}

impl SortOrderRequest {
    fn into_domain(self) -> SortOrder {
        match self {
            Self::Asc => SortOrder::Asc,
            Self::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListUsersQueryRequest {
    #[serde(default)]
    pub order: Option<SortOrderRequest>,
    #[serde(default)]
    pub is_blocked: Option<bool>,
    #[serde(default)]
    pub is_deleted: Option<bool>,
}

impl ListUsersQueryRequest {
    pub fn into_criteria(self) -> UserListCriteria {
        UserListCriteria {
            is_blocked: self.is_blocked,
            is_deleted: self.is_deleted,
            order: self.order.map(SortOrderRequest::into_domain),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListReviewsQueryRequest {
    #[serde(default)]
    pub order: Option<SortOrderRequest>,
    #[serde(default)]
    pub is_flagged: Option<bool>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub is_deleted: Option<bool>,
}

impl ListReviewsQueryRequest {
    pub fn into_criteria(self) -> ReviewListCriteria {
        ReviewListCriteria {
            is_flagged: self.is_flagged,
            rating: self.rating,
            is_deleted: self.is_deleted,
            order: self.order.map(SortOrderRequest::into_domain),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    pub name: String,
    pub image: String,
    pub price: Decimal,
}

impl AddProductRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        product::validate_price(self.price)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub is_special: Option<bool>,
    #[serde(default)]
    pub discount: Option<i32>,
}

impl UpdateProductRequest {
    /// Cross-field rule: a request turning `is_special` on must carry a
    /// discount; a request leaving it off (or unset) must not.
    pub fn validate(&self) -> Result<(), DomainError> {
        match (self.is_special, self.discount) {
            (Some(true), None) => Err(DomainError::validation(
                "discount must be provided for special products",
            )),
            (Some(false) | None, Some(_)) => Err(DomainError::validation(
                "discount cannot be set for non-special products",
            )),
            _ => {
                if let Some(discount) = self.discount {
                    product::validate_discount(discount)?;
                }
                if let Some(price) = self.price {
                    product::validate_price(price)?;
                }
                Ok(())
            }
        }
    }

    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name,
            image: self.image,
            price: self.price,
            is_special: self.is_special,
            discount: self.discount,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateReviewContentRequest {
    pub content: String,
}

impl UpdateReviewContentRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        review::validate_content(&self.content)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserCommandRequest {
    Block,
    Unblock,
}

impl UserCommandRequest {
    pub fn into_domain(self) -> UserLifecycleCommand {
        match self {
            Self::Block => UserLifecycleCommand::Block,
            Self::Unblock => UserLifecycleCommand::Unblock,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplyUserCommandRequest {
    pub command: UserCommandRequest,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub uuid: Uuid,
    pub user_name: String,
    pub mail: String,
    pub is_blocked: bool,
    pub sign_up_date: DateTime<Utc>,
    pub is_deleted: bool,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        // The password hash never leaves the store.
        Self {
            uuid: value.uuid,
            user_name: value.user_name,
            mail: value.mail,
            is_blocked: value.is_blocked,
            sign_up_date: value.sign_up_date,
            is_deleted: value.is_deleted,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub price: Decimal,
    pub is_special: bool,
    pub discount: Option<i32>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image: value.image,
            price: value.price,
            is_special: value.is_special,
            discount: value.discount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review_id: i64,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub submission_date: DateTime<Utc>,
    pub rating: i32,
    pub is_deleted: bool,
    pub is_flagged: bool,
    pub product_name: Option<String>,
    pub user_name: Option<String>,
}

impl ReviewResponse {
    pub fn from_review(
        value: Review,
        product_name: Option<String>,
        user_name: Option<String>,
    ) -> Self {
        Self {
            review_id: value.review_id,
            product_id: value.product_id,
            user_id: value.user_id,
            content: value.content,
            submission_date: value.submission_date,
            rating: value.rating,
            is_deleted: value.is_deleted,
            is_flagged: value.is_flagged,
            product_name,
            user_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewCountResponse {
    pub product_id: Uuid,
    pub product_name: String,
    pub review_count: u64,
}

#[derive(Debug, Serialize)]
pub struct AverageRatingResponse {
    pub product_id: Uuid,
    pub product_name: String,
    pub average_rating: f64,
}

#[derive(Debug, Serialize)]
pub struct UserReviewCountResponse {
    pub user_id: Uuid,
    pub user_name: Option<String>,
    pub review_count: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
