use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    application::dto::{ListReviewsQueryRequest, ReviewResponse, UpdateReviewContentRequest},
    domain::{errors::DomainError, review::Review, user::UserListCriteria},
    infrastructure::{ProductStore, ReviewStore, UserStore},
};

#[derive(Clone)]
pub struct ReviewService {
    reviews: Arc<dyn ReviewStore>,
    products: Arc<dyn ProductStore>,
    users: Arc<dyn UserStore>,
}

impl ReviewService {
    pub fn new(
        reviews: Arc<dyn ReviewStore>,
        products: Arc<dyn ProductStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            reviews,
            products,
            users,
        }
    }

    /// Filtered/sorted listing enriched with the product and user display
    /// names, resolved at call time. A name that no longer resolves is `None`.
    pub async fn list_reviews(
        &self,
        query: ListReviewsQueryRequest,
    ) -> Result<Vec<ReviewResponse>, DomainError> {
        let reviews = self.reviews.list_reviews(query.into_criteria()).await?;

        let product_names: HashMap<_, _> = self
            .products
            .list_products()
            .await?
            .into_iter()
            .map(|product| (product.id, product.name))
            .collect();
        let user_names: HashMap<_, _> = self
            .users
            .list_users(UserListCriteria::default())
            .await?
            .into_iter()
            .map(|user| (user.uuid, user.user_name))
            .collect();

        Ok(reviews
            .into_iter()
            .map(|review| {
                let product_name = product_names.get(&review.product_id).cloned();
                let user_name = user_names.get(&review.user_id).cloned();
                ReviewResponse::from_review(review, product_name, user_name)
            })
            .collect())
    }

    /// Overwrites the content field only.
    pub async fn update_content(
        &self,
        review_id: i64,
        request: UpdateReviewContentRequest,
    ) -> Result<ReviewResponse, DomainError> {
        request.validate()?;

        let Some(mut review) = self.reviews.review_by_id(review_id).await? else {
            return Err(DomainError::not_found("review not found"));
        };
        review.content = request.content;
        let saved = self.reviews.save_review(review).await?;
        self.enrich(saved).await
    }

    /// Soft delete: flips `is_deleted`, the row and its id stay listable.
    pub async fn delete_review(&self, review_id: i64) -> Result<ReviewResponse, DomainError> {
        let Some(mut review) = self.reviews.review_by_id(review_id).await? else {
            return Err(DomainError::not_found("review not found"));
        };
        review.is_deleted = true;
        let saved = self.reviews.save_review(review).await?;
        self.enrich(saved).await
    }

    async fn enrich(&self, review: Review) -> Result<ReviewResponse, DomainError> {
        let product_name = self
            .products
            .product_by_id(review.product_id)
            .await?
            .map(|product| product.name);
        let user_name = self
            .users
            .user_by_id(review.user_id)
            .await?
            .map(|user| user.user_name);
        Ok(ReviewResponse::from_review(review, product_name, user_name))
    }
}
