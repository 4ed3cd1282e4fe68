use std::sync::Arc;

use crate::{
    application::dto::{AverageRatingResponse, ReviewCountResponse, UserReviewCountResponse},
    domain::errors::DomainError,
    infrastructure::{ProductStore, ReviewStore, UserStore},
};

/// Grouped review statistics. Order of operations matters: group and
/// aggregate first, join display names after, then drop groups whose parent
/// row no longer resolves (a concurrent delete can orphan a group between the
/// grouping pass and the join).
#[derive(Clone)]
pub struct StatsService {
    reviews: Arc<dyn ReviewStore>,
    products: Arc<dyn ProductStore>,
    users: Arc<dyn UserStore>,
}

impl StatsService {
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

    pub async fn review_counts(&self) -> Result<Vec<ReviewCountResponse>, DomainError> {
        let groups = self.reviews.review_counts_by_product().await?;

        let mut rows = Vec::with_capacity(groups.len());
        for group in groups {
            let Some(product) = self.products.product_by_id(group.key).await? else {
                continue;
            };
            rows.push(ReviewCountResponse {
                product_id: group.key,
                product_name: product.name,
                review_count: group.count,
            });
        }
        Ok(rows)
    }

    pub async fn average_ratings(&self) -> Result<Vec<AverageRatingResponse>, DomainError> {
        let groups = self.reviews.rating_means_by_product().await?;

        let mut rows = Vec::with_capacity(groups.len());
        for group in groups {
            let Some(product) = self.products.product_by_id(group.key).await? else {
                continue;
            };
            rows.push(AverageRatingResponse {
                product_id: group.key,
                product_name: product.name,
                average_rating: group.mean,
            });
        }
        Ok(rows)
    }

    /// Unlike the product aggregates, a user group survives losing its parent:
    /// the row is kept with `user_name: None`.
    pub async fn user_review_counts(
        &self,
    ) -> Result<Vec<UserReviewCountResponse>, DomainError> {
        let groups = self.reviews.review_counts_by_user().await?;

        let mut rows = Vec::with_capacity(groups.len());
        for group in groups {
            let user_name = self
                .users
                .user_by_id(group.key)
                .await?
                .map(|user| user.user_name);
            rows.push(UserReviewCountResponse {
                user_id: group.key,
                user_name,
                review_count: group.count,
            });
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            product::{NewProduct, Product},
            review::{NewReview, Review, ReviewListCriteria},
            user::{NewUser, User, UserListCriteria},
        },
        infrastructure::{memory::MemoryStore, GroupCount, GroupMean},
    };
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    async fn seeded_store() -> (Arc<MemoryStore>, Product, User) {
        let store = Arc::new(MemoryStore::new());
        let user = store
            .create_user(NewUser {
                user_name: "counter".to_string(),
                mail: "counter@example.com".to_string(),
                password_hash: "$2b$12$hash".to_string(),
            })
            .await
            .unwrap();
        let product = store
            .create_product(NewProduct {
                name: "Widget".to_string(),
                image: "http://x/img.png".to_string(),
                price: Decimal::new(15, 1),
            })
            .await
            .unwrap();
        for rating in [3, 5] {
            store
                .create_review(NewReview {
                    product_id: product.id,
                    user_id: user.uuid,
                    content: "fine".to_string(),
                    rating,
                })
                .await
                .unwrap();
        }
        (store, product, user)
    }

    fn service(store: Arc<MemoryStore>) -> StatsService {
        StatsService::new(store.clone(), store.clone(), store)
    }

    #[tokio::test]
    async fn counts_join_product_names_and_sum_to_review_total() {
        let (store, product, _user) = seeded_store().await;
        let service = service(store);

        let counts = service.review_counts().await.unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].product_id, product.id);
        assert_eq!(counts[0].product_name, "Widget");
        assert_eq!(counts[0].review_count, 2);
    }

    #[tokio::test]
    async fn average_of_three_and_five_is_four() {
        let (store, _product, _user) = seeded_store().await;
        let service = service(store);

        let ratings = service.average_ratings().await.unwrap();
        assert_eq!(ratings.len(), 1);
        assert!((ratings[0].average_rating - 4.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn user_counts_carry_the_display_name() {
        let (store, _product, user) = seeded_store().await;
        let service = service(store);

        let counts = service.user_review_counts().await.unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].user_id, user.uuid);
        assert_eq!(counts[0].user_name.as_deref(), Some("counter"));
        assert_eq!(counts[0].review_count, 2);
    }

    /// Store double that reports groups whose parents are gone, the state a
    /// concurrent delete leaves behind between grouping and the name join.
    struct OrphanedGroups {
        product_key: Uuid,
        user_key: Uuid,
    }

    #[async_trait]
    impl ReviewStore for OrphanedGroups {
        async fn create_review(&self, _new: NewReview) -> Result<Review, DomainError> {
            unimplemented!("not used by stats")
        }
        async fn review_by_id(&self, _review_id: i64) -> Result<Option<Review>, DomainError> {
            Ok(None)
        }
        async fn list_reviews(
            &self,
            _criteria: ReviewListCriteria,
        ) -> Result<Vec<Review>, DomainError> {
            Ok(Vec::new())
        }
        async fn save_review(&self, _review: Review) -> Result<Review, DomainError> {
            unimplemented!("not used by stats")
        }
        async fn review_counts_by_product(&self) -> Result<Vec<GroupCount>, DomainError> {
            Ok(vec![GroupCount {
                key: self.product_key,
                count: 3,
            }])
        }
        async fn rating_means_by_product(&self) -> Result<Vec<GroupMean>, DomainError> {
            Ok(vec![GroupMean {
                key: self.product_key,
                mean: 2.5,
            }])
        }
        async fn review_counts_by_user(&self) -> Result<Vec<GroupCount>, DomainError> {
            Ok(vec![GroupCount {
                key: self.user_key,
                count: 3,
            }])
        }
    }

    #[async_trait]
    impl ProductStore for OrphanedGroups {
        async fn create_product(&self, _new: NewProduct) -> Result<Product, DomainError> {
            unimplemented!("not used by stats")
        }
        async fn product_by_id(&self, _id: Uuid) -> Result<Option<Product>, DomainError> {
            Ok(None)
        }
        async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
            Ok(Vec::new())
        }
        async fn save_product(&self, _product: Product) -> Result<Product, DomainError> {
            unimplemented!("not used by stats")
        }
        async fn delete_product(&self, _id: Uuid) -> Result<Option<Product>, DomainError> {
            Ok(None)
        }
    }

    #[async_trait]
    impl UserStore for OrphanedGroups {
        async fn create_user(&self, _new: NewUser) -> Result<User, DomainError> {
            unimplemented!("not used by stats")
        }
        async fn user_by_id(&self, _uuid: Uuid) -> Result<Option<User>, DomainError> {
            Ok(None)
        }
        async fn list_users(
            &self,
            _criteria: UserListCriteria,
        ) -> Result<Vec<User>, DomainError> {
            Ok(Vec::new())
        }
        async fn save_user(&self, _user: User) -> Result<User, DomainError> {
            unimplemented!("not used by stats")
        }
        async fn delete_user(&self, _uuid: Uuid) -> Result<Option<User>, DomainError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn orphaned_product_groups_are_dropped_and_user_groups_kept() {
        let stub = Arc::new(OrphanedGroups {
            product_key: Uuid::new_v4(),
            user_key: Uuid::new_v4(),
        });
        let service = StatsService::new(stub.clone(), stub.clone(), stub.clone());

        assert!(service.review_counts().await.unwrap().is_empty());
        assert!(service.average_ratings().await.unwrap().is_empty());

        let user_counts = service.user_review_counts().await.unwrap();
        assert_eq!(user_counts.len(), 1);
        assert_eq!(user_counts[0].user_id, stub.user_key);
        assert_eq!(user_counts[0].user_name, None);
        assert_eq!(user_counts[0].review_count, 3);
    }
}
