use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{
        errors::DomainError,
        product::{NewProduct, Product},
        review::{self, NewReview, Review, ReviewListCriteria},
        user::{NewUser, User, UserListCriteria},
    },
    infrastructure::{GroupCount, GroupMean, ProductStore, ReviewStore, UserStore},
};

/// In-memory persistence gateway over the three entity tables.
///
/// Lock order is users -> products -> reviews everywhere; cascade deletes hold
/// the parent and review locks together so the cascade is atomic to readers.
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    products: RwLock<HashMap<Uuid, Product>>,
    reviews: RwLock<BTreeMap<i64, Review>>,
    next_review_id: AtomicI64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            products: RwLock::new(HashMap::new()),
            reviews: RwLock::new(BTreeMap::new()),
            next_review_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, new: NewUser) -> Result<User, DomainError> {
        new.validate()?;

        let mut users = self.users.write().await;
        if users.values().any(|user| user.user_name == new.user_name) {
            return Err(DomainError::conflict("user_name already exists"));
        }
        if users.values().any(|user| user.mail == new.mail) {
            return Err(DomainError::conflict("mail already exists"));
        }

        let created = User {
            uuid: Uuid::new_v4(),
            user_name: new.user_name,
            mail: new.mail,
            password_hash: new.password_hash,
            is_blocked: false,
            sign_up_date: Utc::now(),
            is_deleted: false,
        };
        users.insert(created.uuid, created.clone());
        Ok(created)
    }

    async fn user_by_id(&self, uuid: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&uuid).cloned())
    }

    async fn list_users(&self, criteria: UserListCriteria) -> Result<Vec<User>, DomainError> {
        let mut items = self
            .users
            .read()
            .await
            .values()
            .filter(|user| criteria.matches(user))
            .cloned()
            .collect::<Vec<_>>();

        if let Some(order) = criteria.order {
            items.sort_by(|left, right| order.apply(left.sign_up_date.cmp(&right.sign_up_date)));
        }

        Ok(items)
    }

    async fn save_user(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.uuid) {
            return Err(DomainError::not_found("user not found"));
        }
        users.insert(user.uuid, user.clone());
        Ok(user)
    }

    async fn delete_user(&self, uuid: Uuid) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;
        let mut reviews = self.reviews.write().await;

        let Some(removed) = users.remove(&uuid) else {
            return Ok(None);
        };
        reviews.retain(|_, review| review.user_id != uuid);
        Ok(Some(removed))
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn create_product(&self, new: NewProduct) -> Result<Product, DomainError> {
        let created = Product {
            id: Uuid::new_v4(),
            name: new.name,
            image: new.image,
            price: new.price,
            is_special: false,
            discount: None,
        };
        self.products
            .write()
            .await
            .insert(created.id, created.clone());
        Ok(created)
    }

    async fn product_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn save_product(&self, product: Product) -> Result<Product, DomainError> {
        let mut products = self.products.write().await;
        if !products.contains_key(&product.id) {
            return Err(DomainError::not_found("product not found"));
        }
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete_product(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let mut products = self.products.write().await;
        let mut reviews = self.reviews.write().await;

        let Some(removed) = products.remove(&id) else {
            return Ok(None);
        };
        reviews.retain(|_, review| review.product_id != id);
        Ok(Some(removed))
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn create_review(&self, new: NewReview) -> Result<Review, DomainError> {
        review::validate_content(&new.content)?;
        review::validate_rating(new.rating)?;

        let users = self.users.read().await;
        let products = self.products.read().await;
        if !products.contains_key(&new.product_id) {
            return Err(DomainError::validation("product_id must reference an existing product"));
        }
        if !users.contains_key(&new.user_id) {
            return Err(DomainError::validation("user_id must reference an existing user"));
        }

        let mut reviews = self.reviews.write().await;
        let created = Review {
            review_id: self.next_review_id.fetch_add(1, Ordering::SeqCst),
            product_id: new.product_id,
            user_id: new.user_id,
            content: new.content,
            submission_date: Utc::now(),
            rating: new.rating,
            is_deleted: false,
            is_flagged: false,
        };
        reviews.insert(created.review_id, created.clone());
        Ok(created)
    }

    async fn review_by_id(&self, review_id: i64) -> Result<Option<Review>, DomainError> {
        Ok(self.reviews.read().await.get(&review_id).cloned())
    }

    async fn list_reviews(
        &self,
        criteria: ReviewListCriteria,
    ) -> Result<Vec<Review>, DomainError> {
        let mut items = self
            .reviews
            .read()
            .await
            .values()
            .filter(|item| criteria.matches(item))
            .cloned()
            .collect::<Vec<_>>();

        if let Some(order) = criteria.order {
            items.sort_by(|left, right| {
                order.apply(left.submission_date.cmp(&right.submission_date))
            });
        }

        Ok(items)
    }

    async fn save_review(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;
        if !reviews.contains_key(&review.review_id) {
            return Err(DomainError::not_found("review not found"));
        }
        reviews.insert(review.review_id, review.clone());
        Ok(review)
    }

    async fn review_counts_by_product(&self) -> Result<Vec<GroupCount>, DomainError> {
        let reviews = self.reviews.read().await;
        let mut counts: HashMap<Uuid, u64> = HashMap::new();
        for item in reviews.values() {
            *counts.entry(item.product_id).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(key, count)| GroupCount { key, count })
            .collect())
    }

    async fn rating_means_by_product(&self) -> Result<Vec<GroupMean>, DomainError> {
        let reviews = self.reviews.read().await;
        let mut sums: HashMap<Uuid, (f64, u64)> = HashMap::new();
        for item in reviews.values() {
            let entry = sums.entry(item.product_id).or_insert((0.0, 0));
            entry.0 += f64::from(item.rating);
            entry.1 += 1;
        }
        Ok(sums
            .into_iter()
            .map(|(key, (sum, count))| GroupMean {
                key,
                mean: sum / count as f64,
            })
            .collect())
    }

    async fn review_counts_by_user(&self) -> Result<Vec<GroupCount>, DomainError> {
        let reviews = self.reviews.read().await;
        let mut counts: HashMap<Uuid, u64> = HashMap::new();
        for item in reviews.values() {
            *counts.entry(item.user_id).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(key, count)| GroupCount { key, count })
            .collect())
    }
}
