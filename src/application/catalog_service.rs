use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::dto::{AddProductRequest, ProductResponse, UpdateProductRequest},
    domain::{errors::DomainError, product::NewProduct},
    infrastructure::ProductStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list_products(&self) -> Result<Vec<ProductResponse>, DomainError> {
        let products = self.store.list_products().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    pub async fn add_product(
        &self,
        request: AddProductRequest,
    ) -> Result<ProductResponse, DomainError> {
        request.validate()?;

        let created = self
            .store
            .create_product(NewProduct {
                name: request.name,
                image: request.image,
                price: request.price.round_dp(2),
            })
            .await?;
        Ok(ProductResponse::from(created))
    }

    pub async fn update_product(
        &self,
        id: Uuid,
        request: UpdateProductRequest,
    ) -> Result<ProductResponse, DomainError> {
        let Some(mut product) = self.store.product_by_id(id).await? else {
            return Err(DomainError::not_found("product not found"));
        };
        request.validate()?;

        let patch = request.into_patch();
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(image) = patch.image {
            product.image = image;
        }
        if let Some(price) = patch.price {
            product.price = price.round_dp(2);
        }
        product.is_special = patch.is_special.unwrap_or(product.is_special);
        // The stored discount survives only while the resulting is_special is
        // true; a request flipping it off (or a non-special product) stores none.
        product.discount = if product.is_special {
            patch.discount.or(product.discount)
        } else {
            None
        };

        let saved = self.store.save_product(product).await?;
        Ok(ProductResponse::from(saved))
    }

    /// Hard delete; the store cascades to the product's reviews. Returns the
    /// last-known snapshot of the removed row.
    pub async fn delete_product(&self, id: Uuid) -> Result<ProductResponse, DomainError> {
        let Some(removed) = self.store.delete_product(id).await? else {
            return Err(DomainError::not_found("product not found"));
        };
        Ok(ProductResponse::from(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::MemoryStore;
    use rust_decimal::Decimal;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(MemoryStore::new()))
    }

    fn widget(price: Decimal) -> AddProductRequest {
        AddProductRequest {
            name: "Widget".to_string(),
            image: "http://x/img.png".to_string(),
            price,
        }
    }

    fn patch() -> UpdateProductRequest {
        UpdateProductRequest {
            name: None,
            image: None,
            price: None,
            is_special: None,
            discount: None,
        }
    }

    #[tokio::test]
    async fn add_product_rejects_prices_at_or_below_the_floor() {
        let service = service();

        let result = service.add_product(widget(Decimal::new(5, 1))).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let boundary = service.add_product(widget(Decimal::new(9, 1))).await;
        assert!(matches!(boundary, Err(DomainError::Validation(_))));

        assert!(service.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_product_defaults_special_off_and_discount_none() {
        let service = service();

        let created = service
            .add_product(widget(Decimal::new(15, 1)))
            .await
            .expect("price above the floor should be accepted");
        assert!(!created.is_special);
        assert_eq!(created.discount, None);
    }

    #[tokio::test]
    async fn special_flag_and_discount_round_trip() {
        let service = service();
        let created = service.add_product(widget(Decimal::new(15, 1))).await.unwrap();

        let special = service
            .update_product(
                created.id,
                UpdateProductRequest {
                    is_special: Some(true),
                    discount: Some(20),
                    ..patch()
                },
            )
            .await
            .expect("turning special on with a discount should succeed");
        assert!(special.is_special);
        assert_eq!(special.discount, Some(20));

        let plain = service
            .update_product(
                created.id,
                UpdateProductRequest {
                    is_special: Some(false),
                    ..patch()
                },
            )
            .await
            .expect("turning special off should succeed");
        assert!(!plain.is_special);
        assert_eq!(plain.discount, None);
    }

    #[tokio::test]
    async fn special_without_discount_is_rejected() {
        let service = service();
        let created = service.add_product(widget(Decimal::new(15, 1))).await.unwrap();

        let result = service
            .update_product(
                created.id,
                UpdateProductRequest {
                    is_special: Some(true),
                    ..patch()
                },
            )
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn discount_without_special_is_rejected() {
        let service = service();
        let created = service.add_product(widget(Decimal::new(15, 1))).await.unwrap();

        let explicit_off = service
            .update_product(
                created.id,
                UpdateProductRequest {
                    is_special: Some(false),
                    discount: Some(10),
                    ..patch()
                },
            )
            .await;
        assert!(matches!(explicit_off, Err(DomainError::Validation(_))));

        let unset = service
            .update_product(
                created.id,
                UpdateProductRequest {
                    discount: Some(10),
                    ..patch()
                },
            )
            .await;
        assert!(matches!(unset, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn omitted_fields_keep_stored_values() {
        let service = service();
        let created = service.add_product(widget(Decimal::new(15, 1))).await.unwrap();
        service
            .update_product(
                created.id,
                UpdateProductRequest {
                    is_special: Some(true),
                    discount: Some(30),
                    ..patch()
                },
            )
            .await
            .unwrap();

        // A price-only update keeps the special flag and its stored discount.
        let updated = service
            .update_product(
                created.id,
                UpdateProductRequest {
                    price: Some(Decimal::new(299, 2)),
                    ..patch()
                },
            )
            .await
            .expect("price-only update should succeed");
        assert_eq!(updated.price, Decimal::new(299, 2));
        assert!(updated.is_special);
        assert_eq!(updated.discount, Some(30));
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_products_are_not_found() {
        let service = service();

        let update = service.update_product(Uuid::new_v4(), patch()).await;
        assert!(matches!(update, Err(DomainError::NotFound(_))));

        let delete = service.delete_product(Uuid::new_v4()).await;
        assert!(matches!(delete, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn out_of_range_discount_is_rejected() {
        let service = service();
        let created = service.add_product(widget(Decimal::new(15, 1))).await.unwrap();

        let result = service
            .update_product(
                created.id,
                UpdateProductRequest {
                    is_special: Some(true),
                    discount: Some(101),
                    ..patch()
                },
            )
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
