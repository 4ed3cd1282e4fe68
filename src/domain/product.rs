use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::errors::DomainError;

pub const DISCOUNT_MIN: i32 = 0;
pub const DISCOUNT_MAX: i32 = 100;

/// Exclusive lower bound on a product price (0.9).
pub fn min_price_exclusive() -> Decimal {
    Decimal::new(9, 1)
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub price: Decimal,
    pub is_special: bool,
    pub discount: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub image: String,
    pub price: Decimal,
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<Decimal>,
    pub is_special: Option<bool>,
    pub discount: Option<i32>,
}

pub fn validate_price(price: Decimal) -> Result<(), DomainError> {
    if price <= min_price_exclusive() {
        return Err(DomainError::validation("price must be greater than 0.9"));
    }
    Ok(())
}

pub fn validate_discount(discount: i32) -> Result<(), DomainError> {
    if !(DISCOUNT_MIN..=DISCOUNT_MAX).contains(&discount) {
        return Err(DomainError::validation(format!(
            "discount must be between {DISCOUNT_MIN} and {DISCOUNT_MAX}"
        )));
    }
    Ok(())
}
