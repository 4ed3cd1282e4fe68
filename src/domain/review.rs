use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{errors::DomainError, query::SortOrder};

pub const CONTENT_MIN_CHARS: usize = 1;
pub const CONTENT_MAX_CHARS: usize = 100;
pub const RATING_MIN: i32 = 0;
pub const RATING_MAX: i32 = 5;

#[derive(Debug, Clone)]
pub struct Review {
    pub review_id: i64,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub submission_date: DateTime<Utc>,
    pub rating: i32,
    /// Soft delete: the row stays in storage and remains listable.
    pub is_deleted: bool,
    pub is_flagged: bool,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub rating: i32,
}

/// Conjunctive equality filters over reviews; sort key is always
/// `submission_date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewListCriteria {
    pub is_flagged: Option<bool>,
    pub rating: Option<i32>,
    pub is_deleted: Option<bool>,
    pub order: Option<SortOrder>,
}

impl ReviewListCriteria {
    pub fn matches(&self, review: &Review) -> bool {
        self.is_flagged.is_none_or(|wanted| review.is_flagged == wanted)
            && self.rating.is_none_or(|wanted| review.rating == wanted)
            && self.is_deleted.is_none_or(|wanted| review.is_deleted == wanted)
    }
}

pub fn validate_content(content: &str) -> Result<(), DomainError> {
    let length = content.chars().count();
    if !(CONTENT_MIN_CHARS..=CONTENT_MAX_CHARS).contains(&length) {
        return Err(DomainError::validation(format!(
            "content must be between {CONTENT_MIN_CHARS} and {CONTENT_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

pub fn validate_rating(rating: i32) -> Result<(), DomainError> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(DomainError::validation(format!(
            "rating must be between {RATING_MIN} and {RATING_MAX}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_bounds_are_inclusive() {
        assert!(validate_content("").is_err());
        assert!(validate_content("x").is_ok());
        assert!(validate_content(&"x".repeat(100)).is_ok());
        assert!(validate_content(&"x".repeat(101)).is_err());
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(validate_rating(-1).is_err());
        assert!(validate_rating(0).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(6).is_err());
    }
}
