use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{errors::DomainError, query::SortOrder};

pub const USER_NAME_MAX_CHARS: usize = 20;
pub const MAIL_MAX_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct User {
    pub uuid: Uuid,
    pub user_name: String,
    pub mail: String,
    pub password_hash: String,
    pub is_blocked: bool,
    pub sign_up_date: DateTime<Utc>,
    pub is_deleted: bool,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: String,
    pub mail: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.user_name.trim().is_empty() {
            return Err(DomainError::validation("user_name must not be blank"));
        }
        if self.user_name.chars().count() > USER_NAME_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "user_name must be at most {USER_NAME_MAX_CHARS} characters"
            )));
        }
        if self.mail.trim().is_empty() {
            return Err(DomainError::validation("mail must not be blank"));
        }
        if self.mail.chars().count() > MAIL_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "mail must be at most {MAIL_MAX_CHARS} characters"
            )));
        }
        Ok(())
    }
}

/// Moderation commands applied to a user through the commands endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserLifecycleCommand {
    Block,
    Unblock,
}

impl UserLifecycleCommand {
    pub fn target_blocked(self) -> bool {
        matches!(self, Self::Block)
    }
}

/// Conjunctive equality filters over users; absent fields do not constrain the
/// listing. Sort key is always `sign_up_date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserListCriteria {
    pub is_blocked: Option<bool>,
    pub is_deleted: Option<bool>,
    pub order: Option<SortOrder>,
}

impl UserListCriteria {
    pub fn matches(&self, user: &User) -> bool {
        self.is_blocked.is_none_or(|wanted| user.is_blocked == wanted)
            && self.is_deleted.is_none_or(|wanted| user.is_deleted == wanted)
    }
}
