use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::dto::{ApplyUserCommandRequest, ListUsersQueryRequest, UserResponse},
    domain::errors::DomainError,
    infrastructure::UserStore,
};

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn list_users(
        &self,
        query: ListUsersQueryRequest,
    ) -> Result<Vec<UserResponse>, DomainError> {
        let users = self.store.list_users(query.into_criteria()).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn apply_lifecycle_command(
        &self,
        uuid: Uuid,
        request: ApplyUserCommandRequest,
    ) -> Result<UserResponse, DomainError> {
        let Some(mut user) = self.store.user_by_id(uuid).await? else {
            return Err(DomainError::not_found("user not found"));
        };

        user.is_blocked = request.command.into_domain().target_blocked();
        let saved = self.store.save_user(user).await?;
        Ok(UserResponse::from(saved))
    }

    /// Hard delete; the store cascades to the user's reviews. Returns the
    /// last-known snapshot of the removed row.
    pub async fn delete_user(&self, uuid: Uuid) -> Result<UserResponse, DomainError> {
        let Some(removed) = self.store.delete_user(uuid).await? else {
            return Err(DomainError::not_found("user not found"));
        };
        Ok(UserResponse::from(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::dto::UserCommandRequest,
        domain::user::NewUser,
        infrastructure::memory::MemoryStore,
    };

    async fn service_with_user() -> (UserService, Uuid) {
        let store = Arc::new(MemoryStore::new());
        let created = store
            .create_user(NewUser {
                user_name: "moderated".to_string(),
                mail: "moderated@example.com".to_string(),
                password_hash: "$2b$12$hash".to_string(),
            })
            .await
            .expect("user should be created");
        (UserService::new(store), created.uuid)
    }

    #[tokio::test]
    async fn block_then_unblock_round_trips() {
        let (service, uuid) = service_with_user().await;

        let blocked = service
            .apply_lifecycle_command(
                uuid,
                ApplyUserCommandRequest {
                    command: UserCommandRequest::Block,
                },
            )
            .await
            .expect("block should succeed");
        assert!(blocked.is_blocked);

        let unblocked = service
            .apply_lifecycle_command(
                uuid,
                ApplyUserCommandRequest {
                    command: UserCommandRequest::Unblock,
                },
            )
            .await
            .expect("unblock should succeed");
        assert!(!unblocked.is_blocked);
    }

    #[tokio::test]
    async fn commands_on_missing_users_are_not_found() {
        let (service, _uuid) = service_with_user().await;

        let result = service
            .apply_lifecycle_command(
                Uuid::new_v4(),
                ApplyUserCommandRequest {
                    command: UserCommandRequest::Block,
                },
            )
            .await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_returns_last_known_snapshot() {
        let (service, uuid) = service_with_user().await;

        let snapshot = service.delete_user(uuid).await.expect("delete should succeed");
        assert_eq!(snapshot.uuid, uuid);

        let second = service.delete_user(uuid).await;
        assert!(matches!(second, Err(DomainError::NotFound(_))));
    }
}
