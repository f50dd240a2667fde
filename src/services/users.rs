use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::auth;
use crate::errors::ServiceError;
use crate::models::{AuditInfo, EntityKind, RecordStatus, Role, User};
use crate::store::SharedStore;

/// Mock user registry management. Usernames are unique; a user created
/// without explicit permissions gets the role's default grant set.
#[derive(Clone)]
pub struct UserService {
    store: SharedStore,
}

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub display_name: String,
    pub role: Role,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

impl UserService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<User> {
        self.store.read().await.users.to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<User, ServiceError> {
        self.store
            .read()
            .await
            .users
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(EntityKind::User.label(), id))
    }

    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        self.store
            .read()
            .await
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    pub async fn create(&self, actor: &str, input: CreateUser) -> Result<User, ServiceError> {
        let username = input.username.trim().to_string();
        if username.is_empty() {
            return Err(ServiceError::validation("username must not be blank"));
        }
        let mut store = self.store.write().await;
        if store.users.iter().any(|u| u.username == username) {
            return Err(ServiceError::validation(format!(
                "username '{username}' is already taken"
            )));
        }
        let user = User {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::User),
            username,
            display_name: input.display_name,
            role: input.role,
            permissions: input
                .permissions
                .unwrap_or_else(|| auth::default_permissions(input.role)),
            status: RecordStatus::Active,
            audit: AuditInfo::created(actor),
        };
        store.users.insert(user.clone())?;
        info!(username = %user.username, role = %user.role, "user created");
        Ok(user)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let removed = self.store.write().await.users.remove(id)?;
        info!(username = %removed.username, "user deleted");
        Ok(())
    }
}
