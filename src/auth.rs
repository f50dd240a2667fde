//! Authentication and route guarding.
//!
//! There is no real identity provider: the bearer token is the username of a
//! record in the mock user registry. What matters here is the admission
//! decision — a route declares an optional required role and/or permission,
//! the `superadmin` role bypasses role checks, and the wildcard `*`
//! permission satisfies any permission requirement. Denials surface as typed
//! errors; the HTTP edge maps them to 401/403.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ApiError, ServiceError};
use crate::handlers::AppState;
use crate::models::{RecordStatus, Role, User};

lazy_static! {
    /// Default permission grants per role, applied when a user record is
    /// created without an explicit permission list.
    pub static ref DEFAULT_ROLE_PERMISSIONS: HashMap<Role, Vec<&'static str>> = {
        let mut roles = HashMap::new();
        roles.insert(Role::Superadmin, vec!["*"]);
        roles.insert(
            Role::Admin,
            vec![
                "read:inventory",
                "write:inventory",
                "read:operations",
                "write:operations",
                "read:partners",
                "write:partners",
                "admin:users",
            ],
        );
        roles.insert(
            Role::Manager,
            vec![
                "read:inventory",
                "write:inventory",
                "read:operations",
                "write:operations",
                "read:partners",
            ],
        );
        roles.insert(Role::Operator, vec!["read:inventory", "read:operations"]);
        roles
    };
}

pub fn default_permissions(role: Role) -> Vec<String> {
    DEFAULT_ROLE_PERMISSIONS
        .get(&role)
        .map(|perms| perms.iter().map(|p| p.to_string()).collect())
        .unwrap_or_default()
}

/// The authenticated caller, resolved from the user registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
    pub display_name: String,
    pub role: Role,
    pub permissions: Vec<String>,
}

impl AuthUser {
    pub fn is_superadmin(&self) -> bool {
        self.role == Role::Superadmin
    }

    pub fn has_permission(&self, required: &str) -> bool {
        self.permissions
            .iter()
            .any(|granted| permission_grants(granted, required))
    }
}

impl From<&User> for AuthUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            role: user.role,
            permissions: user.permissions.clone(),
        }
    }
}

/// A granted permission satisfies a required one on exact match, or when the
/// grant is the `*` wildcard.
pub fn permission_grants(granted: &str, required: &str) -> bool {
    granted == "*" || granted == required
}

/// What a route declares about who may enter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteRequirement {
    pub role: Option<Role>,
    pub permission: Option<&'static str>,
}

impl RouteRequirement {
    pub fn permission(permission: &'static str) -> Self {
        Self {
            role: None,
            permission: Some(permission),
        }
    }

    pub fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            permission: None,
        }
    }

    pub fn and_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

/// The admission decision.
pub fn authorize(user: &AuthUser, requirement: &RouteRequirement) -> Result<(), ServiceError> {
    if let Some(role) = requirement.role {
        if !user.is_superadmin() && user.role != role {
            return Err(ServiceError::Forbidden(format!(
                "route requires role '{role}'"
            )));
        }
    }
    if let Some(permission) = requirement.permission {
        if !user.has_permission(permission) {
            return Err(ServiceError::Forbidden(format!(
                "route requires permission '{permission}'"
            )));
        }
    }
    Ok(())
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

async fn resolve_user(state: &AppState, headers: &HeaderMap) -> Result<AuthUser, ServiceError> {
    let token = bearer_token(headers).ok_or(ServiceError::Unauthorized)?;
    let store = state.store.read().await;
    store
        .users
        .iter()
        .find(|u| u.username == token && u.status == RecordStatus::Active)
        .map(AuthUser::from)
        .ok_or(ServiceError::Unauthorized)
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }
        Ok(resolve_user(state, &parts.headers).await?)
    }
}

/// State carried by the guard middleware: the app plus the declared
/// requirement of the wrapped routes.
#[derive(Clone)]
pub struct GuardState {
    pub app: Arc<AppState>,
    pub requirement: RouteRequirement,
}

/// Route-guard middleware. Authenticates the caller, checks the declared
/// requirement, and stashes the user in request extensions for handlers.
pub async fn guard(
    State(guard): State<GuardState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = resolve_user(&guard.app, request.headers()).await?;
    authorize(&user, &guard.requirement)?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, permissions: &[&str]) -> AuthUser {
        AuthUser {
            user_id: Uuid::new_v4(),
            username: "test".into(),
            display_name: "Test User".into(),
            role,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn user_with_defaults(role: Role) -> AuthUser {
        AuthUser {
            user_id: Uuid::new_v4(),
            username: "test".into(),
            display_name: "Test User".into(),
            role,
            permissions: default_permissions(role),
        }
    }

    #[test]
    fn operator_without_write_permission_is_denied() {
        let operator = user(Role::Operator, &["read:inventory"]);
        let requirement = RouteRequirement::permission("write:inventory");
        assert!(authorize(&operator, &requirement).is_err());
    }

    #[test]
    fn superadmin_bypasses_role_requirement() {
        let superadmin = user(Role::Superadmin, &["*"]);
        let requirement = RouteRequirement::role(Role::Admin);
        assert!(authorize(&superadmin, &requirement).is_ok());
    }

    #[test]
    fn wildcard_permission_satisfies_anything() {
        let superadmin = user(Role::Superadmin, &["*"]);
        let requirement = RouteRequirement::permission("write:partners");
        assert!(authorize(&superadmin, &requirement).is_ok());
    }

    #[test]
    fn role_requirement_rejects_other_roles() {
        let manager = user(Role::Manager, &["read:inventory"]);
        let requirement = RouteRequirement::role(Role::Admin);
        assert!(matches!(
            authorize(&manager, &requirement),
            Err(ServiceError::Forbidden(_))
        ));
    }

    #[test]
    fn combined_requirement_needs_both() {
        let admin = user_with_defaults(Role::Admin);
        let requirement = RouteRequirement::permission("admin:users").and_role(Role::Admin);
        assert!(authorize(&admin, &requirement).is_ok());

        let manager = user_with_defaults(Role::Manager);
        assert!(authorize(&manager, &requirement).is_err());
    }

    #[test]
    fn default_permissions_cover_expected_roles() {
        assert_eq!(default_permissions(Role::Superadmin), vec!["*"]);
        assert!(default_permissions(Role::Operator)
            .iter()
            .all(|p| p.starts_with("read:")));
    }
}
