use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Record, RecordStatus};

/// Dashboard role. `Superadmin` bypasses role checks at the route guard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Superadmin,
    Admin,
    Manager,
    Operator,
}

/// Mock user registry entry. There is no real identity provider behind this;
/// login simply resolves a username against the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub reference: String,
    pub username: String,
    pub display_name: String,
    pub role: Role,
    /// Explicit permission grants; `*` satisfies any requirement.
    pub permissions: Vec<String>,
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Record for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> Uuid {
        self.id
    }
}
