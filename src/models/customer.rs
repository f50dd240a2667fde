use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Record, RecordStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub reference: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Record for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn id(&self) -> Uuid {
        self.id
    }
}
