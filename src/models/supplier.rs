use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Record, RecordStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub reference: String,
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Record for Supplier {
    const KIND: EntityKind = EntityKind::Supplier;

    fn id(&self) -> Uuid {
        self.id
    }
}
