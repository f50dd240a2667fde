use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Record, RecordStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: Uuid,
    pub reference: String,
    pub name: String,
    pub location: String,
    pub manager: String,
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Record for Warehouse {
    const KIND: EntityKind = EntityKind::Warehouse;

    fn id(&self) -> Uuid {
        self.id
    }
}
