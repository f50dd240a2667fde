use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Record, RecordStatus};

/// A stock item. Master data: no workflow chain, always editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub reference: String,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub quantity: i64,
    pub reorder_level: i64,
    pub warehouse: String,
    pub supplier: String,
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Record for Item {
    const KIND: EntityKind = EntityKind::Item;

    fn id(&self) -> Uuid {
        self.id
    }
}
