use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Record};
use crate::workflow::{Transition, WorkflowStatus};

/// Inter-warehouse stock transfer. Created pre-approved by a manager, then
/// dispatched and completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: Uuid,
    pub reference: String,
    pub from_warehouse: String,
    pub to_warehouse: String,
    pub item: String,
    pub quantity: i64,
    pub status: TransferStatus,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum TransferStatus {
    Approved,
    #[serde(rename = "In Transit")]
    #[strum(serialize = "In Transit")]
    InTransit,
    Done,
}

static TRANSITIONS: [Transition<TransferStatus>; 2] = [
    Transition {
        from: TransferStatus::Approved,
        to: TransferStatus::InTransit,
        action: "Dispatch",
    },
    Transition {
        from: TransferStatus::InTransit,
        to: TransferStatus::Done,
        action: "Complete",
    },
];

impl WorkflowStatus for TransferStatus {
    fn initial() -> Self {
        TransferStatus::Approved
    }

    fn transitions() -> &'static [Transition<Self>] {
        &TRANSITIONS
    }
}

impl Record for Transfer {
    const KIND: EntityKind = EntityKind::Transfer;

    fn id(&self) -> Uuid {
        self.id
    }
}
