use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Reasons, Record};
use crate::workflow::{Transition, WorkflowStatus};

/// Customer return against a completed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerReturn {
    pub id: Uuid,
    pub reference: String,
    pub order_reference: String,
    pub customer: String,
    pub item: String,
    pub quantity: i64,
    pub reasons: Reasons,
    pub status: ReturnStatus,
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
pub enum ReturnStatus {
    Pending,
    Received,
    Done,
}

static TRANSITIONS: [Transition<ReturnStatus>; 2] = [
    Transition {
        from: ReturnStatus::Pending,
        to: ReturnStatus::Received,
        action: "Receive Items",
    },
    Transition {
        from: ReturnStatus::Received,
        to: ReturnStatus::Done,
        action: "Close",
    },
];

impl WorkflowStatus for ReturnStatus {
    fn initial() -> Self {
        ReturnStatus::Pending
    }

    fn transitions() -> &'static [Transition<Self>] {
        &TRANSITIONS
    }
}

impl Record for CustomerReturn {
    const KIND: EntityKind = EntityKind::CustomerReturn;

    fn id(&self) -> Uuid {
        self.id
    }
}
