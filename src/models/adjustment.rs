use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Reasons, Record};
use crate::workflow::{Transition, WorkflowStatus};

/// Stock adjustment. Editable and deletable only while Open; Posting hands it
/// to approval and freezes the business fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub id: Uuid,
    pub reference: String,
    pub warehouse: String,
    pub item: String,
    /// Signed quantity delta; negative values shrink stock.
    pub quantity_delta: i64,
    pub reasons: Reasons,
    pub status: AdjustmentStatus,
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
pub enum AdjustmentStatus {
    Open,
    Pending,
    Done,
}

static TRANSITIONS: [Transition<AdjustmentStatus>; 2] = [
    Transition {
        from: AdjustmentStatus::Open,
        to: AdjustmentStatus::Pending,
        action: "Post",
    },
    Transition {
        from: AdjustmentStatus::Pending,
        to: AdjustmentStatus::Done,
        action: "Approve",
    },
];

impl WorkflowStatus for AdjustmentStatus {
    fn initial() -> Self {
        AdjustmentStatus::Open
    }

    fn transitions() -> &'static [Transition<Self>] {
        &TRANSITIONS
    }
}

impl Record for Adjustment {
    const KIND: EntityKind = EntityKind::Adjustment;

    fn id(&self) -> Uuid {
        self.id
    }
}
