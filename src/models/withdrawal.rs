use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Reasons, Record};
use crate::workflow::{Transition, WorkflowStatus};

/// Stock withdrawal issued to a customer. Same Post/Approve lifecycle as an
/// adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: Uuid,
    pub reference: String,
    pub warehouse: String,
    pub customer: String,
    pub item: String,
    pub quantity: i64,
    pub reasons: Reasons,
    pub status: WithdrawalStatus,
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
pub enum WithdrawalStatus {
    Open,
    Pending,
    Done,
}

static TRANSITIONS: [Transition<WithdrawalStatus>; 2] = [
    Transition {
        from: WithdrawalStatus::Open,
        to: WithdrawalStatus::Pending,
        action: "Post",
    },
    Transition {
        from: WithdrawalStatus::Pending,
        to: WithdrawalStatus::Done,
        action: "Approve",
    },
];

impl WorkflowStatus for WithdrawalStatus {
    fn initial() -> Self {
        WithdrawalStatus::Open
    }

    fn transitions() -> &'static [Transition<Self>] {
        &TRANSITIONS
    }
}

impl Record for Withdrawal {
    const KIND: EntityKind = EntityKind::Withdrawal;

    fn id(&self) -> Uuid {
        self.id
    }
}
