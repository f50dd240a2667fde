use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Record};
use crate::workflow::{Transition, WorkflowStatus};

/// Outbound delivery for a sales order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: Uuid,
    pub reference: String,
    pub order_reference: String,
    pub customer: String,
    pub address: String,
    pub courier: String,
    pub status: DeliveryStatus,
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
pub enum DeliveryStatus {
    Pending,
    #[serde(rename = "In Transit")]
    #[strum(serialize = "In Transit")]
    InTransit,
    Delivered,
}

static TRANSITIONS: [Transition<DeliveryStatus>; 2] = [
    Transition {
        from: DeliveryStatus::Pending,
        to: DeliveryStatus::InTransit,
        action: "Dispatch",
    },
    Transition {
        from: DeliveryStatus::InTransit,
        to: DeliveryStatus::Delivered,
        action: "Mark Delivered",
    },
];

impl WorkflowStatus for DeliveryStatus {
    fn initial() -> Self {
        DeliveryStatus::Pending
    }

    fn transitions() -> &'static [Transition<Self>] {
        &TRANSITIONS
    }
}

impl Record for Delivery {
    const KIND: EntityKind = EntityKind::Delivery;

    fn id(&self) -> Uuid {
        self.id
    }
}
