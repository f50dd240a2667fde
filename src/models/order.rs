use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Record};
use crate::workflow::{Transition, WorkflowStatus};

/// Sales order. Staff tasks (picking, scanning, tagging, checking) hang off
/// an order by its reference code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub reference: String,
    pub customer: String,
    pub warehouse: String,
    pub item: String,
    pub quantity: i64,
    pub status: OrderStatus,
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
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
}

static TRANSITIONS: [Transition<OrderStatus>; 2] = [
    Transition {
        from: OrderStatus::Pending,
        to: OrderStatus::Processing,
        action: "Process",
    },
    Transition {
        from: OrderStatus::Processing,
        to: OrderStatus::Completed,
        action: "Complete",
    },
];

impl WorkflowStatus for OrderStatus {
    fn initial() -> Self {
        OrderStatus::Pending
    }

    fn transitions() -> &'static [Transition<Self>] {
        &TRANSITIONS
    }
}

impl Record for Order {
    const KIND: EntityKind = EntityKind::Order;

    fn id(&self) -> Uuid {
        self.id
    }
}
