use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Record};
use crate::workflow::{Transition, WorkflowStatus};

/// Purchase order placed with a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: Uuid,
    pub reference: String,
    pub supplier: String,
    pub warehouse: String,
    pub item: String,
    pub quantity: i64,
    pub expected_date: Option<NaiveDate>,
    pub status: PurchaseOrderStatus,
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
pub enum PurchaseOrderStatus {
    Open,
    Ordered,
    Received,
}

static TRANSITIONS: [Transition<PurchaseOrderStatus>; 2] = [
    Transition {
        from: PurchaseOrderStatus::Open,
        to: PurchaseOrderStatus::Ordered,
        action: "Place Order",
    },
    Transition {
        from: PurchaseOrderStatus::Ordered,
        to: PurchaseOrderStatus::Received,
        action: "Receive",
    },
];

impl WorkflowStatus for PurchaseOrderStatus {
    fn initial() -> Self {
        PurchaseOrderStatus::Open
    }

    fn transitions() -> &'static [Transition<Self>] {
        &TRANSITIONS
    }
}

impl Record for PurchaseOrder {
    const KIND: EntityKind = EntityKind::PurchaseOrder;

    fn id(&self) -> Uuid {
        self.id
    }
}
