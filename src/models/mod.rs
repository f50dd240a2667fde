//! Flat record types for every entity kind the dashboard manages.
//!
//! Every record carries a generated immutable id, a human-facing reference
//! code, a kind-specific status enumeration and an audit block. Business
//! fields reference warehouses/suppliers/customers by name, matching the
//! dashboard's string-keyed selects.

use uuid::Uuid;

mod adjustment;
mod audit;
mod customer;
mod customer_return;
mod delivery;
mod item;
mod order;
mod purchase_order;
mod reasons;
mod staff_task;
mod supplier;
mod transfer;
mod user;
mod warehouse;
mod withdrawal;

pub use adjustment::{Adjustment, AdjustmentStatus};
pub use audit::AuditInfo;
pub use customer::Customer;
pub use customer_return::{CustomerReturn, ReturnStatus};
pub use delivery::{Delivery, DeliveryStatus};
pub use item::Item;
pub use order::{Order, OrderStatus};
pub use purchase_order::{PurchaseOrder, PurchaseOrderStatus};
pub use reasons::Reasons;
pub use staff_task::{
    BarcoderStatus, BarcoderTask, CheckerStatus, CheckerTask, PickerStatus, PickerTask,
    StaffTask, TaggerStatus, TaggerTask, TransferTaskStatus, TransferTask,
};
pub use supplier::Supplier;
pub use transfer::{Transfer, TransferStatus};
pub use user::{Role, User};
pub use warehouse::Warehouse;
pub use withdrawal::{Withdrawal, WithdrawalStatus};

/// Every entity kind held by the store. Carries the reference-code format
/// metadata so codes like `ADJ-001` / `CR-0001` come from one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Item,
    PurchaseOrder,
    Adjustment,
    Withdrawal,
    Transfer,
    Delivery,
    Order,
    CustomerReturn,
    Supplier,
    Warehouse,
    Customer,
    PickerTask,
    BarcoderTask,
    TaggerTask,
    CheckerTask,
    TransferTask,
    User,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Item => "item",
            EntityKind::PurchaseOrder => "purchase order",
            EntityKind::Adjustment => "adjustment",
            EntityKind::Withdrawal => "withdrawal",
            EntityKind::Transfer => "transfer",
            EntityKind::Delivery => "delivery",
            EntityKind::Order => "order",
            EntityKind::CustomerReturn => "customer return",
            EntityKind::Supplier => "supplier",
            EntityKind::Warehouse => "warehouse",
            EntityKind::Customer => "customer",
            EntityKind::PickerTask => "picker task",
            EntityKind::BarcoderTask => "barcoder task",
            EntityKind::TaggerTask => "tagger task",
            EntityKind::CheckerTask => "checker task",
            EntityKind::TransferTask => "transfer task",
            EntityKind::User => "user",
        }
    }

    pub fn reference_prefix(self) -> &'static str {
        match self {
            EntityKind::Item => "ITM",
            EntityKind::PurchaseOrder => "PO",
            EntityKind::Adjustment => "ADJ",
            EntityKind::Withdrawal => "WTH",
            EntityKind::Transfer => "TRF",
            EntityKind::Delivery => "DLV",
            EntityKind::Order => "ORD",
            EntityKind::CustomerReturn => "CR",
            EntityKind::Supplier => "SUP",
            EntityKind::Warehouse => "WH",
            EntityKind::Customer => "CUS",
            EntityKind::PickerTask => "PCK",
            EntityKind::BarcoderTask => "BCD",
            EntityKind::TaggerTask => "TAG",
            EntityKind::CheckerTask => "CHK",
            EntityKind::TransferTask => "TRA",
            EntityKind::User => "USR",
        }
    }

    /// Zero-pad width of the sequence part. Customer returns use four digits
    /// (`CR-0001`), everything else three.
    pub fn reference_width(self) -> usize {
        match self {
            EntityKind::CustomerReturn => 4,
            _ => 3,
        }
    }
}

/// Implemented by every stored record type.
pub trait Record: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> Uuid;
}

/// Lifecycle status for master data (items, suppliers, warehouses, customers).
/// No workflow chain; toggled directly through Edit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl Default for RecordStatus {
    fn default() -> Self {
        RecordStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_widths() {
        assert_eq!(EntityKind::CustomerReturn.reference_width(), 4);
        assert_eq!(EntityKind::Adjustment.reference_width(), 3);
    }

    #[test]
    fn record_status_round_trips_through_strum() {
        use std::str::FromStr;
        assert_eq!(RecordStatus::Active.to_string(), "Active");
        assert_eq!(
            RecordStatus::from_str("Inactive").unwrap(),
            RecordStatus::Inactive
        );
    }
}
