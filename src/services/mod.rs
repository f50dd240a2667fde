//! Service layer: one service per entity kind, all sharing the in-memory
//! [`EntityStore`](crate::store::EntityStore). Services own audit stamping,
//! reference assignment, the edit/delete status locks, and workflow
//! transitions with their side effects. Handlers stay thin.

mod adjustments;
mod customers;
mod deliveries;
mod items;
mod orders;
mod purchase_orders;
mod returns;
mod staff_tasks;
mod suppliers;
mod transfers;
mod users;
mod warehouses;
mod withdrawals;

pub use adjustments::{AdjustmentService, CreateAdjustment, UpdateAdjustment};
pub use customers::{CreateCustomer, CustomerService, UpdateCustomer};
pub use deliveries::{CreateDelivery, DeliveryService, UpdateDelivery};
pub use items::{CreateItem, ItemService, UpdateItem};
pub use orders::{CreateOrder, OrderService, UpdateOrder};
pub use purchase_orders::{CreatePurchaseOrder, PurchaseOrderService, UpdatePurchaseOrder};
pub use returns::{CreateReturn, ReturnService, UpdateReturn};
pub use staff_tasks::{CreateStaffTask, StaffTaskService, TaskKind, UpdateStaffTask};
pub use suppliers::{CreateSupplier, SupplierService, UpdateSupplier};
pub use transfers::{CreateTransfer, TransferService, UpdateTransfer};
pub use users::{CreateUser, UserService};
pub use warehouses::{CreateWarehouse, UpdateWarehouse, WarehouseService};
pub use withdrawals::{CreateWithdrawal, UpdateWithdrawal, WithdrawalService};

use crate::models::{
    BarcoderStatus, CheckerStatus, PickerStatus, TaggerStatus, TransferTaskStatus,
};
use crate::store::SharedStore;

/// Every service, wired to one shared store.
#[derive(Clone)]
pub struct AppServices {
    pub items: ItemService,
    pub suppliers: SupplierService,
    pub warehouses: WarehouseService,
    pub customers: CustomerService,
    pub purchase_orders: PurchaseOrderService,
    pub orders: OrderService,
    pub adjustments: AdjustmentService,
    pub withdrawals: WithdrawalService,
    pub transfers: TransferService,
    pub deliveries: DeliveryService,
    pub customer_returns: ReturnService,
    pub picker_tasks: StaffTaskService<PickerStatus>,
    pub barcoder_tasks: StaffTaskService<BarcoderStatus>,
    pub tagger_tasks: StaffTaskService<TaggerStatus>,
    pub checker_tasks: StaffTaskService<CheckerStatus>,
    pub transfer_tasks: StaffTaskService<TransferTaskStatus>,
    pub users: UserService,
}

impl AppServices {
    pub fn new(store: SharedStore) -> Self {
        Self {
            items: ItemService::new(store.clone()),
            suppliers: SupplierService::new(store.clone()),
            warehouses: WarehouseService::new(store.clone()),
            customers: CustomerService::new(store.clone()),
            purchase_orders: PurchaseOrderService::new(store.clone()),
            orders: OrderService::new(store.clone()),
            adjustments: AdjustmentService::new(store.clone()),
            withdrawals: WithdrawalService::new(store.clone()),
            transfers: TransferService::new(store.clone()),
            deliveries: DeliveryService::new(store.clone()),
            customer_returns: ReturnService::new(store.clone()),
            picker_tasks: StaffTaskService::new(store.clone()),
            barcoder_tasks: StaffTaskService::new(store.clone()),
            tagger_tasks: StaffTaskService::new(store.clone()),
            checker_tasks: StaffTaskService::new(store.clone()),
            transfer_tasks: StaffTaskService::new(store.clone()),
            users: UserService::new(store),
        }
    }
}
