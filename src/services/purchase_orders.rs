use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{AuditInfo, EntityKind, PurchaseOrder, PurchaseOrderStatus};
use crate::store::SharedStore;
use crate::workflow::{self, NextAction, WorkflowStatus};

#[derive(Clone)]
pub struct PurchaseOrderService {
    store: SharedStore,
}

#[derive(Debug, Deserialize)]
pub struct CreatePurchaseOrder {
    pub supplier: String,
    pub warehouse: String,
    pub item: String,
    pub quantity: i64,
    #[serde(default)]
    pub expected_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePurchaseOrder {
    pub supplier: Option<String>,
    pub warehouse: Option<String>,
    pub item: Option<String>,
    pub quantity: Option<i64>,
    pub expected_date: Option<NaiveDate>,
}

impl PurchaseOrderService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<PurchaseOrder> {
        self.store.read().await.purchase_orders.to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<PurchaseOrder, ServiceError> {
        self.store
            .read()
            .await
            .purchase_orders
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(
                EntityKind::PurchaseOrder.label(),
                id,
            ))
    }

    pub async fn create(
        &self,
        actor: &str,
        input: CreatePurchaseOrder,
    ) -> Result<PurchaseOrder, ServiceError> {
        let mut store = self.store.write().await;
        let purchase_order = PurchaseOrder {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::PurchaseOrder),
            supplier: input.supplier,
            warehouse: input.warehouse,
            item: input.item,
            quantity: input.quantity.max(0),
            expected_date: input.expected_date,
            status: PurchaseOrderStatus::initial(),
            audit: AuditInfo::created(actor),
        };
        store.purchase_orders.insert(purchase_order.clone())?;
        info!(reference = %purchase_order.reference, "purchase order created");
        Ok(purchase_order)
    }

    pub async fn update(
        &self,
        actor: &str,
        id: Uuid,
        input: UpdatePurchaseOrder,
    ) -> Result<PurchaseOrder, ServiceError> {
        let mut store = self.store.write().await;
        let current = store.purchase_orders.get(id).ok_or(
            ServiceError::not_found(EntityKind::PurchaseOrder.label(), id),
        )?;
        if current.status != PurchaseOrderStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "edited",
            });
        }
        store.purchase_orders.update_with(id, |purchase_order| {
            if let Some(supplier) = input.supplier {
                purchase_order.supplier = supplier;
            }
            if let Some(warehouse) = input.warehouse {
                purchase_order.warehouse = warehouse;
            }
            if let Some(item) = input.item {
                purchase_order.item = item;
            }
            if let Some(quantity) = input.quantity {
                purchase_order.quantity = quantity.max(0);
            }
            if let Some(expected_date) = input.expected_date {
                purchase_order.expected_date = Some(expected_date);
            }
            purchase_order.audit.touch(actor);
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut store = self.store.write().await;
        let current = store.purchase_orders.get(id).ok_or(
            ServiceError::not_found(EntityKind::PurchaseOrder.label(), id),
        )?;
        if current.status != PurchaseOrderStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "deleted",
            });
        }
        let removed = store.purchase_orders.remove(id)?;
        info!(reference = %removed.reference, "purchase order deleted");
        Ok(())
    }

    pub async fn next_action(&self, id: Uuid) -> Result<Option<NextAction>, ServiceError> {
        let purchase_order = self.get(id).await?;
        Ok(workflow::next_transition(purchase_order.status, true).map(NextAction::of))
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn advance(&self, actor: &str, id: Uuid) -> Result<PurchaseOrder, ServiceError> {
        let mut store = self.store.write().await;
        let current = store.purchase_orders.get(id).ok_or(
            ServiceError::not_found(EntityKind::PurchaseOrder.label(), id),
        )?;
        let transition = workflow::advance(current.status, true)?;
        let updated = store.purchase_orders.update_with(id, |purchase_order| {
            purchase_order.status = transition.to;
            purchase_order.audit.touch(actor);
        })?;
        info!(
            reference = %updated.reference,
            action = transition.action,
            to = %transition.to,
            "purchase order transitioned"
        );
        Ok(updated)
    }
}
