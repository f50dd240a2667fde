use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{AuditInfo, EntityKind, Order, OrderStatus};
use crate::store::SharedStore;
use crate::workflow::{self, NextAction, WorkflowStatus};

#[derive(Clone)]
pub struct OrderService {
    store: SharedStore,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrder {
    pub customer: String,
    pub warehouse: String,
    pub item: String,
    pub quantity: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateOrder {
    pub customer: Option<String>,
    pub warehouse: Option<String>,
    pub item: Option<String>,
    pub quantity: Option<i64>,
}

impl OrderService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Order> {
        self.store.read().await.orders.to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<Order, ServiceError> {
        self.store
            .read()
            .await
            .orders
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(EntityKind::Order.label(), id))
    }

    pub async fn create(&self, actor: &str, input: CreateOrder) -> Result<Order, ServiceError> {
        let mut store = self.store.write().await;
        let order = Order {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::Order),
            customer: input.customer,
            warehouse: input.warehouse,
            item: input.item,
            quantity: input.quantity.max(0),
            status: OrderStatus::initial(),
            audit: AuditInfo::created(actor),
        };
        store.orders.insert(order.clone())?;
        info!(reference = %order.reference, "order created");
        Ok(order)
    }

    pub async fn update(
        &self,
        actor: &str,
        id: Uuid,
        input: UpdateOrder,
    ) -> Result<Order, ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .orders
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Order.label(), id))?;
        if current.status != OrderStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "edited",
            });
        }
        store.orders.update_with(id, |order| {
            if let Some(customer) = input.customer {
                order.customer = customer;
            }
            if let Some(warehouse) = input.warehouse {
                order.warehouse = warehouse;
            }
            if let Some(item) = input.item {
                order.item = item;
            }
            if let Some(quantity) = input.quantity {
                order.quantity = quantity.max(0);
            }
            order.audit.touch(actor);
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .orders
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Order.label(), id))?;
        if current.status != OrderStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "deleted",
            });
        }
        let removed = store.orders.remove(id)?;
        info!(reference = %removed.reference, "order deleted");
        Ok(())
    }

    pub async fn next_action(&self, id: Uuid) -> Result<Option<NextAction>, ServiceError> {
        let order = self.get(id).await?;
        Ok(workflow::next_transition(order.status, true).map(NextAction::of))
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn advance(&self, actor: &str, id: Uuid) -> Result<Order, ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .orders
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Order.label(), id))?;
        let transition = workflow::advance(current.status, true)?;
        let updated = store.orders.update_with(id, |order| {
            order.status = transition.to;
            order.audit.touch(actor);
        })?;
        info!(
            reference = %updated.reference,
            action = transition.action,
            to = %transition.to,
            "order transitioned"
        );
        Ok(updated)
    }
}
