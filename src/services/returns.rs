use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{AuditInfo, CustomerReturn, EntityKind, Reasons, ReturnStatus};
use crate::store::SharedStore;
use crate::workflow::{self, NextAction, WorkflowStatus};

#[derive(Clone)]
pub struct ReturnService {
    store: SharedStore,
}

#[derive(Debug, Deserialize)]
pub struct CreateReturn {
    pub order_reference: String,
    pub customer: String,
    pub item: String,
    pub quantity: i64,
    #[serde(default)]
    pub reasons: Reasons,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateReturn {
    pub order_reference: Option<String>,
    pub customer: Option<String>,
    pub item: Option<String>,
    pub quantity: Option<i64>,
    pub reasons: Option<Reasons>,
}

impl ReturnService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<CustomerReturn> {
        self.store.read().await.customer_returns.to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<CustomerReturn, ServiceError> {
        self.store
            .read()
            .await
            .customer_returns
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(
                EntityKind::CustomerReturn.label(),
                id,
            ))
    }

    pub async fn create(
        &self,
        actor: &str,
        input: CreateReturn,
    ) -> Result<CustomerReturn, ServiceError> {
        let mut store = self.store.write().await;
        let customer_return = CustomerReturn {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::CustomerReturn),
            order_reference: input.order_reference,
            customer: input.customer,
            item: input.item,
            quantity: input.quantity.max(0),
            reasons: input.reasons,
            status: ReturnStatus::initial(),
            audit: AuditInfo::created(actor),
        };
        store.customer_returns.insert(customer_return.clone())?;
        info!(reference = %customer_return.reference, "customer return created");
        Ok(customer_return)
    }

    pub async fn update(
        &self,
        actor: &str,
        id: Uuid,
        input: UpdateReturn,
    ) -> Result<CustomerReturn, ServiceError> {
        let mut store = self.store.write().await;
        let current = store.customer_returns.get(id).ok_or(
            ServiceError::not_found(EntityKind::CustomerReturn.label(), id),
        )?;
        if current.status != ReturnStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "edited",
            });
        }
        store.customer_returns.update_with(id, |customer_return| {
            if let Some(order_reference) = input.order_reference {
                customer_return.order_reference = order_reference;
            }
            if let Some(customer) = input.customer {
                customer_return.customer = customer;
            }
            if let Some(item) = input.item {
                customer_return.item = item;
            }
            if let Some(quantity) = input.quantity {
                customer_return.quantity = quantity.max(0);
            }
            if let Some(reasons) = input.reasons {
                customer_return.reasons = reasons;
            }
            customer_return.audit.touch(actor);
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut store = self.store.write().await;
        let current = store.customer_returns.get(id).ok_or(
            ServiceError::not_found(EntityKind::CustomerReturn.label(), id),
        )?;
        if current.status != ReturnStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "deleted",
            });
        }
        let removed = store.customer_returns.remove(id)?;
        info!(reference = %removed.reference, "customer return deleted");
        Ok(())
    }

    pub async fn next_action(&self, id: Uuid) -> Result<Option<NextAction>, ServiceError> {
        let customer_return = self.get(id).await?;
        Ok(workflow::next_transition(customer_return.status, true).map(NextAction::of))
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn advance(&self, actor: &str, id: Uuid) -> Result<CustomerReturn, ServiceError> {
        let mut store = self.store.write().await;
        let current = store.customer_returns.get(id).ok_or(
            ServiceError::not_found(EntityKind::CustomerReturn.label(), id),
        )?;
        let transition = workflow::advance(current.status, true)?;
        let updated = store.customer_returns.update_with(id, |customer_return| {
            customer_return.status = transition.to;
            customer_return.audit.touch(actor);
        })?;
        info!(
            reference = %updated.reference,
            action = transition.action,
            to = %transition.to,
            "customer return transitioned"
        );
        Ok(updated)
    }
}
