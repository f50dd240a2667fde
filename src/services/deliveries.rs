use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{AuditInfo, Delivery, DeliveryStatus, EntityKind};
use crate::store::SharedStore;
use crate::workflow::{self, NextAction, WorkflowStatus};

#[derive(Clone)]
pub struct DeliveryService {
    store: SharedStore,
}

#[derive(Debug, Deserialize)]
pub struct CreateDelivery {
    pub order_reference: String,
    pub customer: String,
    pub address: String,
    pub courier: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateDelivery {
    pub order_reference: Option<String>,
    pub customer: Option<String>,
    pub address: Option<String>,
    pub courier: Option<String>,
}

impl DeliveryService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Delivery> {
        self.store.read().await.deliveries.to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<Delivery, ServiceError> {
        self.store
            .read()
            .await
            .deliveries
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(EntityKind::Delivery.label(), id))
    }

    pub async fn create(
        &self,
        actor: &str,
        input: CreateDelivery,
    ) -> Result<Delivery, ServiceError> {
        let mut store = self.store.write().await;
        let delivery = Delivery {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::Delivery),
            order_reference: input.order_reference,
            customer: input.customer,
            address: input.address,
            courier: input.courier,
            status: DeliveryStatus::initial(),
            audit: AuditInfo::created(actor),
        };
        store.deliveries.insert(delivery.clone())?;
        info!(reference = %delivery.reference, "delivery created");
        Ok(delivery)
    }

    pub async fn update(
        &self,
        actor: &str,
        id: Uuid,
        input: UpdateDelivery,
    ) -> Result<Delivery, ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .deliveries
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Delivery.label(), id))?;
        if current.status != DeliveryStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "edited",
            });
        }
        store.deliveries.update_with(id, |delivery| {
            if let Some(order_reference) = input.order_reference {
                delivery.order_reference = order_reference;
            }
            if let Some(customer) = input.customer {
                delivery.customer = customer;
            }
            if let Some(address) = input.address {
                delivery.address = address;
            }
            if let Some(courier) = input.courier {
                delivery.courier = courier;
            }
            delivery.audit.touch(actor);
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .deliveries
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Delivery.label(), id))?;
        if current.status != DeliveryStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "deleted",
            });
        }
        let removed = store.deliveries.remove(id)?;
        info!(reference = %removed.reference, "delivery deleted");
        Ok(())
    }

    pub async fn next_action(&self, id: Uuid) -> Result<Option<NextAction>, ServiceError> {
        let delivery = self.get(id).await?;
        Ok(workflow::next_transition(delivery.status, true).map(NextAction::of))
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn advance(&self, actor: &str, id: Uuid) -> Result<Delivery, ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .deliveries
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Delivery.label(), id))?;
        let transition = workflow::advance(current.status, true)?;
        let updated = store.deliveries.update_with(id, |delivery| {
            delivery.status = transition.to;
            delivery.audit.touch(actor);
        })?;
        info!(
            reference = %updated.reference,
            action = transition.action,
            to = %transition.to,
            "delivery transitioned"
        );
        Ok(updated)
    }
}
