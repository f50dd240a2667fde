use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{AuditInfo, EntityKind, Transfer, TransferStatus};
use crate::store::SharedStore;
use crate::workflow::{self, NextAction, WorkflowStatus};

#[derive(Clone)]
pub struct TransferService {
    store: SharedStore,
}

#[derive(Debug, Deserialize)]
pub struct CreateTransfer {
    pub from_warehouse: String,
    pub to_warehouse: String,
    pub item: String,
    pub quantity: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTransfer {
    pub from_warehouse: Option<String>,
    pub to_warehouse: Option<String>,
    pub item: Option<String>,
    pub quantity: Option<i64>,
}

impl TransferService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Transfer> {
        self.store.read().await.transfers.to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<Transfer, ServiceError> {
        self.store
            .read()
            .await
            .transfers
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(EntityKind::Transfer.label(), id))
    }

    /// Transfers enter the chain already Approved, so creation stamps the
    /// approval audit fields alongside the created ones.
    pub async fn create(
        &self,
        actor: &str,
        input: CreateTransfer,
    ) -> Result<Transfer, ServiceError> {
        if input.from_warehouse == input.to_warehouse {
            return Err(ServiceError::validation(
                "source and destination warehouse must differ",
            ));
        }
        let mut store = self.store.write().await;
        let mut audit = AuditInfo::created(actor);
        audit.approve(actor);
        let transfer = Transfer {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::Transfer),
            from_warehouse: input.from_warehouse,
            to_warehouse: input.to_warehouse,
            item: input.item,
            quantity: input.quantity.max(0),
            status: TransferStatus::initial(),
            audit,
        };
        store.transfers.insert(transfer.clone())?;
        info!(reference = %transfer.reference, "transfer created");
        Ok(transfer)
    }

    pub async fn update(
        &self,
        actor: &str,
        id: Uuid,
        input: UpdateTransfer,
    ) -> Result<Transfer, ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .transfers
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Transfer.label(), id))?;
        if current.status != TransferStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "edited",
            });
        }
        store.transfers.update_with(id, |transfer| {
            if let Some(from_warehouse) = input.from_warehouse {
                transfer.from_warehouse = from_warehouse;
            }
            if let Some(to_warehouse) = input.to_warehouse {
                transfer.to_warehouse = to_warehouse;
            }
            if let Some(item) = input.item {
                transfer.item = item;
            }
            if let Some(quantity) = input.quantity {
                transfer.quantity = quantity.max(0);
            }
            transfer.audit.touch(actor);
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .transfers
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Transfer.label(), id))?;
        if current.status != TransferStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "deleted",
            });
        }
        let removed = store.transfers.remove(id)?;
        info!(reference = %removed.reference, "transfer deleted");
        Ok(())
    }

    pub async fn next_action(&self, id: Uuid) -> Result<Option<NextAction>, ServiceError> {
        let transfer = self.get(id).await?;
        Ok(workflow::next_transition(transfer.status, true).map(NextAction::of))
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn advance(&self, actor: &str, id: Uuid) -> Result<Transfer, ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .transfers
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Transfer.label(), id))?;
        let transition = workflow::advance(current.status, true)?;
        let updated = store.transfers.update_with(id, |transfer| {
            transfer.status = transition.to;
            transfer.audit.touch(actor);
        })?;
        info!(
            reference = %updated.reference,
            action = transition.action,
            to = %transition.to,
            "transfer transitioned"
        );
        Ok(updated)
    }
}
