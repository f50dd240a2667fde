use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{AuditInfo, EntityKind, Reasons, Withdrawal, WithdrawalStatus};
use crate::store::SharedStore;
use crate::workflow::{self, NextAction, WorkflowStatus};

#[derive(Clone)]
pub struct WithdrawalService {
    store: SharedStore,
}

#[derive(Debug, Deserialize)]
pub struct CreateWithdrawal {
    pub warehouse: String,
    pub customer: String,
    pub item: String,
    pub quantity: i64,
    #[serde(default)]
    pub reasons: Reasons,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateWithdrawal {
    pub warehouse: Option<String>,
    pub customer: Option<String>,
    pub item: Option<String>,
    pub quantity: Option<i64>,
    pub reasons: Option<Reasons>,
}

impl WithdrawalService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Withdrawal> {
        self.store.read().await.withdrawals.to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<Withdrawal, ServiceError> {
        self.store
            .read()
            .await
            .withdrawals
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(EntityKind::Withdrawal.label(), id))
    }

    pub async fn create(
        &self,
        actor: &str,
        input: CreateWithdrawal,
    ) -> Result<Withdrawal, ServiceError> {
        let mut store = self.store.write().await;
        let withdrawal = Withdrawal {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::Withdrawal),
            warehouse: input.warehouse,
            customer: input.customer,
            item: input.item,
            quantity: input.quantity.max(0),
            reasons: input.reasons,
            status: WithdrawalStatus::initial(),
            audit: AuditInfo::created(actor),
        };
        store.withdrawals.insert(withdrawal.clone())?;
        info!(reference = %withdrawal.reference, "withdrawal created");
        Ok(withdrawal)
    }

    pub async fn update(
        &self,
        actor: &str,
        id: Uuid,
        input: UpdateWithdrawal,
    ) -> Result<Withdrawal, ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .withdrawals
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Withdrawal.label(), id))?;
        if current.status != WithdrawalStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "edited",
            });
        }
        store.withdrawals.update_with(id, |withdrawal| {
            if let Some(warehouse) = input.warehouse {
                withdrawal.warehouse = warehouse;
            }
            if let Some(customer) = input.customer {
                withdrawal.customer = customer;
            }
            if let Some(item) = input.item {
                withdrawal.item = item;
            }
            if let Some(quantity) = input.quantity {
                withdrawal.quantity = quantity.max(0);
            }
            if let Some(reasons) = input.reasons {
                withdrawal.reasons = reasons;
            }
            withdrawal.audit.touch(actor);
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .withdrawals
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Withdrawal.label(), id))?;
        if current.status != WithdrawalStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "deleted",
            });
        }
        let removed = store.withdrawals.remove(id)?;
        info!(reference = %removed.reference, "withdrawal deleted");
        Ok(())
    }

    pub async fn next_action(&self, id: Uuid) -> Result<Option<NextAction>, ServiceError> {
        let withdrawal = self.get(id).await?;
        Ok(workflow::next_transition(withdrawal.status, true).map(NextAction::of))
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn advance(&self, actor: &str, id: Uuid) -> Result<Withdrawal, ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .withdrawals
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Withdrawal.label(), id))?;
        let transition = workflow::advance(current.status, true)?;
        let updated = store.withdrawals.update_with(id, |withdrawal| {
            withdrawal.status = transition.to;
            if transition.to == WithdrawalStatus::Done {
                withdrawal.audit.approve(actor);
            } else {
                withdrawal.audit.touch(actor);
            }
        })?;
        info!(
            reference = %updated.reference,
            action = transition.action,
            to = %transition.to,
            "withdrawal transitioned"
        );
        Ok(updated)
    }
}
