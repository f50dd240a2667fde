use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{Adjustment, AdjustmentStatus, AuditInfo, EntityKind, Reasons};
use crate::store::SharedStore;
use crate::workflow::{self, NextAction, WorkflowStatus};

#[derive(Clone)]
pub struct AdjustmentService {
    store: SharedStore,
}

#[derive(Debug, Deserialize)]
pub struct CreateAdjustment {
    pub warehouse: String,
    pub item: String,
    pub quantity_delta: i64,
    #[serde(default)]
    pub reasons: Reasons,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateAdjustment {
    pub warehouse: Option<String>,
    pub item: Option<String>,
    pub quantity_delta: Option<i64>,
    pub reasons: Option<Reasons>,
}

impl AdjustmentService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Adjustment> {
        self.store.read().await.adjustments.to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<Adjustment, ServiceError> {
        self.store
            .read()
            .await
            .adjustments
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(EntityKind::Adjustment.label(), id))
    }

    pub async fn create(
        &self,
        actor: &str,
        input: CreateAdjustment,
    ) -> Result<Adjustment, ServiceError> {
        let mut store = self.store.write().await;
        let adjustment = Adjustment {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::Adjustment),
            warehouse: input.warehouse,
            item: input.item,
            quantity_delta: input.quantity_delta,
            reasons: input.reasons,
            status: AdjustmentStatus::initial(),
            audit: AuditInfo::created(actor),
        };
        store.adjustments.insert(adjustment.clone())?;
        info!(reference = %adjustment.reference, "adjustment created");
        Ok(adjustment)
    }

    /// Edits are only allowed while the adjustment is still Open; once
    /// posted, the record is frozen except for workflow transitions.
    pub async fn update(
        &self,
        actor: &str,
        id: Uuid,
        input: UpdateAdjustment,
    ) -> Result<Adjustment, ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .adjustments
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Adjustment.label(), id))?;
        if current.status != AdjustmentStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "edited",
            });
        }
        store.adjustments.update_with(id, |adjustment| {
            if let Some(warehouse) = input.warehouse {
                adjustment.warehouse = warehouse;
            }
            if let Some(item) = input.item {
                adjustment.item = item;
            }
            if let Some(quantity_delta) = input.quantity_delta {
                adjustment.quantity_delta = quantity_delta;
            }
            if let Some(reasons) = input.reasons {
                adjustment.reasons = reasons;
            }
            adjustment.audit.touch(actor);
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .adjustments
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Adjustment.label(), id))?;
        if current.status != AdjustmentStatus::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "deleted",
            });
        }
        let removed = store.adjustments.remove(id)?;
        info!(reference = %removed.reference, "adjustment deleted");
        Ok(())
    }

    /// The single next workflow action, if any.
    pub async fn next_action(&self, id: Uuid) -> Result<Option<NextAction>, ServiceError> {
        let adjustment = self.get(id).await?;
        Ok(workflow::next_transition(adjustment.status, true).map(NextAction::of))
    }

    /// Apply the one legal transition. Reaching Done records approval.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn advance(&self, actor: &str, id: Uuid) -> Result<Adjustment, ServiceError> {
        let mut store = self.store.write().await;
        let current = store
            .adjustments
            .get(id)
            .ok_or(ServiceError::not_found(EntityKind::Adjustment.label(), id))?;
        let transition = workflow::advance(current.status, true)?;
        let updated = store.adjustments.update_with(id, |adjustment| {
            adjustment.status = transition.to;
            if transition.to == AdjustmentStatus::Done {
                adjustment.audit.approve(actor);
            } else {
                adjustment.audit.touch(actor);
            }
        })?;
        info!(
            reference = %updated.reference,
            action = transition.action,
            to = %transition.to,
            "adjustment transitioned"
        );
        Ok(updated)
    }
}
