//! Generic service for the five staff-assignment task kinds.
//!
//! One implementation drives picker, barcoder, tagger, checker and transfer
//! crew screens; per-kind behavior is confined to the [`TaskKind`] trait —
//! which store collection to use and any side effect applied when the chain
//! completes.

use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{
    AuditInfo, BarcoderStatus, CheckerStatus, EntityKind, PickerStatus, Record, StaffTask,
    TaggerStatus, TransferTaskStatus,
};
use crate::store::{Collection, EntityStore, SharedStore};
use crate::workflow::{self, NextAction, WorkflowStatus};

/// Binds a task status chain to its store collection and completion hook.
pub trait TaskKind: WorkflowStatus
where
    StaffTask<Self>: Record,
{
    fn collection(store: &EntityStore) -> &Collection<StaffTask<Self>>;
    fn collection_mut(store: &mut EntityStore) -> &mut Collection<StaffTask<Self>>;

    /// Applied when the final transition of the chain fires.
    fn on_complete(_task: &mut StaffTask<Self>) {}
}

impl TaskKind for PickerStatus {
    fn collection(store: &EntityStore) -> &Collection<StaffTask<Self>> {
        &store.picker_tasks
    }

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<StaffTask<Self>> {
        &mut store.picker_tasks
    }
}

impl TaskKind for BarcoderStatus {
    fn collection(store: &EntityStore) -> &Collection<StaffTask<Self>> {
        &store.barcoder_tasks
    }

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<StaffTask<Self>> {
        &mut store.barcoder_tasks
    }

    /// Completing a scan marks every expected unit as scanned.
    fn on_complete(task: &mut StaffTask<Self>) {
        task.quantity_done = task.quantity_expected;
    }
}

impl TaskKind for TaggerStatus {
    fn collection(store: &EntityStore) -> &Collection<StaffTask<Self>> {
        &store.tagger_tasks
    }

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<StaffTask<Self>> {
        &mut store.tagger_tasks
    }
}

impl TaskKind for CheckerStatus {
    fn collection(store: &EntityStore) -> &Collection<StaffTask<Self>> {
        &store.checker_tasks
    }

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<StaffTask<Self>> {
        &mut store.checker_tasks
    }
}

impl TaskKind for TransferTaskStatus {
    fn collection(store: &EntityStore) -> &Collection<StaffTask<Self>> {
        &store.transfer_tasks
    }

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<StaffTask<Self>> {
        &mut store.transfer_tasks
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateStaffTask {
    pub order_reference: String,
    pub warehouse: String,
    pub quantity_expected: i64,
    #[serde(default)]
    pub assignee: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStaffTask {
    pub order_reference: Option<String>,
    pub warehouse: Option<String>,
    pub quantity_expected: Option<i64>,
}

#[derive(Clone)]
pub struct StaffTaskService<S> {
    store: SharedStore,
    _status: std::marker::PhantomData<S>,
}

impl<S: TaskKind> StaffTaskService<S>
where
    StaffTask<S>: Record,
{
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            _status: std::marker::PhantomData,
        }
    }

    fn kind() -> EntityKind {
        <StaffTask<S> as Record>::KIND
    }

    pub async fn list(&self) -> Vec<StaffTask<S>> {
        S::collection(&*self.store.read().await).to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<StaffTask<S>, ServiceError> {
        S::collection(&*self.store.read().await)
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(Self::kind().label(), id))
    }

    pub async fn create(
        &self,
        actor: &str,
        input: CreateStaffTask,
    ) -> Result<StaffTask<S>, ServiceError> {
        let mut store = self.store.write().await;
        let task = StaffTask {
            id: Uuid::new_v4(),
            reference: store.next_reference(Self::kind()),
            order_reference: input.order_reference,
            warehouse: input.warehouse,
            assignee: input.assignee.filter(|a| !a.trim().is_empty()),
            quantity_expected: input.quantity_expected.max(0),
            quantity_done: 0,
            status: S::initial(),
            audit: AuditInfo::created(actor),
        };
        S::collection_mut(&mut store).insert(task.clone())?;
        info!(reference = %task.reference, "staff task created");
        Ok(task)
    }

    pub async fn update(
        &self,
        actor: &str,
        id: Uuid,
        input: UpdateStaffTask,
    ) -> Result<StaffTask<S>, ServiceError> {
        let mut store = self.store.write().await;
        let current = S::collection(&store)
            .get(id)
            .ok_or(ServiceError::not_found(Self::kind().label(), id))?;
        if current.status != S::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "edited",
            });
        }
        S::collection_mut(&mut store).update_with(id, |task| {
            if let Some(order_reference) = input.order_reference {
                task.order_reference = order_reference;
            }
            if let Some(warehouse) = input.warehouse {
                task.warehouse = warehouse;
            }
            if let Some(quantity_expected) = input.quantity_expected {
                task.quantity_expected = quantity_expected.max(0);
            }
            task.audit.touch(actor);
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut store = self.store.write().await;
        let current = S::collection(&store)
            .get(id)
            .ok_or(ServiceError::not_found(Self::kind().label(), id))?;
        if current.status != S::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "deleted",
            });
        }
        let removed = S::collection_mut(&mut store).remove(id)?;
        info!(reference = %removed.reference, "staff task deleted");
        Ok(())
    }

    /// Set or replace the assignee. Only allowed before work starts.
    pub async fn assign(
        &self,
        actor: &str,
        id: Uuid,
        assignee: String,
    ) -> Result<StaffTask<S>, ServiceError> {
        let assignee = assignee.trim().to_string();
        if assignee.is_empty() {
            return Err(ServiceError::validation("assignee must not be blank"));
        }
        let mut store = self.store.write().await;
        let current = S::collection(&store)
            .get(id)
            .ok_or(ServiceError::not_found(Self::kind().label(), id))?;
        if current.status != S::initial() {
            return Err(ServiceError::Locked {
                status: current.status.to_string(),
                action: "reassigned",
            });
        }
        let updated = S::collection_mut(&mut store).update_with(id, |task| {
            task.assignee = Some(assignee);
            task.audit.touch(actor);
        })?;
        info!(reference = %updated.reference, "staff task assigned");
        Ok(updated)
    }

    /// The workflow button for this task: nothing until assigned, then the
    /// single next step of the chain.
    pub async fn next_action(&self, id: Uuid) -> Result<Option<NextAction>, ServiceError> {
        let task = self.get(id).await?;
        Ok(workflow::next_transition(task.status, task.is_assigned()).map(NextAction::of))
    }

    /// Advance the chain. Fails with `NotActionable` while unassigned, so an
    /// ungated attempt can never move the status.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn advance(&self, actor: &str, id: Uuid) -> Result<StaffTask<S>, ServiceError> {
        let mut store = self.store.write().await;
        let current = S::collection(&store)
            .get(id)
            .ok_or(ServiceError::not_found(Self::kind().label(), id))?;
        let transition = workflow::advance(current.status, current.is_assigned())?;
        let updated = S::collection_mut(&mut store).update_with(id, |task| {
            task.status = transition.to;
            if transition.to.is_terminal() {
                S::on_complete(task);
            }
            task.audit.touch(actor);
        })?;
        info!(
            reference = %updated.reference,
            action = transition.action,
            to = %transition.to,
            "staff task transitioned"
        );
        Ok(updated)
    }
}
