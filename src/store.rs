//! In-memory entity store: the single source of truth for every collection.
//!
//! The store is an explicit object with constructor-injected state — no
//! ambient singleton — so each test can own an isolated instance. UI/API
//! layers never hold copies of records; they read through the store and all
//! mutation goes through `insert`/`update_with`/`remove`, keeping reads
//! consistent with the latest write.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{
    Adjustment, BarcoderTask, CheckerTask, Customer, CustomerReturn, Delivery, EntityKind, Item,
    Order, PickerTask, PurchaseOrder, Record, Supplier, TaggerTask, Transfer, TransferTask, User,
    Warehouse, Withdrawal,
};

/// Shared handle the services hold.
pub type SharedStore = Arc<RwLock<EntityStore>>;

/// One entity collection. `Vec`-backed: insertion order is preserved and is
/// the default display order.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a fully-formed record. The caller assigns id, reference and
    /// audit fields before calling. A duplicate id is rejected — ids are
    /// never reused within a collection.
    pub fn insert(&mut self, record: T) -> Result<(), ServiceError> {
        if self.records.iter().any(|r| r.id() == record.id()) {
            return Err(ServiceError::DuplicateId {
                kind: T::KIND.label(),
                id: record.id(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Merge a mutation over an existing record. Unknown id is an explicit
    /// `NotFound`, not a silent no-op. Returns the updated record.
    pub fn update_with(
        &mut self,
        id: Uuid,
        mutate: impl FnOnce(&mut T),
    ) -> Result<T, ServiceError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(ServiceError::NotFound {
                kind: T::KIND.label(),
                id,
            })?;
        mutate(record);
        Ok(record.clone())
    }

    /// Hard removal; there is no tombstone. Unknown id is `NotFound`.
    pub fn remove(&mut self, id: Uuid) -> Result<T, ServiceError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(ServiceError::NotFound {
                kind: T::KIND.label(),
                id,
            })?;
        Ok(self.records.remove(pos))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// All collections plus the per-kind reference-code sequences.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pub items: Collection<Item>,
    pub purchase_orders: Collection<PurchaseOrder>,
    pub adjustments: Collection<Adjustment>,
    pub withdrawals: Collection<Withdrawal>,
    pub transfers: Collection<Transfer>,
    pub deliveries: Collection<Delivery>,
    pub orders: Collection<Order>,
    pub customer_returns: Collection<CustomerReturn>,
    pub suppliers: Collection<Supplier>,
    pub warehouses: Collection<Warehouse>,
    pub customers: Collection<Customer>,
    pub picker_tasks: Collection<PickerTask>,
    pub barcoder_tasks: Collection<BarcoderTask>,
    pub tagger_tasks: Collection<TaggerTask>,
    pub checker_tasks: Collection<CheckerTask>,
    pub transfer_tasks: Collection<TransferTask>,
    pub users: Collection<User>,
    sequences: HashMap<EntityKind, u64>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// Drop every collection and sequence back to empty.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Next reference code for a kind, e.g. `ADJ-001`, `CR-0001`.
    ///
    /// Sequences are monotonic counters owned by the store — never derived
    /// from collection length, so deleting records cannot cause a code to be
    /// reused.
    pub fn next_reference(&mut self, kind: EntityKind) -> String {
        let seq = self.sequences.entry(kind).or_insert(0);
        *seq += 1;
        format!(
            "{}-{:0width$}",
            kind.reference_prefix(),
            seq,
            width = kind.reference_width()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdjustmentStatus, AuditInfo, Reasons};

    fn adjustment(store: &mut EntityStore) -> Adjustment {
        Adjustment {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::Adjustment),
            warehouse: "Main".into(),
            item: "Widget".into(),
            quantity_delta: -3,
            reasons: Reasons::new(),
            status: AdjustmentStatus::Open,
            audit: AuditInfo::created("system"),
        }
    }

    #[test]
    fn insert_then_remove_round_trips() {
        let mut store = EntityStore::new();
        let before = store.adjustments.to_vec();
        let adj = adjustment(&mut store);
        let id = adj.id;

        store.adjustments.insert(adj).unwrap();
        assert_eq!(store.adjustments.len(), 1);
        store.adjustments.remove(id).unwrap();

        assert_eq!(store.adjustments.len(), before.len());
        assert!(store.adjustments.get(id).is_none());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut store = EntityStore::new();
        let adj = adjustment(&mut store);
        store.adjustments.insert(adj.clone()).unwrap();
        let err = store.adjustments.insert(adj).unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateId { .. }));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = EntityStore::new();
        let err = store
            .adjustments
            .update_with(Uuid::new_v4(), |_| {})
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[test]
    fn update_only_touches_mutated_fields() {
        let mut store = EntityStore::new();
        let adj = adjustment(&mut store);
        let id = adj.id;
        let original = adj.clone();
        store.adjustments.insert(adj).unwrap();

        let updated = store
            .adjustments
            .update_with(id, |a| a.warehouse = "Annex".into())
            .unwrap();

        assert_eq!(updated.warehouse, "Annex");
        assert_eq!(updated.item, original.item);
        assert_eq!(updated.quantity_delta, original.quantity_delta);
        assert_eq!(updated.status, original.status);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut store = EntityStore::new();
        let refs: Vec<String> = (0..3)
            .map(|_| {
                let adj = adjustment(&mut store);
                let reference = adj.reference.clone();
                store.adjustments.insert(adj).unwrap();
                reference
            })
            .collect();

        let stored: Vec<&str> = store
            .adjustments
            .iter()
            .map(|a| a.reference.as_str())
            .collect();
        assert_eq!(stored, refs.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn sequences_survive_deletion() {
        let mut store = EntityStore::new();
        let first = adjustment(&mut store);
        let first_id = first.id;
        assert_eq!(first.reference, "ADJ-001");
        store.adjustments.insert(first).unwrap();
        store.adjustments.remove(first_id).unwrap();

        let second = adjustment(&mut store);
        assert_eq!(second.reference, "ADJ-002");
    }

    #[test]
    fn return_references_are_four_wide() {
        let mut store = EntityStore::new();
        assert_eq!(store.next_reference(EntityKind::CustomerReturn), "CR-0001");
    }

    #[test]
    fn reset_clears_collections_and_sequences() {
        let mut store = EntityStore::new();
        let adj = adjustment(&mut store);
        store.adjustments.insert(adj).unwrap();
        store.reset();
        assert!(store.adjustments.is_empty());
        assert_eq!(store.next_reference(EntityKind::Adjustment), "ADJ-001");
    }
}
