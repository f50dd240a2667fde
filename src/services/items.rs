use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{AuditInfo, EntityKind, Item, RecordStatus};
use crate::store::SharedStore;

#[derive(Clone)]
pub struct ItemService {
    store: SharedStore,
}

#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub quantity: i64,
    pub reorder_level: i64,
    pub warehouse: String,
    pub supplier: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub quantity: Option<i64>,
    pub reorder_level: Option<i64>,
    pub warehouse: Option<String>,
    pub supplier: Option<String>,
    pub status: Option<RecordStatus>,
}

impl ItemService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Item> {
        self.store.read().await.items.to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<Item, ServiceError> {
        self.store
            .read()
            .await
            .items
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(EntityKind::Item.label(), id))
    }

    pub async fn create(&self, actor: &str, input: CreateItem) -> Result<Item, ServiceError> {
        let mut store = self.store.write().await;
        let item = Item {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::Item),
            name: input.name,
            category: input.category,
            unit: input.unit,
            quantity: input.quantity.max(0),
            reorder_level: input.reorder_level.max(0),
            warehouse: input.warehouse,
            supplier: input.supplier,
            status: RecordStatus::Active,
            audit: AuditInfo::created(actor),
        };
        store.items.insert(item.clone())?;
        info!(reference = %item.reference, "item created");
        Ok(item)
    }

    pub async fn update(
        &self,
        actor: &str,
        id: Uuid,
        input: UpdateItem,
    ) -> Result<Item, ServiceError> {
        let mut store = self.store.write().await;
        store.items.update_with(id, |item| {
            if let Some(name) = input.name {
                item.name = name;
            }
            if let Some(category) = input.category {
                item.category = category;
            }
            if let Some(unit) = input.unit {
                item.unit = unit;
            }
            if let Some(quantity) = input.quantity {
                item.quantity = quantity.max(0);
            }
            if let Some(reorder_level) = input.reorder_level {
                item.reorder_level = reorder_level.max(0);
            }
            if let Some(warehouse) = input.warehouse {
                item.warehouse = warehouse;
            }
            if let Some(supplier) = input.supplier {
                item.supplier = supplier;
            }
            if let Some(status) = input.status {
                item.status = status;
            }
            item.audit.touch(actor);
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let removed = self.store.write().await.items.remove(id)?;
        info!(reference = %removed.reference, "item deleted");
        Ok(())
    }
}
