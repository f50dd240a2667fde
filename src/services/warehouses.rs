use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{AuditInfo, EntityKind, RecordStatus, Warehouse};
use crate::store::SharedStore;

#[derive(Clone)]
pub struct WarehouseService {
    store: SharedStore,
}

#[derive(Debug, Deserialize)]
pub struct CreateWarehouse {
    pub name: String,
    pub location: String,
    pub manager: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateWarehouse {
    pub name: Option<String>,
    pub location: Option<String>,
    pub manager: Option<String>,
    pub status: Option<RecordStatus>,
}

impl WarehouseService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Warehouse> {
        self.store.read().await.warehouses.to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<Warehouse, ServiceError> {
        self.store
            .read()
            .await
            .warehouses
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(EntityKind::Warehouse.label(), id))
    }

    pub async fn create(
        &self,
        actor: &str,
        input: CreateWarehouse,
    ) -> Result<Warehouse, ServiceError> {
        let mut store = self.store.write().await;
        let warehouse = Warehouse {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::Warehouse),
            name: input.name,
            location: input.location,
            manager: input.manager,
            status: RecordStatus::Active,
            audit: AuditInfo::created(actor),
        };
        store.warehouses.insert(warehouse.clone())?;
        info!(reference = %warehouse.reference, "warehouse created");
        Ok(warehouse)
    }

    pub async fn update(
        &self,
        actor: &str,
        id: Uuid,
        input: UpdateWarehouse,
    ) -> Result<Warehouse, ServiceError> {
        let mut store = self.store.write().await;
        store.warehouses.update_with(id, |warehouse| {
            if let Some(name) = input.name {
                warehouse.name = name;
            }
            if let Some(location) = input.location {
                warehouse.location = location;
            }
            if let Some(manager) = input.manager {
                warehouse.manager = manager;
            }
            if let Some(status) = input.status {
                warehouse.status = status;
            }
            warehouse.audit.touch(actor);
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let removed = self.store.write().await.warehouses.remove(id)?;
        info!(reference = %removed.reference, "warehouse deleted");
        Ok(())
    }
}
