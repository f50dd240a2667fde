use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{AuditInfo, EntityKind, RecordStatus, Supplier};
use crate::store::SharedStore;

#[derive(Clone)]
pub struct SupplierService {
    store: SharedStore,
}

#[derive(Debug, Deserialize)]
pub struct CreateSupplier {
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSupplier {
    pub name: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: Option<RecordStatus>,
}

impl SupplierService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Supplier> {
        self.store.read().await.suppliers.to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<Supplier, ServiceError> {
        self.store
            .read()
            .await
            .suppliers
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(EntityKind::Supplier.label(), id))
    }

    pub async fn create(
        &self,
        actor: &str,
        input: CreateSupplier,
    ) -> Result<Supplier, ServiceError> {
        let mut store = self.store.write().await;
        let supplier = Supplier {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::Supplier),
            name: input.name,
            contact_name: input.contact_name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            status: RecordStatus::Active,
            audit: AuditInfo::created(actor),
        };
        store.suppliers.insert(supplier.clone())?;
        info!(reference = %supplier.reference, "supplier created");
        Ok(supplier)
    }

    pub async fn update(
        &self,
        actor: &str,
        id: Uuid,
        input: UpdateSupplier,
    ) -> Result<Supplier, ServiceError> {
        let mut store = self.store.write().await;
        store.suppliers.update_with(id, |supplier| {
            if let Some(name) = input.name {
                supplier.name = name;
            }
            if let Some(contact_name) = input.contact_name {
                supplier.contact_name = contact_name;
            }
            if let Some(email) = input.email {
                supplier.email = email;
            }
            if let Some(phone) = input.phone {
                supplier.phone = phone;
            }
            if let Some(address) = input.address {
                supplier.address = address;
            }
            if let Some(status) = input.status {
                supplier.status = status;
            }
            supplier.audit.touch(actor);
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let removed = self.store.write().await.suppliers.remove(id)?;
        info!(reference = %removed.reference, "supplier deleted");
        Ok(())
    }
}
