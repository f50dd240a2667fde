use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{AuditInfo, Customer, EntityKind, RecordStatus};
use crate::store::SharedStore;

#[derive(Clone)]
pub struct CustomerService {
    store: SharedStore,
}

#[derive(Debug, Deserialize)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: Option<RecordStatus>,
}

impl CustomerService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Customer> {
        self.store.read().await.customers.to_vec()
    }

    pub async fn get(&self, id: Uuid) -> Result<Customer, ServiceError> {
        self.store
            .read()
            .await
            .customers
            .get(id)
            .cloned()
            .ok_or(ServiceError::not_found(EntityKind::Customer.label(), id))
    }

    pub async fn create(
        &self,
        actor: &str,
        input: CreateCustomer,
    ) -> Result<Customer, ServiceError> {
        let mut store = self.store.write().await;
        let customer = Customer {
            id: Uuid::new_v4(),
            reference: store.next_reference(EntityKind::Customer),
            name: input.name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            status: RecordStatus::Active,
            audit: AuditInfo::created(actor),
        };
        store.customers.insert(customer.clone())?;
        info!(reference = %customer.reference, "customer created");
        Ok(customer)
    }

    pub async fn update(
        &self,
        actor: &str,
        id: Uuid,
        input: UpdateCustomer,
    ) -> Result<Customer, ServiceError> {
        let mut store = self.store.write().await;
        store.customers.update_with(id, |customer| {
            if let Some(name) = input.name {
                customer.name = name;
            }
            if let Some(email) = input.email {
                customer.email = email;
            }
            if let Some(phone) = input.phone {
                customer.phone = phone;
            }
            if let Some(address) = input.address {
                customer.address = address;
            }
            if let Some(status) = input.status {
                customer.status = status;
            }
            customer.audit.touch(actor);
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let removed = self.store.write().await.customers.remove(id)?;
        info!(reference = %removed.reference, "customer deleted");
        Ok(())
    }
}
