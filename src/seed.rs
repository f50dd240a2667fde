//! Demo data loaded on startup so every screen has something to show.
//! Everything goes through the services, so references, audit stamps and
//! initial statuses come out exactly as they would from the API.

use tracing::info;

use crate::errors::ServiceError;
use crate::models::{Reasons, Role};
use crate::services::{
    AppServices, CreateAdjustment, CreateCustomer, CreateDelivery, CreateItem, CreateOrder,
    CreatePurchaseOrder, CreateReturn, CreateStaffTask, CreateSupplier, CreateTransfer,
    CreateUser, CreateWarehouse, CreateWithdrawal,
};

const SEED_ACTOR: &str = "system";

pub async fn seed_demo_data(services: &AppServices) -> Result<(), ServiceError> {
    seed_users(services).await?;
    seed_partners(services).await?;
    seed_inventory(services).await?;
    seed_operations(services).await?;
    seed_tasks(services).await?;
    info!("demo data seeded");
    Ok(())
}

async fn seed_users(services: &AppServices) -> Result<(), ServiceError> {
    let users = [
        ("root", "Root", Role::Superadmin),
        ("amara", "Amara Osei", Role::Admin),
        ("lena", "Lena Fischer", Role::Manager),
        ("tomas", "Tomas Ruiz", Role::Operator),
    ];
    for (username, display_name, role) in users {
        services
            .users
            .create(
                SEED_ACTOR,
                CreateUser {
                    username: username.to_string(),
                    display_name: display_name.to_string(),
                    role,
                    permissions: None,
                },
            )
            .await?;
    }
    Ok(())
}

async fn seed_partners(services: &AppServices) -> Result<(), ServiceError> {
    for (name, location, manager) in [
        ("Central", "Rotterdam", "Lena Fischer"),
        ("North Annex", "Hamburg", "Amara Osei"),
    ] {
        services
            .warehouses
            .create(
                SEED_ACTOR,
                CreateWarehouse {
                    name: name.to_string(),
                    location: location.to_string(),
                    manager: manager.to_string(),
                },
            )
            .await?;
    }

    for (name, contact, email, phone) in [
        ("Nordic Components", "Elsa Berg", "elsa@nordic.example", "+46 70 111 22 33"),
        ("Delta Packaging", "Marco Bruni", "marco@delta.example", "+39 02 555 0011"),
    ] {
        services
            .suppliers
            .create(
                SEED_ACTOR,
                CreateSupplier {
                    name: name.to_string(),
                    contact_name: contact.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                    address: "Industrieweg 4".to_string(),
                },
            )
            .await?;
    }

    for (name, email) in [
        ("Acme Retail", "orders@acme.example"),
        ("Borealis Stores", "purchasing@borealis.example"),
    ] {
        services
            .customers
            .create(
                SEED_ACTOR,
                CreateCustomer {
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: "+31 10 123 4567".to_string(),
                    address: "Kadeplein 12, Rotterdam".to_string(),
                },
            )
            .await?;
    }
    Ok(())
}

async fn seed_inventory(services: &AppServices) -> Result<(), ServiceError> {
    for (name, category, quantity) in [
        ("Steel Bracket M6", "Hardware", 480),
        ("Cardboard Box 40x40", "Packaging", 1200),
        ("Pallet Wrap Roll", "Packaging", 75),
    ] {
        services
            .items
            .create(
                SEED_ACTOR,
                CreateItem {
                    name: name.to_string(),
                    category: category.to_string(),
                    unit: "pcs".to_string(),
                    quantity,
                    reorder_level: 50,
                    warehouse: "Central".to_string(),
                    supplier: "Nordic Components".to_string(),
                },
            )
            .await?;
    }

    let mut reasons = Reasons::new();
    reasons.push("cycle count variance");
    services
        .adjustments
        .create(
            SEED_ACTOR,
            CreateAdjustment {
                warehouse: "Central".to_string(),
                item: "Steel Bracket M6".to_string(),
                quantity_delta: -12,
                reasons,
            },
        )
        .await?;

    let mut reasons = Reasons::new();
    reasons.push("damaged in handling");
    services
        .withdrawals
        .create(
            SEED_ACTOR,
            CreateWithdrawal {
                warehouse: "Central".to_string(),
                customer: "Acme Retail".to_string(),
                item: "Cardboard Box 40x40".to_string(),
                quantity: 30,
                reasons,
            },
        )
        .await?;

    services
        .transfers
        .create(
            SEED_ACTOR,
            CreateTransfer {
                from_warehouse: "Central".to_string(),
                to_warehouse: "North Annex".to_string(),
                item: "Pallet Wrap Roll".to_string(),
                quantity: 20,
            },
        )
        .await?;
    Ok(())
}

async fn seed_operations(services: &AppServices) -> Result<(), ServiceError> {
    services
        .purchase_orders
        .create(
            SEED_ACTOR,
            CreatePurchaseOrder {
                supplier: "Delta Packaging".to_string(),
                warehouse: "Central".to_string(),
                item: "Cardboard Box 40x40".to_string(),
                quantity: 500,
                expected_date: None,
            },
        )
        .await?;

    let order = services
        .orders
        .create(
            SEED_ACTOR,
            CreateOrder {
                customer: "Acme Retail".to_string(),
                warehouse: "Central".to_string(),
                item: "Steel Bracket M6".to_string(),
                quantity: 120,
            },
        )
        .await?;

    services
        .deliveries
        .create(
            SEED_ACTOR,
            CreateDelivery {
                order_reference: order.reference.clone(),
                customer: "Acme Retail".to_string(),
                address: "Kadeplein 12, Rotterdam".to_string(),
                courier: "SwiftHaul".to_string(),
            },
        )
        .await?;

    let mut reasons = Reasons::new();
    reasons.push("wrong size");
    services
        .customer_returns
        .create(
            SEED_ACTOR,
            CreateReturn {
                order_reference: order.reference,
                customer: "Acme Retail".to_string(),
                item: "Steel Bracket M6".to_string(),
                quantity: 8,
                reasons,
            },
        )
        .await?;
    Ok(())
}

async fn seed_tasks(services: &AppServices) -> Result<(), ServiceError> {
    let task = CreateStaffTask {
        order_reference: "ORD-001".to_string(),
        warehouse: "Central".to_string(),
        quantity_expected: 120,
        assignee: Some("tomas".to_string()),
    };
    services
        .picker_tasks
        .create(
            SEED_ACTOR,
            CreateStaffTask {
                assignee: task.assignee.clone(),
                order_reference: task.order_reference.clone(),
                warehouse: task.warehouse.clone(),
                quantity_expected: task.quantity_expected,
            },
        )
        .await?;
    services
        .barcoder_tasks
        .create(
            SEED_ACTOR,
            CreateStaffTask {
                assignee: None,
                order_reference: task.order_reference.clone(),
                warehouse: task.warehouse.clone(),
                quantity_expected: task.quantity_expected,
            },
        )
        .await?;
    services
        .tagger_tasks
        .create(
            SEED_ACTOR,
            CreateStaffTask {
                assignee: None,
                order_reference: task.order_reference.clone(),
                warehouse: task.warehouse.clone(),
                quantity_expected: task.quantity_expected,
            },
        )
        .await?;
    services
        .checker_tasks
        .create(
            SEED_ACTOR,
            CreateStaffTask {
                assignee: None,
                order_reference: task.order_reference.clone(),
                warehouse: task.warehouse.clone(),
                quantity_expected: task.quantity_expected,
            },
        )
        .await?;
    services
        .transfer_tasks
        .create(
            SEED_ACTOR,
            CreateStaffTask {
                assignee: None,
                order_reference: "TRF-001".to_string(),
                warehouse: "North Annex".to_string(),
                quantity_expected: 20,
            },
        )
        .await?;
    Ok(())
}
