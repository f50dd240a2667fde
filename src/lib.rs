//! Warehouse administration API.
//!
//! In-memory backend for a warehouse admin dashboard: master data (items,
//! suppliers, warehouses, customers), workflow documents (adjustments,
//! withdrawals, transfers, purchase orders, orders, deliveries, returns),
//! staff-assignment tasks, and a mock user registry with role/permission
//! route guards.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod auth;
pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;
pub mod table;
pub mod workflow;

pub use config::AppConfig;
pub use handlers::AppState;
pub use store::{EntityStore, SharedStore};
