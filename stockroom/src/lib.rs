//! # Stockroom
//!
//! Core of an inventory dashboard with a mock authentication layer.
//!
//! All state lives in a synchronous key-value store standing in for browser
//! local storage. There is no server and no real security: passwords are
//! stored as entered and the session token is base64-encoded JSON.
//!
//! ## Core Modules
//!
//! - [`auth`]: user directory, registration, login, and the session token
//! - [`inventory`]: stocked items, derived stock health, filters and counts
//! - [`dashboard`]: page-level facade and the view models it renders
//! - [`storage`]: the key-value store trait and its memory/file backends
//! - [`config`]: token lifetime, password policy, and store location
//!
//! ## Example
//!
//! ```
//! use stockroom::{Dashboard, DashboardConfig, MemoryStore};
//! use std::sync::Arc;
//!
//! let mut dashboard = Dashboard::open(Arc::new(MemoryStore::new()), &DashboardConfig::default())
//!     .unwrap();
//! dashboard
//!     .register("Jane Doe", "jane", "jane@example.com", "hunter22", "Staff")
//!     .unwrap();
//! dashboard.upsert_item("USB Hub", "3", "5").unwrap();
//!
//! let view = dashboard.view().unwrap();
//! assert_eq!(view.summary.total, 5);
//! ```

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod inventory;
pub mod storage;

pub use auth::{AuthError, Role, SessionClaims, SessionManager};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardView};
pub use inventory::{InventoryError, InventoryItem, InventoryLedger, StatusSummary, StockStatus};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
