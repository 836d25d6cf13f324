//! Inventory ledger: stocked items, derived stock health, filtered views.
//!
//! This module implements:
//! - Seed items shown until something is persisted
//! - Status derivation (Healthy / Low / Critical) from stock and reorder level
//! - Case-insensitive search combined with an exact status filter
//! - Upsert by case-insensitive name with `max id + 1` assignment
//! - Per-status counts for the summary cards
//!
//! ## Example
//!
//! ```
//! use stockroom::inventory::{InventoryLedger, StockStatus};
//! use stockroom::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! let ledger = InventoryLedger::new(Arc::new(MemoryStore::new()));
//! let items = ledger.load();
//!
//! let items = ledger.upsert(&items, "logitech mouse", 12, 10).unwrap();
//! let low = InventoryLedger::filter(&items, "mouse", "Low");
//! assert_eq!(low.len(), 1);
//! assert_eq!(InventoryLedger::status_of(&low[0]), StockStatus::Low);
//! ```

pub mod errors;
pub mod ledger;
pub mod models;

pub use errors::{InventoryError, InventoryResult};
pub use ledger::{InventoryLedger, parse_quantity};
pub use models::{InventoryItem, ItemId, StatusSummary, StockStatus, seed_items};
