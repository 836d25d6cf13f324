//! Inventory ledger implementation.

use super::{
    errors::{InventoryError, InventoryResult},
    models::{InventoryItem, StatusSummary, StockStatus, seed_items},
};
use crate::storage::{self, INVENTORY_KEY, KeyValueStore};
use std::sync::Arc;

/// Inventory ledger
///
/// Mutations take the caller's current list and return the updated list,
/// which has already been written to the store.
#[derive(Clone)]
pub struct InventoryLedger {
    store: Arc<dyn KeyValueStore>,
}

impl InventoryLedger {
    /// Create a new ledger over the shared store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the persisted items
    ///
    /// Falls back to the seed items, without persisting them, when nothing
    /// is stored or the stored list is corrupt.
    pub fn load(&self) -> Vec<InventoryItem> {
        storage::read_json(self.store.as_ref(), INVENTORY_KEY).unwrap_or_else(|| {
            log::debug!("No persisted inventory, using seed items");
            seed_items()
        })
    }

    /// Replace the persisted list with `items`
    pub fn save(&self, items: &[InventoryItem]) -> InventoryResult<()> {
        storage::write_json(self.store.as_ref(), INVENTORY_KEY, items)?;
        Ok(())
    }

    /// Derived status of `item`
    pub fn status_of(item: &InventoryItem) -> StockStatus {
        item.status()
    }

    /// Items whose name contains `search` (case-insensitive) and whose
    /// status label equals `status_filter`. Empty values match everything.
    pub fn filter(items: &[InventoryItem], search: &str, status_filter: &str) -> Vec<InventoryItem> {
        let search = search.trim().to_lowercase();

        items
            .iter()
            .filter(|item| search.is_empty() || item.name.to_lowercase().contains(&search))
            .filter(|item| status_filter.is_empty() || item.status().label() == status_filter)
            .cloned()
            .collect()
    }

    /// Update the item named `name` (case-insensitive) or append a new one
    ///
    /// # Arguments
    ///
    /// * `items` - Current list
    /// * `name` - Item name, trimmed before use
    /// * `stock` - Quantity on hand
    /// * `reorder` - Reorder threshold
    ///
    /// # Returns
    ///
    /// * `InventoryResult<Vec<InventoryItem>>` - The persisted new list
    ///
    /// # Errors
    ///
    /// * `InventoryError::InvalidItemInput` - Blank name or a quantity outside
    ///   `0..=u32::MAX`; nothing is persisted
    /// * `InventoryError::IdsExhausted` - A new item is needed but the highest
    ///   id is `ItemId::MAX`; nothing is persisted
    /// * `InventoryError::Storage` - Store write failed
    pub fn upsert(
        &self,
        items: &[InventoryItem],
        name: &str,
        stock: i64,
        reorder: i64,
    ) -> InventoryResult<Vec<InventoryItem>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InventoryError::InvalidItemInput(
                "Item name is required".to_string(),
            ));
        }
        let stock = validate_quantity("stock", stock)?;
        let reorder = validate_quantity("reorder", reorder)?;

        let mut updated = items.to_vec();
        match updated.iter_mut().find(|item| item.has_name(name)) {
            Some(existing) => {
                existing.stock = stock;
                existing.reorder = reorder;
                log::debug!("Updated item {} ('{}')", existing.id, existing.name);
            }
            None => {
                let max_id = updated.iter().map(|item| item.id).max().unwrap_or(0);
                let id = max_id
                    .checked_add(1)
                    .ok_or(InventoryError::IdsExhausted(max_id))?;
                updated.push(InventoryItem {
                    id,
                    name: name.to_string(),
                    stock,
                    reorder,
                });
                log::info!("Added item {} ('{}')", id, name);
            }
        }

        self.save(&updated)?;
        Ok(updated)
    }

    /// [`upsert`](Self::upsert) with quantities as typed into the item form
    ///
    /// Quantities are read like a browser integer field: surrounding
    /// whitespace and trailing non-digits are ignored, so `"12 units"` is 12
    /// and `"3.9"` is 3. Input with no leading digits is rejected.
    pub fn upsert_form(
        &self,
        items: &[InventoryItem],
        name: &str,
        stock: &str,
        reorder: &str,
    ) -> InventoryResult<Vec<InventoryItem>> {
        let stock = parse_quantity(stock).ok_or_else(|| not_a_number("stock", stock))?;
        let reorder = parse_quantity(reorder).ok_or_else(|| not_a_number("reorder", reorder))?;
        self.upsert(items, name, stock, reorder)
    }

    /// Counts of `items` by status
    pub fn aggregate(items: &[InventoryItem]) -> StatusSummary {
        StatusSummary::from_items(items)
    }
}

fn validate_quantity(field: &str, value: i64) -> InventoryResult<u32> {
    u32::try_from(value).map_err(|_| {
        InventoryError::InvalidItemInput(format!(
            "{} must be a non-negative whole number, got {}",
            field, value
        ))
    })
}

fn not_a_number(field: &str, raw: &str) -> InventoryError {
    InventoryError::InvalidItemInput(format!("{} is not a number: '{}'", field, raw))
}

/// Parse the leading integer of `raw`, ignoring anything after the digits
pub fn parse_quantity(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    // Out-of-range magnitudes saturate; they are rejected by validation anyway
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
