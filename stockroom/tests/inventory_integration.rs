//! Integration tests for the inventory ledger.
//!
//! Tests seeding, upsert semantics, filtering, aggregation, and persistence.

use stockroom::inventory::{
    InventoryError, InventoryItem, InventoryLedger, StatusSummary, StockStatus, seed_items,
};
use stockroom::storage::{INVENTORY_KEY, KeyValueStore, MemoryStore};
use std::sync::Arc;

fn setup_ledger() -> (InventoryLedger, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (InventoryLedger::new(store.clone()), store)
}

fn item(id: u64, name: &str, stock: u32, reorder: u32) -> InventoryItem {
    InventoryItem {
        id,
        name: name.to_string(),
        stock,
        reorder,
    }
}

#[test]
fn test_status_of_boundaries() {
    assert_eq!(
        InventoryLedger::status_of(&item(1, "A", 10, 10)),
        StockStatus::Critical
    );
    assert_eq!(
        InventoryLedger::status_of(&item(1, "A", 14, 10)),
        StockStatus::Low
    );
    assert_eq!(
        InventoryLedger::status_of(&item(1, "A", 16, 10)),
        StockStatus::Healthy
    );
}

#[test]
fn test_upsert_existing_name_updates_in_place() {
    let (ledger, _) = setup_ledger();
    let items = vec![item(1, "Keyboard", 5, 8), item(7, "mouse", 3, 2)];

    let updated = ledger.upsert(&items, "Mouse", 45, 15).unwrap();

    assert_eq!(updated.len(), 2);
    assert_eq!(updated[1], item(7, "mouse", 45, 15));
    assert_eq!(updated[0], items[0]);
}

#[test]
fn test_upsert_negative_stock_is_noop() {
    let (ledger, store) = setup_ledger();
    ledger.save(&seed_items()).unwrap();
    let before = store.get_item(INVENTORY_KEY);

    let items = ledger.load();
    let result = ledger.upsert(&items, "NewWidget", -1, 5);

    assert!(matches!(result, Err(InventoryError::InvalidItemInput(_))));
    assert_eq!(store.get_item(INVENTORY_KEY), before);
    assert_eq!(ledger.load(), seed_items());
}

#[test]
fn test_upsert_appends_after_highest_id() {
    let (ledger, _) = setup_ledger();
    let items = vec![item(3, "A", 1, 1), item(9, "B", 1, 1), item(4, "C", 1, 1)];

    let updated = ledger.upsert(&items, "D", 2, 1).unwrap();
    assert_eq!(updated.last().unwrap().id, 10);
}

#[test]
fn test_upsert_persists_and_reloads() {
    let (ledger, store) = setup_ledger();
    let items = ledger.load();
    let items = ledger.upsert_form(&items, "Webcam", "12", "4").unwrap();

    let reloaded = InventoryLedger::new(store).load();
    assert_eq!(reloaded, items);
    assert_eq!(reloaded.last().unwrap(), &item(5, "Webcam", 12, 4));
}

#[test]
fn test_filter_by_search() {
    let items = InventoryLedger::filter(&seed_items(), "mac", "");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "MacBook Pro");
}

#[test]
fn test_filter_by_status() {
    let items = InventoryLedger::filter(&seed_items(), "", "Critical");
    let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Dell Monitor", "Mechanical Keyboard"]);
    assert!(
        items
            .iter()
            .all(|i| InventoryLedger::status_of(i) == StockStatus::Critical)
    );
}

#[test]
fn test_filter_search_and_status_are_anded() {
    assert!(InventoryLedger::filter(&seed_items(), "mac", "Critical").is_empty());
    assert_eq!(
        InventoryLedger::filter(&seed_items(), "o", "Healthy").len(),
        2
    );
    assert_eq!(InventoryLedger::filter(&seed_items(), "", "").len(), 4);
}

#[test]
fn test_aggregate_seed() {
    assert_eq!(
        InventoryLedger::aggregate(&seed_items()),
        StatusSummary {
            total: 4,
            healthy: 2,
            low: 0,
            critical: 2,
        }
    );
    assert_eq!(InventoryLedger::aggregate(&[]), StatusSummary::default());
}

#[test]
fn test_persisted_layout() {
    let (ledger, store) = setup_ledger();
    ledger.save(&[item(1, "Cable", 3, 2)]).unwrap();
    assert_eq!(
        store.get_item(INVENTORY_KEY).as_deref(),
        Some(r#"[{"id":1,"name":"Cable","stock":3,"reorder":2}]"#)
    );
}
