//! Inventory data models.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Item ID type
pub type ItemId = u64;

/// Stocked item as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    /// Quantity on hand
    pub stock: u32,
    /// Reorder threshold
    pub reorder: u32,
}

impl InventoryItem {
    /// Derived stock health.
    ///
    /// * `stock <= reorder` - Critical
    /// * `stock <= reorder * 1.5` - Low
    /// * otherwise - Healthy
    ///
    /// Boundaries fall into the more severe bucket. The 1.5 factor is
    /// evaluated as `2 * stock <= 3 * reorder` to stay in integers.
    pub fn status(&self) -> StockStatus {
        let stock = u64::from(self.stock);
        let reorder = u64::from(self.reorder);

        if stock <= reorder {
            StockStatus::Critical
        } else if stock * 2 <= reorder * 3 {
            StockStatus::Low
        } else {
            StockStatus::Healthy
        }
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Stock health classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    Healthy,
    Low,
    Critical,
}

impl StockStatus {
    /// All statuses, least to most severe
    pub const ALL: [StockStatus; 3] = [StockStatus::Healthy, StockStatus::Low, StockStatus::Critical];

    /// Display label, also used as the filter value
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Healthy => "Healthy",
            StockStatus::Low => "Low",
            StockStatus::Critical => "Critical",
        }
    }

    /// CSS class of the status pill
    pub fn css_class(self) -> &'static str {
        match self {
            StockStatus::Healthy => "status-healthy",
            StockStatus::Low => "status-low",
            StockStatus::Critical => "status-critical",
        }
    }

    /// Bar color in the stock chart
    pub fn chart_color(self) -> &'static str {
        match self {
            StockStatus::Healthy => "#22c55e",
            StockStatus::Low => "#eab308",
            StockStatus::Critical => "#ef4444",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StockStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| format!("Unknown stock status: {}", s))
    }
}

/// Item counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub total: usize,
    pub healthy: usize,
    pub low: usize,
    pub critical: usize,
}

impl StatusSummary {
    /// Count `items` by status
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a InventoryItem>) -> Self {
        items
            .into_iter()
            .fold(Self::default(), |mut summary, item| {
                summary.total += 1;
                match item.status() {
                    StockStatus::Healthy => summary.healthy += 1,
                    StockStatus::Low => summary.low += 1,
                    StockStatus::Critical => summary.critical += 1,
                }
                summary
            })
    }
}

/// Items shown when nothing has been persisted yet
pub fn seed_items() -> Vec<InventoryItem> {
    [
        (1, "MacBook Pro", 25, 10),
        (2, "Dell Monitor", 8, 12),
        (3, "Logitech Mouse", 45, 15),
        (4, "Mechanical Keyboard", 5, 8),
    ]
    .into_iter()
    .map(|(id, name, stock, reorder)| InventoryItem {
        id,
        name: name.to_string(),
        stock,
        reorder,
    })
    .collect()
}
