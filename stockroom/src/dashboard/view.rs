//! View models consumed by the presentation layer.

use crate::{
    auth::{Role, SessionClaims},
    inventory::{InventoryItem, ItemId, StatusSummary, StockStatus},
};
use serde::Serialize;

/// Everything the dashboard page renders for a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// Greeting line, e.g. `Welcome, Demo Admin`
    pub welcome: String,
    pub role_badge: RoleBadge,
    /// Filtered items in list order
    pub rows: Vec<ItemRow>,
    /// Counts over `rows`
    pub summary: StatusSummary,
    pub chart: ChartSeries,
}

impl DashboardView {
    /// Build the view for `claims` over the already filtered `items`
    pub fn build(claims: &SessionClaims, items: &[InventoryItem]) -> Self {
        Self {
            welcome: format!("Welcome, {}", claims.display_name()),
            role_badge: RoleBadge::for_role(&claims.role),
            rows: items.iter().map(ItemRow::from).collect(),
            summary: StatusSummary::from_items(items),
            chart: ChartSeries::from_items(items),
        }
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub stock: u32,
    pub reorder: u32,
    pub status: StockStatus,
    pub status_class: &'static str,
}

impl From<&InventoryItem> for ItemRow {
    fn from(item: &InventoryItem) -> Self {
        let status = item.status();
        Self {
            id: item.id,
            name: item.name.clone(),
            stock: item.stock,
            reorder: item.reorder,
            status,
            status_class: status.css_class(),
        }
    }
}

/// Role badge in the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleBadge {
    pub label: String,
    pub class: String,
}

impl RoleBadge {
    pub fn for_role(role: &Role) -> Self {
        Self {
            label: role.to_string(),
            class: format!("role-badge {}", role.as_str().to_lowercase()),
        }
    }
}

/// Bar chart of stock on hand, one bar per item colored by status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    pub labels: Vec<String>,
    pub data: Vec<u32>,
    pub colors: Vec<&'static str>,
}

impl ChartSeries {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        Self {
            label: "Stock",
            labels: items.iter().map(|item| item.name.clone()).collect(),
            data: items.iter().map(|item| item.stock).collect(),
            colors: items
                .iter()
                .map(|item| item.status().chart_color())
                .collect(),
        }
    }
}

/// Whether a section restricted to `allowed_roles` (comma-separated, e.g.
/// `"Admin, Manager"`) is shown to `role`. Matching is exact after trimming.
pub fn section_visible(allowed_roles: &str, role: &Role) -> bool {
    allowed_roles
        .split(',')
        .map(str::trim)
        .any(|allowed| allowed == role.as_str())
}
