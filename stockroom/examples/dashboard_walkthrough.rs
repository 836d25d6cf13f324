//! Dashboard Walkthrough Example
//!
//! Drives the dashboard the way the page does: sign in as the demo admin,
//! edit a few items, and print the table and stock chart as text.
//!
//! Run with `RUST_LOG=debug` to see the library's log output. Set
//! `INVENTORY_STORAGE_PATH` to keep state between runs.

use anyhow::Context;
use stockroom::{Dashboard, DashboardConfig, DashboardView};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::from_env().context("invalid dashboard configuration")?;
    let mut dashboard = Dashboard::open(Dashboard::store_for(&config), &config)
        .map_err(|e| anyhow::anyhow!(e.client_message()))?;

    println!("=== Inventory Dashboard Walkthrough ===\n");

    if dashboard.current_user().is_none() {
        dashboard
            .login("admin", "admin123")
            .map_err(|e| anyhow::anyhow!(e.client_message()))?;
    }

    for (name, stock, reorder) in [("Logitech Mouse", "14", "10"), ("USB-C Dock", "3", "6")] {
        dashboard
            .upsert_item(name, stock, reorder)
            .map_err(|e| anyhow::anyhow!(e.client_message()))?;
    }

    if let Err(e) = dashboard.upsert_item("Broken Entry", "-4", "2") {
        println!("Rejected edit: {}\n", e.client_message());
    }

    let view = dashboard.view().context("no active session")?;
    print_view(&view);

    println!("\nCritical items only:");
    dashboard.set_filter("", "Critical");
    if let Some(view) = dashboard.view() {
        print_view(&view);
    }

    Ok(())
}

fn print_view(view: &DashboardView) {
    println!("{} [{}]", view.welcome, view.role_badge.label);
    println!(
        "Total: {}  Healthy: {}  Low: {}  Critical: {}\n",
        view.summary.total, view.summary.healthy, view.summary.low, view.summary.critical
    );

    println!("{:<4} {:<22} {:>6} {:>8}  Status", "ID", "Product", "Stock", "Reorder");
    for row in &view.rows {
        println!(
            "{:<4} {:<22} {:>6} {:>8}  {}",
            row.id, row.name, row.stock, row.reorder, row.status
        );
    }

    let max = view.chart.data.iter().copied().max().unwrap_or(0).max(1);
    println!("\n{}", view.chart.label);
    for (label, stock) in view.chart.labels.iter().zip(&view.chart.data) {
        let width = (*stock as usize * 40) / max as usize;
        println!("{:<22} {} {}", label, "#".repeat(width), stock);
    }
}
