//! Dashboard facade wiring presentation inputs to the session manager and
//! the inventory ledger.
//!
//! The facade keeps the in-memory item list and the active filter, the
//! state a page holds between events. Both components stay independent and
//! share only the store.
//!
//! ## Example
//!
//! ```
//! use stockroom::config::DashboardConfig;
//! use stockroom::dashboard::Dashboard;
//! use stockroom::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! let mut dashboard = Dashboard::open(Arc::new(MemoryStore::new()), &DashboardConfig::default())
//!     .unwrap();
//! assert!(dashboard.view().is_none());
//!
//! dashboard.login(" admin ", "admin123").unwrap();
//! dashboard.set_filter("", "Critical");
//!
//! let view = dashboard.view().unwrap();
//! assert_eq!(view.welcome, "Welcome, Demo Admin");
//! assert_eq!(view.summary.critical, 2);
//! ```

pub mod view;

pub use view::{ChartSeries, DashboardView, ItemRow, RoleBadge, section_visible};

use crate::{
    auth::{
        AuthResult, LoginRequest, RegisterRequest, Role, SessionClaims, SessionManager,
        SessionToken,
    },
    config::DashboardConfig,
    inventory::{InventoryItem, InventoryLedger, InventoryResult},
    storage::{FileStore, KeyValueStore, MemoryStore},
};
use std::sync::Arc;

/// Dashboard page state
pub struct Dashboard {
    auth: SessionManager,
    ledger: InventoryLedger,
    items: Vec<InventoryItem>,
    search: String,
    status_filter: String,
}

impl Dashboard {
    /// Open the dashboard over `store`
    ///
    /// Seeds the demo admin when configured and the directory is empty,
    /// then loads the item list.
    ///
    /// # Errors
    ///
    /// * `AuthError::Storage` - Seeding the demo user failed
    pub fn open(store: Arc<dyn KeyValueStore>, config: &DashboardConfig) -> AuthResult<Self> {
        let auth = SessionManager::new(store.clone(), config);
        let ledger = InventoryLedger::new(store);

        if config.seed_demo_user {
            auth.seed_demo_user()?;
        }

        let items = ledger.load();
        Ok(Self {
            auth,
            ledger,
            items,
            search: String::new(),
            status_filter: String::new(),
        })
    }

    /// Store selected by `config`: a file store when a path is set,
    /// otherwise an empty in-memory store
    pub fn store_for(config: &DashboardConfig) -> Arc<dyn KeyValueStore> {
        match &config.storage_path {
            Some(path) => Arc::new(FileStore::new(path)),
            None => Arc::new(MemoryStore::new()),
        }
    }

    /// Session manager
    pub fn auth(&self) -> &SessionManager {
        &self.auth
    }

    /// Inventory ledger
    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    /// Register from the sign-up form; text fields are trimmed, the
    /// password is used as typed
    pub fn register(
        &mut self,
        name: &str,
        username: &str,
        email: &str,
        password: &str,
        role: impl Into<Role>,
    ) -> AuthResult<SessionToken> {
        let token = self.auth.register(RegisterRequest {
            name: name.trim().to_string(),
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            role: role.into(),
        })?;
        self.refresh();
        Ok(token)
    }

    /// Log in from the sign-in form
    pub fn login(&mut self, username: &str, password: &str) -> AuthResult<SessionToken> {
        let token = self.auth.login(LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        })?;
        self.refresh();
        Ok(token)
    }

    /// End the session and reset the filter
    pub fn logout(&mut self) -> AuthResult<()> {
        self.auth.logout()?;
        self.search.clear();
        self.status_filter.clear();
        Ok(())
    }

    /// Claims of the active session
    pub fn current_user(&self) -> Option<SessionClaims> {
        self.auth.current_user()
    }

    /// Set the search text and status label filter; empty values match all
    pub fn set_filter(&mut self, search: &str, status_filter: &str) {
        self.search = search.to_string();
        self.status_filter = status_filter.to_string();
    }

    /// Add or update an item from the item form
    ///
    /// On error the list is left unchanged.
    pub fn upsert_item(&mut self, name: &str, stock: &str, reorder: &str) -> InventoryResult<()> {
        self.items = self.ledger.upsert_form(&self.items, name, stock, reorder)?;
        Ok(())
    }

    /// Re-read the item list from the store
    pub fn refresh(&mut self) {
        self.items = self.ledger.load();
    }

    /// Unfiltered item list
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Items matching the current filter
    pub fn filtered_items(&self) -> Vec<InventoryItem> {
        InventoryLedger::filter(&self.items, &self.search, &self.status_filter)
    }

    /// View for the signed-in user, or `None` when the sign-in page should
    /// be shown instead
    pub fn view(&self) -> Option<DashboardView> {
        let claims = self.current_user()?;
        Some(DashboardView::build(&claims, &self.filtered_items()))
    }

    /// Whether a section restricted to `allowed_roles` is visible now
    pub fn section_visible(&self, allowed_roles: &str) -> bool {
        self.current_user()
            .is_some_and(|claims| section_visible(allowed_roles, &claims.role))
    }
}
