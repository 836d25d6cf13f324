//! Key-value persistence standing in for browser local storage.
//!
//! Every component reads and writes whole string values under fixed keys.
//! Collections are stored as JSON arrays; the session token is stored as a
//! bare string.
//!
//! - [`MemoryStore`]: process-local map, used by tests and embedders
//! - [`FileStore`]: a single JSON object file, one entry per key
//!
//! ## Example
//!
//! ```
//! use stockroom::storage::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set_item("inventory_jwt", "abc").unwrap();
//! assert_eq!(store.get_item("inventory_jwt").as_deref(), Some("abc"));
//! ```

pub mod errors;
pub mod file;
pub mod memory;

pub use errors::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{Serialize, de::DeserializeOwned};

/// Key holding the active session token
pub const TOKEN_KEY: &str = "inventory_jwt";

/// Key holding the user directory
pub const USERS_KEY: &str = "inventory_users";

/// Key holding the inventory item list
pub const INVENTORY_KEY: &str = "inventory_data";

/// Synchronous string key-value store.
///
/// Reads never fail: a missing or unreadable entry is reported as `None`.
/// Writes report backend failures so callers can surface them.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

/// Read and deserialize the JSON value stored under `key`.
///
/// Returns `None` when the key is absent. Corrupt contents are logged and
/// also reported as `None` so callers fall back to their defaults.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding malformed data under '{}': {}", key, e);
            None
        }
    }
}

/// Serialize `value` as JSON and store it under `key`
pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}
