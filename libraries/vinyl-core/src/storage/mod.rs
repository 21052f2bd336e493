//! Durable key-value storage
//!
//! The session layer never touches a concrete backend; it is handed a
//! `KeyValueStore` so it can be exercised without a real disk.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Slot holding the raw credential token.
pub const TOKEN_KEY: &str = "token";

/// Slot holding the serialized `User` JSON.
pub const USER_KEY: &str = "user";

/// Synchronous string key-value persistence.
///
/// Implementations must be usable from several tasks at once; writes are
/// applied immediately and are not transactional across keys.
pub trait KeyValueStore: Send + Sync {
    /// Read a slot. Missing slots are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing a missing slot is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
