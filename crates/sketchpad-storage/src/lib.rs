//! Persistence layer for sketchpad.
//!
//! This crate provides a key-value storage abstraction with two backends:
//! - JSON file storage (default)
//! - In-memory storage (for tests and storage-less sessions)
//!
//! The version history is stored as a single record under a fixed key and
//! overwritten whole on every change. Persistence is best-effort by design:
//! callers are expected to keep operating on their in-memory state when a
//! backend is absent or failing.

pub mod error;
pub mod json;
pub mod memory;

pub use error::{StorageError, StorageResult};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

/// A trait for key-value storage backends.
///
/// Keys are represented as path segments, e.g., `["sketchpad", "history"]`.
/// Values are serialized/deserialized as JSON.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read a value from storage.
    ///
    /// Returns `None` if the key doesn't exist.
    async fn read<T: DeserializeOwned + Send>(&self, key: &[&str]) -> StorageResult<Option<T>>;

    /// Write a value to storage, replacing any previous value.
    async fn write<T: Serialize + Send + Sync>(&self, key: &[&str], value: &T)
        -> StorageResult<()>;

    /// Remove a value from storage.
    ///
    /// Removing a missing key is not an error.
    async fn remove(&self, key: &[&str]) -> StorageResult<()>;

    /// Check if a key exists.
    async fn exists(&self, key: &[&str]) -> StorageResult<bool>;
}
