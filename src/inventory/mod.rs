//! Inventory client abstraction for provider snapshot queries
//!
//! The inventory service holds a live snapshot of a virtualization provider.
//! This module defines the read-only client boundary the validator consumes:
//! one resolve operation per typed object, failing with a not-found-class
//! error when a reference does not resolve. The client is always an injected
//! dependency, never ambient state, so it can be substituted with a fake in
//! tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Ref, RefKind};

pub mod model;
pub mod nats;
pub mod subjects;

pub use model::{Disk, Host, Vm};
pub use nats::{InventoryConfig, NatsInventoryClient};

/// Errors that can occur querying the inventory service
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Connection to the inventory service failed
    #[error("inventory connection error: {0}")]
    Connection(String),

    /// A request could not be sent or completed
    #[error("inventory request error: {0}")]
    Request(String),

    /// The referenced object does not exist in the current snapshot
    #[error("{kind} {id} not found in inventory")]
    NotFound {
        /// Kind of object looked up
        kind: RefKind,
        /// Identifier that failed to resolve
        id: String,
    },

    /// The service's response could not be decoded
    #[error("inventory response decode error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Deserialization(err.to_string())
    }
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Read-only resolver for inventory references
///
/// Each call resolves against the snapshot current at that instant; results
/// are not cached and consecutive calls may observe different snapshots.
/// Implementations must be safe for concurrent reads.
#[async_trait]
pub trait InventoryClient: Send + Sync {
    /// Resolve a VM reference to its inventory object
    async fn find_vm(&self, vm_ref: &Ref) -> InventoryResult<Vm>;

    /// Resolve a host reference to its inventory object
    async fn find_host(&self, host_ref: &Ref) -> InventoryResult<Host>;
}
