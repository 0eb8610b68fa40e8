//! Error types for migration precondition validation

use thiserror::Error;

use crate::domain::Ref;
use crate::inventory::InventoryError;

/// Errors surfaced by the precondition validator
///
/// Two kinds exist: client initialization failure, which is fatal to all
/// subsequent checks, and lookup failure during VM or host resolution, which
/// is surfaced to the caller to retry, skip, or fail the plan. Lookup errors
/// always carry the reference(s) involved so a caller logging the error can
/// see exactly which resolution failed.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The inventory client could not be constructed for the plan's source provider
    #[error("inventory client init failed for provider {provider}: {source}")]
    ClientInit {
        /// Name of the source provider
        provider: String,
        /// Underlying client failure
        source: InventoryError,
    },

    /// The VM reference did not resolve in inventory
    #[error("failed to resolve VM {vm} in inventory: {source}")]
    VmLookup {
        /// Reference that failed to resolve
        vm: Ref,
        /// Underlying client failure
        source: InventoryError,
    },

    /// The VM's host reference did not resolve in inventory
    ///
    /// Retains the VM reference for diagnostic context; the host reference
    /// alone is not user-meaningful.
    #[error("failed to resolve host {host} of VM {vm} in inventory: {source}")]
    HostLookup {
        /// VM whose host was being resolved
        vm: Ref,
        /// Host reference that failed to resolve
        host: Ref,
        /// Underlying client failure
        source: InventoryError,
    },
}

/// Result type for validator operations
pub type ValidatorResult<T> = Result<T, ValidatorError>;
