// Copyright (c) 2025 - Cowboy AI, Inc.
//! Migration Precondition Validator
//!
//! The decision point gating whether a migration plan may execute for a given
//! VM. Each precondition is an independently callable query: it resolves the
//! VM (and transitively its host) through the injected inventory client,
//! cross-references the plan's mapping status, and returns a verdict. No
//! check depends on another's result.
//!
//! # Result Shape
//!
//! Three outcomes are structurally distinct and cannot be confused:
//!
//! - `Ok(Verdict::Satisfied)` - the precondition holds
//! - `Ok(Verdict::Unsatisfied(reason))` - a legitimate negative verdict,
//!   carrying the offending reference
//! - `Err(ValidatorError)` - the inventory lookup itself failed
//!
//! # Concurrency
//!
//! The validator holds no mutable state; the plan and inventory client are
//! read-only from its perspective. It is `Clone` (two `Arc`s) and checks for
//! the same or different VMs may run concurrently, provided the inventory
//! client is safe for concurrent reads.

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{Plan, Ref};
use crate::errors::{ValidatorError, ValidatorResult};
use crate::inventory::{InventoryClient, InventoryConfig, NatsInventoryClient, Vm};

/// Outcome of a single precondition check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The precondition holds
    Satisfied,
    /// The precondition does not hold, for the given reason
    Unsatisfied(Unsatisfied),
}

impl Verdict {
    /// Whether the precondition holds
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Verdict::Satisfied)
    }
}

/// Reason a precondition did not hold
///
/// Names the exact reference that blocks the migration so the surrounding
/// reconciler can report an actionable rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unsatisfied {
    /// A network the VM is attached to has no destination mapping
    NetworkNotMapped {
        /// The unmapped network
        network: Ref,
    },
    /// A datastore backing one of the VM's disks has no destination mapping
    DatastoreNotMapped {
        /// The unmapped datastore
        datastore: Ref,
    },
    /// The VM's host is in maintenance mode and unavailable for scheduling
    HostInMaintenance {
        /// The host in maintenance
        host: Ref,
    },
}

impl fmt::Display for Unsatisfied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unsatisfied::NetworkNotMapped { network } => {
                write!(f, "network {} has no destination mapping", network)
            }
            Unsatisfied::DatastoreNotMapped { datastore } => {
                write!(f, "datastore {} has no destination mapping", datastore)
            }
            Unsatisfied::HostInMaintenance { host } => {
                write!(f, "host {} is in maintenance mode", host)
            }
        }
    }
}

/// Migration precondition validator
///
/// Owns no persistent state: a read-only view of the plan and a handle to the
/// source provider's inventory client, both held for the validator's
/// lifetime.
#[derive(Clone)]
pub struct Validator {
    plan: Arc<Plan>,
    inventory: Arc<dyn InventoryClient>,
}

impl Validator {
    /// Create a validator with an already-constructed inventory client
    ///
    /// This is the injection seam: production callers pass the NATS-backed
    /// client, tests pass a fake.
    pub fn with_client(plan: Arc<Plan>, inventory: Arc<dyn InventoryClient>) -> Self {
        Self { plan, inventory }
    }

    /// Construct the inventory client for the plan's source provider and
    /// build a validator around it
    ///
    /// Fails when no usable client can be constructed (unreachable or
    /// misconfigured provider). A validator cannot exist without a working
    /// client, so no check can ever run before successful initialization.
    pub async fn load(plan: Arc<Plan>, config: InventoryConfig) -> ValidatorResult<Self> {
        let client = NatsInventoryClient::connect(config, &plan.source_provider)
            .await
            .map_err(|source| ValidatorError::ClientInit {
                provider: plan.source_provider.name.clone(),
                source,
            })?;
        Ok(Self::with_client(plan, Arc::new(client)))
    }

    /// Whether the plan's source provider supports warm migration
    ///
    /// Pure capability lookup; no inventory call, no side effects.
    pub fn warm_migration_supported(&self) -> bool {
        self.plan.source_provider.kind.supports_warm_migration()
    }

    /// Validate that every network the VM is attached to has been mapped
    ///
    /// A plan with no network mapping configured has no network requirement;
    /// the check is vacuously satisfied without touching inventory.
    pub async fn networks_mapped(&self, vm_ref: &Ref) -> ValidatorResult<Verdict> {
        let map = match &self.plan.network_map {
            Some(map) => map,
            None => return Ok(Verdict::Satisfied),
        };

        let vm = self.find_vm(vm_ref).await?;
        for network in &vm.networks {
            if !map.contains(network) {
                debug!("Network {} on VM {} has no destination mapping", network, vm_ref);
                return Ok(Verdict::Unsatisfied(Unsatisfied::NetworkNotMapped {
                    network: network.clone(),
                }));
            }
        }

        Ok(Verdict::Satisfied)
    }

    /// Validate that every datastore backing the VM's disks has been mapped
    ///
    /// Vacuously satisfied, without an inventory call, when the plan declares
    /// no storage mapping.
    pub async fn storage_mapped(&self, vm_ref: &Ref) -> ValidatorResult<Verdict> {
        let map = match &self.plan.storage_map {
            Some(map) => map,
            None => return Ok(Verdict::Satisfied),
        };

        let vm = self.find_vm(vm_ref).await?;
        for disk in &vm.disks {
            if !map.contains(&disk.datastore) {
                debug!(
                    "Datastore {} backing VM {} has no destination mapping",
                    disk.datastore, vm_ref
                );
                return Ok(Verdict::Unsatisfied(Unsatisfied::DatastoreNotMapped {
                    datastore: disk.datastore.clone(),
                }));
            }
        }

        Ok(Verdict::Satisfied)
    }

    /// Validate that the VM's host is not in maintenance mode
    ///
    /// `Satisfied` means the host is usable for scheduling. A host lookup
    /// failure reports both the host and the VM it was reached from.
    pub async fn maintenance_mode(&self, vm_ref: &Ref) -> ValidatorResult<Verdict> {
        let vm = self.find_vm(vm_ref).await?;

        let host = self
            .inventory
            .find_host(&vm.host)
            .await
            .map_err(|source| ValidatorError::HostLookup {
                vm: vm_ref.clone(),
                host: vm.host.clone(),
                source,
            })?;

        if host.in_maintenance {
            debug!("Host {} of VM {} is in maintenance mode", vm.host, vm_ref);
            return Ok(Verdict::Unsatisfied(Unsatisfied::HostInMaintenance {
                host: vm.host.clone(),
            }));
        }

        Ok(Verdict::Satisfied)
    }

    async fn find_vm(&self, vm_ref: &Ref) -> ValidatorResult<Vm> {
        self.inventory
            .find_vm(vm_ref)
            .await
            .map_err(|source| ValidatorError::VmLookup {
                vm: vm_ref.clone(),
                source,
            })
    }
}
