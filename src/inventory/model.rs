// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory snapshot objects
//!
//! Typed objects the inventory service resolves references into. They are
//! read-only: produced per query, consumed, and dropped — never mutated or
//! cached by the validator.

use serde::{Deserialize, Serialize};

use crate::domain::Ref;

/// Virtual machine topology as reported by the inventory snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vm {
    /// Provider-side VM identifier
    pub id: String,
    /// VM display name
    pub name: String,
    /// Networks the VM is attached to
    pub networks: Vec<Ref>,
    /// Virtual disks and their storage backing
    pub disks: Vec<Disk>,
    /// Host the VM is placed on
    pub host: Ref,
}

/// Virtual disk entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disk {
    /// Datastore backing this disk
    pub datastore: Ref,
    /// Provisioned capacity
    pub capacity_bytes: u64,
}

/// Hypervisor host as reported by the inventory snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    /// Provider-side host identifier
    pub id: String,
    /// Host display name
    pub name: String,
    /// Whether the host is in maintenance mode and unavailable for scheduling
    pub in_maintenance: bool,
}
