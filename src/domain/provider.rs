// Copyright (c) 2025 - Cowboy AI, Inc.
//! Source Provider Taxonomy and Capabilities
//!
//! Defines the virtualization provider kinds a migration plan can name as its
//! source, along with per-kind capability lookups. Capability questions are
//! answered here, keyed by variant, so call sites never match on the provider
//! kind themselves and new kinds with differing capabilities slot in without
//! touching them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Virtualization provider taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// VMware vSphere
    VSphere,
    /// Red Hat Virtualization (oVirt)
    OVirt,
    /// OpenStack
    OpenStack,
    /// Open Virtual Appliance import
    Ova,
}

impl ProviderKind {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VSphere => "vsphere",
            Self::OVirt => "ovirt",
            Self::OpenStack => "openstack",
            Self::Ova => "ova",
        }
    }

    /// Whether this provider kind supports warm (live, incremental) migration
    ///
    /// Appliance imports have no running source to transfer incrementally
    /// from, so they are cold-only.
    pub fn supports_warm_migration(&self) -> bool {
        match self {
            Self::VSphere | Self::OVirt | Self::OpenStack => true,
            Self::Ova => false,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of the provider a migration plan sources VMs from
///
/// The UID scopes the inventory subject space during client initialization;
/// the kind drives capability lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceProvider {
    /// Unique identity of the provider registration
    pub uid: Uuid,
    /// Human-readable provider name
    pub name: String,
    /// Provider taxonomy entry
    pub kind: ProviderKind,
}
