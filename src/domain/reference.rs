// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Reference Value Objects
//!
//! References are opaque, comparable identifiers naming inventory objects
//! (VMs, hosts) and mapped resources (networks, datastores). Equality is by
//! identifier value, never by object identity, so a reference obtained from a
//! VM's topology compares equal to the same reference recorded in a mapping
//! status.
//!
//! # Examples
//!
//! ```rust
//! use cim_migration::domain::{Ref, RefKind, RefSet};
//!
//! let mapped: RefSet = [Ref::new(RefKind::Network, "net-12")].into_iter().collect();
//! assert!(mapped.contains(&Ref::new(RefKind::Network, "net-12")));
//! assert!(!mapped.contains(&Ref::new(RefKind::Network, "net-13")));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Kinds of inventory objects a reference can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    /// Virtual machine
    Vm,
    /// Hypervisor host
    Host,
    /// Virtual network
    Network,
    /// Datastore backing virtual disks
    Datastore,
}

impl RefKind {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vm => "vm",
            Self::Host => "host",
            Self::Network => "network",
            Self::Datastore => "datastore",
        }
    }
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque reference to an inventory object or mapped resource
///
/// Invariants:
/// - Equality and hashing are by `(kind, id)` value
/// - The ID is opaque to this crate; no structure is assumed beyond exactness
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ref {
    /// Kind of object this reference names
    pub kind: RefKind,
    /// Provider-side identifier
    pub id: String,
}

impl Ref {
    /// Create a new reference
    pub fn new(kind: RefKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

/// Set of references with exact-match membership
///
/// Membership is exact `(kind, id)` equality. There is no partial or
/// hierarchical matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefSet(HashSet<Ref>);

impl RefSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reference to the set
    pub fn insert(&mut self, r: Ref) -> bool {
        self.0.insert(r)
    }

    /// Test membership by exact identifier match
    pub fn contains(&self, r: &Ref) -> bool {
        self.0.contains(r)
    }

    /// Number of references in the set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the references
    pub fn iter(&self) -> impl Iterator<Item = &Ref> {
        self.0.iter()
    }
}

impl FromIterator<Ref> for RefSet {
    fn from_iter<I: IntoIterator<Item = Ref>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Ref> for RefSet {
    fn extend<I: IntoIterator<Item = Ref>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}
