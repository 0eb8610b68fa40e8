// Copyright (c) 2025 - Cowboy AI, Inc.
//! Migration Plan Domain Model
//!
//! A plan declares which provider VMs are migrated from, the requested
//! migration mode, and the network/storage mappings those VMs must be covered
//! by. Mapping status is populated by the mapping subsystem elsewhere; this
//! crate only reads it.
//!
//! # Absent vs. empty mappings
//!
//! A plan with no network mapping configured has no network requirement at
//! all: any VM is vacuously covered. A mapping that is present but whose
//! resolved set is empty is the opposite: no VM with networks can be covered.
//! The two states are kept distinct (`Option` vs. empty [`RefSet`]) and must
//! never be collapsed into one another.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::provider::SourceProvider;
use crate::domain::reference::{Ref, RefSet};

/// Migration plan as seen by the precondition validator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique plan identity
    pub id: Uuid,
    /// Human-readable plan name
    pub name: String,
    /// Whether warm (live, incremental) migration was requested
    pub warm: bool,
    /// Provider the plan sources VMs from
    pub source_provider: SourceProvider,
    /// Declared network mapping, if any
    pub network_map: Option<NetworkMap>,
    /// Declared storage mapping, if any
    pub storage_map: Option<StorageMap>,
}

/// Network mapping declared by a plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkMap {
    /// Resolution status populated by the mapping subsystem
    pub status: MapStatus,
}

impl NetworkMap {
    /// Whether the given network reference has been mapped to a destination
    pub fn contains(&self, r: &Ref) -> bool {
        self.status.refs.contains(r)
    }
}

/// Storage mapping declared by a plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageMap {
    /// Resolution status populated by the mapping subsystem
    pub status: MapStatus,
}

impl StorageMap {
    /// Whether the given datastore reference has been mapped to a destination
    pub fn contains(&self, r: &Ref) -> bool {
        self.status.refs.contains(r)
    }
}

/// Resolution status of a mapping
///
/// Holds the provider-side references that have successfully been mapped to
/// destination resources. Membership is exact-ID match via [`RefSet`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapStatus {
    /// Provider-side references already mapped to a destination
    pub refs: RefSet,
    /// When the mapping subsystem last resolved the set
    pub updated_at: Option<DateTime<Utc>>,
}
