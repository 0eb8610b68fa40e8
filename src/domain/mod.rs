// Copyright (c) 2025 - Cowboy AI, Inc.
//! Migration Domain Models
//!
//! Core domain concepts for migration precondition validation: opaque
//! inventory references, the source provider taxonomy with its capability
//! lookups, and the migration plan with its declared mappings.
//!
//! # Value Objects
//!
//! - [`Ref`] / [`RefKind`] - opaque comparable inventory identifiers
//! - [`RefSet`] - exact-match membership over references
//! - [`ProviderKind`] - provider taxonomy with capability lookups
//!
//! # Entities
//!
//! - [`Plan`] - migration plan with optional network/storage mappings
//! - [`SourceProvider`] - identity of the plan's source provider

pub mod plan;
pub mod provider;
pub mod reference;

// Re-export value objects
pub use plan::{MapStatus, NetworkMap, Plan, StorageMap};
pub use provider::{ProviderKind, SourceProvider};
pub use reference::{Ref, RefKind, RefSet};
