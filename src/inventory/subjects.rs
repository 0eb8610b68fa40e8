// Copyright (c) 2025 - Cowboy AI, Inc.

//! NATS subject hierarchy for inventory queries
//!
//! Defines the semantic subject patterns used to address a provider's
//! inventory service.
//!
//! # Subject Pattern
//!
//! All inventory queries follow the hierarchical pattern:
//!
//! ```text
//! inventory.{provider_uid}.{kind}
//! ```
//!
//! This allows for:
//! - Per-object-kind services (`inventory.{uid}.vm`)
//! - Provider-level wildcards (`inventory.{uid}.>`)
//!
//! # Examples
//!
//! ```rust
//! use cim_migration::inventory::subjects::FindSubject;
//! use cim_migration::domain::RefKind;
//! use uuid::Uuid;
//!
//! let uid = Uuid::parse_str("01934f4a-9000-7000-8000-000000009000").unwrap();
//! let subject = FindSubject::new(uid, RefKind::Vm);
//! assert_eq!(
//!     subject.to_string(),
//!     "inventory.01934f4a-9000-7000-8000-000000009000.vm"
//! );
//! ```

use std::fmt;
use uuid::Uuid;

use crate::domain::RefKind;

/// Root namespace for all inventory subjects
pub const INVENTORY_ROOT: &str = "inventory";

/// Subject addressing a provider's resolve service for one object kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindSubject {
    provider: Uuid,
    kind: RefKind,
}

impl FindSubject {
    /// Build the subject for resolving objects of `kind` on `provider`
    pub fn new(provider: Uuid, kind: RefKind) -> Self {
        Self { provider, kind }
    }
}

impl fmt::Display for FindSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", INVENTORY_ROOT, self.provider, self.kind)
    }
}
