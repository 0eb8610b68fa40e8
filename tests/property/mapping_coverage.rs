// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Mapping Coverage Verdicts
//!
//! These tests prove the properties that must hold for all reference sets
//! and VM topologies: membership is exact-match, absent mappings are
//! vacuously satisfied without inventory lookups, and coverage verdicts form
//! a dichotomy (all references mapped, or a named unmapped reference).

use std::sync::Arc;

use proptest::collection::hash_set;
use proptest::prelude::*;

use cim_migration::domain::{Ref, RefKind, RefSet};
use cim_migration::{Validator, Verdict};

use crate::fixtures::{self, FakeInventory};

/// Strategy for opaque provider-side identifiers
fn id_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,6}-[0-9]{1,4}"
}

proptest! {
    /// Membership over a reference set is exactly the inserted references,
    /// and the same ID under another kind never matches
    #[test]
    fn prop_refset_membership_is_exact(
        inserted in hash_set(id_strategy(), 0..16),
        probe in id_strategy(),
    ) {
        let set: RefSet = inserted
            .iter()
            .map(|id| Ref::new(RefKind::Network, id.clone()))
            .collect();

        for id in &inserted {
            prop_assert!(set.contains(&Ref::new(RefKind::Network, id.clone())));
            prop_assert!(!set.contains(&Ref::new(RefKind::Datastore, id.clone())));
        }
        prop_assert_eq!(
            set.contains(&Ref::new(RefKind::Network, probe.clone())),
            inserted.contains(&probe)
        );
    }

    /// A plan with no mappings is satisfied for any VM topology without a
    /// single inventory lookup
    #[test]
    fn prop_absent_mappings_vacuously_satisfied(
        network_ids in hash_set(id_strategy(), 0..8),
        datastore_ids in hash_set(id_strategy(), 0..8),
    ) {
        let networks: Vec<Ref> = network_ids.iter().map(|id| fixtures::network_ref(id)).collect();
        let disks = datastore_ids.iter().map(|id| fixtures::disk(id)).collect();

        let fake = Arc::new(FakeInventory::new().with_vm(fixtures::vm(networks, disks)));
        let validator = Validator::with_client(Arc::new(fixtures::plan()), fake.clone());

        let networks_verdict = tokio_test::block_on(validator.networks_mapped(&fixtures::vm_ref()))
            .expect("vacuous check cannot fail");
        let storage_verdict = tokio_test::block_on(validator.storage_mapped(&fixtures::vm_ref()))
            .expect("vacuous check cannot fail");

        prop_assert_eq!(networks_verdict, Verdict::Satisfied);
        prop_assert_eq!(storage_verdict, Verdict::Satisfied);
        prop_assert_eq!(fake.vm_lookups(), 0);
    }

    /// A VM whose networks are all drawn from the resolved set is always
    /// satisfied; adding one network outside it never is
    #[test]
    fn prop_network_coverage_dichotomy(
        mapped in hash_set(id_strategy(), 1..12),
        outside in id_strategy(),
    ) {
        prop_assume!(!mapped.contains(&outside));

        let mapped_refs: Vec<Ref> = mapped.iter().map(|id| fixtures::network_ref(id)).collect();

        // covered topology
        let mut plan = fixtures::plan();
        plan.network_map = Some(fixtures::network_map(mapped_refs.clone()));
        let fake = Arc::new(FakeInventory::new().with_vm(fixtures::vm(mapped_refs.clone(), vec![])));
        let validator = Validator::with_client(Arc::new(plan.clone()), fake);

        let verdict = tokio_test::block_on(validator.networks_mapped(&fixtures::vm_ref()))
            .expect("lookup cannot fail against the fake");
        prop_assert_eq!(verdict, Verdict::Satisfied);

        // same topology plus one network outside the resolved set
        let mut uncovered = mapped_refs;
        uncovered.push(fixtures::network_ref(&outside));
        let fake = Arc::new(FakeInventory::new().with_vm(fixtures::vm(uncovered, vec![])));
        let validator = Validator::with_client(Arc::new(plan), fake);

        let verdict = tokio_test::block_on(validator.networks_mapped(&fixtures::vm_ref()))
            .expect("lookup cannot fail against the fake");
        prop_assert!(!verdict.is_satisfied());
    }

    /// The storage dichotomy holds symmetrically over disk datastore backings
    #[test]
    fn prop_storage_coverage_dichotomy(
        mapped in hash_set(id_strategy(), 1..12),
        outside in id_strategy(),
    ) {
        prop_assume!(!mapped.contains(&outside));

        let mapped_refs: Vec<Ref> = mapped.iter().map(|id| fixtures::datastore_ref(id)).collect();
        let covered_disks = mapped.iter().map(|id| fixtures::disk(id)).collect();

        let mut plan = fixtures::plan();
        plan.storage_map = Some(fixtures::storage_map(mapped_refs));
        let fake = Arc::new(FakeInventory::new().with_vm(fixtures::vm(vec![], covered_disks)));
        let validator = Validator::with_client(Arc::new(plan.clone()), fake);

        let verdict = tokio_test::block_on(validator.storage_mapped(&fixtures::vm_ref()))
            .expect("lookup cannot fail against the fake");
        prop_assert_eq!(verdict, Verdict::Satisfied);

        let mut uncovered_disks: Vec<_> = mapped.iter().map(|id| fixtures::disk(id)).collect();
        uncovered_disks.push(fixtures::disk(&outside));
        let fake = Arc::new(FakeInventory::new().with_vm(fixtures::vm(vec![], uncovered_disks)));
        let validator = Validator::with_client(Arc::new(plan), fake);

        let verdict = tokio_test::block_on(validator.storage_mapped(&fixtures::vm_ref()))
            .expect("lookup cannot fail against the fake");
        prop_assert!(!verdict.is_satisfied());
    }
}
