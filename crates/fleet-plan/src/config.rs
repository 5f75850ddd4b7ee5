//! `PlanConfig` — the partitioning policy as data.

use fleet_core::{PackageId, VehicleId};
use fleet_store::Deadline;

use crate::{PlanError, PlanResult};

/// One manifest slot and the vehicle that will run it.
#[derive(Clone, Debug)]
pub struct ManifestSpec {
    /// The vehicle this manifest is destined for.
    pub vehicle: VehicleId,

    /// When set, the route builder's capacity top-up prefers packages with
    /// exactly this deadline until none remain, then falls back to
    /// unconstrained nearest-neighbor.
    pub deadline_focus: Option<Deadline>,
}

/// The full partitioning policy: how many manifests exist, which manifest
/// each constraint rule fills, and the grouped-package override list.
///
/// Keeping the policy as data (rather than branching inline on manifest
/// numbers) makes the rule passes testable with arbitrary layouts.
#[derive(Clone, Debug)]
pub struct PlanConfig {
    /// Maximum packages per manifest (vehicle capacity).
    pub capacity: usize,

    /// One spec per manifest, in dispatch-priority order.
    pub manifests: Vec<ManifestSpec>,

    /// Index of the manifest that receives "must ship together" packages.
    pub group_manifest: usize,

    /// Index of the manifest that receives delayed-availability packages.
    pub delayed_manifest: usize,

    /// Package ids force-grouped into `group_manifest` even when their own
    /// note carries no marker (they are named by *other* packages' notes).
    pub group_overrides: Vec<PackageId>,
}

impl PlanConfig {
    /// Check index consistency.  Called by `Partitioner::new`, so a bad
    /// config aborts before any package is assigned.
    pub fn validate(&self) -> PlanResult<()> {
        if self.capacity == 0 {
            return Err(PlanError::BadConfig("manifest capacity is zero".into()));
        }
        if self.manifests.is_empty() {
            return Err(PlanError::BadConfig("no manifests configured".into()));
        }
        for (name, idx) in [
            ("group_manifest", self.group_manifest),
            ("delayed_manifest", self.delayed_manifest),
        ] {
            if idx >= self.manifests.len() {
                return Err(PlanError::BadConfig(format!(
                    "{name} index {idx} out of range for {} manifests",
                    self.manifests.len()
                )));
            }
        }
        Ok(())
    }

    /// Index of the manifest bound to `vehicle`, if any.
    pub fn vehicle_manifest(&self, vehicle: VehicleId) -> Option<usize> {
        self.manifests.iter().position(|m| m.vehicle == vehicle)
    }
}
