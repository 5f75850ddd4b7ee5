//! `PackageStore` — the keyed associative store for all packages.
//!
//! # Container choice
//!
//! Backed by a `BTreeMap<PackageId, Package>`: O(log N) lookup at a scale of
//! tens of packages, and — the deciding property — iteration in ascending
//! `PackageId` order.  Every scan the planner and route builder perform over
//! the store observes the same order on every run, which makes the
//! "first-found wins" behavior of equidistant nearest-neighbor candidates a
//! *documented* deterministic tie-break: the lowest id wins.

use std::collections::BTreeMap;

use fleet_core::{Minute, PackageId};

use crate::{Package, StoreError, StoreResult};

/// Keyed store from package identifier to the mutable package record.
#[derive(Debug, Default)]
pub struct PackageStore {
    inner: BTreeMap<PackageId, Package>,
}

impl PackageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a package.  Fails with `DuplicateKey` if the id is taken.
    pub fn insert(&mut self, package: Package) -> StoreResult<()> {
        let id = package.id;
        if self.inner.contains_key(&id) {
            return Err(StoreError::DuplicateKey(id));
        }
        self.inner.insert(id, package);
        Ok(())
    }

    /// Exact lookup.  A miss is `None`, never an error — callers decide
    /// whether absence is recoverable.
    #[inline]
    pub fn get(&self, id: PackageId) -> Option<&Package> {
        self.inner.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: PackageId) -> Option<&mut Package> {
        self.inner.get_mut(&id)
    }

    /// Remove and return a package.
    pub fn remove(&mut self, id: PackageId) -> Option<Package> {
        self.inner.remove(&id)
    }

    /// Overwrite a package's delivery address — the one field mutated
    /// post-construction outside status and delivery time (the mid-day
    /// correction event).
    pub fn update_address(&mut self, id: PackageId, new_address: impl Into<String>) -> StoreResult<()> {
        let package = self.inner.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        package.address = new_address.into();
        Ok(())
    }

    /// Mark a package delivered at `time`.
    pub fn mark_delivered(&mut self, id: PackageId, time: Minute) -> StoreResult<()> {
        let package = self.inner.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        package.deliver(time);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterator over all packages in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Package> + '_ {
        self.inner.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Package> + '_ {
        self.inner.values_mut()
    }

    /// Iterator over all ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = PackageId> + '_ {
        self.inner.keys().copied()
    }
}
