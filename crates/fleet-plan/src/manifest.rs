//! `Manifest` — the bounded set of package ids assigned to one vehicle trip.

use rustc_hash::FxHashSet;

use fleet_core::PackageId;

/// A capacity-bounded collection of package ids.
///
/// Insertion order is preserved (it is observable through [`Manifest::iter`]
/// and [`Manifest::drain`]), and membership tests are O(1) — manifest
/// `contains` checks sit inside the route builder's O(N²) selection loop.
#[derive(Debug)]
pub struct Manifest {
    ids:      Vec<PackageId>,
    members:  FxHashSet<PackageId>,
    capacity: usize,
}

impl Manifest {
    pub fn new(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            members: FxHashSet::default(),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    /// Add a package id.
    ///
    /// Returns `false` — a silent no-op, not an error — when the manifest is
    /// full or already contains the id.  The package stays eligible for a
    /// later fill pass; the caller can observe this through its unchanged
    /// at-hub status.
    pub fn insert(&mut self, id: PackageId) -> bool {
        if self.is_full() || self.members.contains(&id) {
            return false;
        }
        self.members.insert(id);
        self.ids.push(id);
        true
    }

    /// O(1) membership test.
    #[inline]
    pub fn contains(&self, id: PackageId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterator over member ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = PackageId> + '_ {
        self.ids.iter().copied()
    }

    /// Empty the manifest, returning its ids in insertion order.
    ///
    /// Called when a trip freezes its route: the membership moves into the
    /// route, and the emptied manifest can accumulate deferred packages for
    /// a later trip of the same vehicle.
    pub fn drain(&mut self) -> Vec<PackageId> {
        self.members.clear();
        std::mem::take(&mut self.ids)
    }
}
