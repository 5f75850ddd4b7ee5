//! `DistanceGrid` — address index and distance matrix behind one facade.

use fleet_core::AddressId;

use crate::{AddressIndex, DistanceMatrix, GridError, GridResult};

/// The complete read-only geography: an [`AddressIndex`] plus the
/// [`DistanceMatrix`] aligned to it.
///
/// Downstream crates (route construction, simulation) work in `AddressId`
/// space; the string-keyed helpers exist for loaders and tests.
#[derive(Debug)]
pub struct DistanceGrid {
    pub addresses: AddressIndex,
    pub matrix:    DistanceMatrix,
}

impl DistanceGrid {
    /// Pair an index with its matrix, checking that their sizes agree.
    pub fn new(addresses: AddressIndex, matrix: DistanceMatrix) -> GridResult<Self> {
        if addresses.len() != matrix.len() {
            return Err(GridError::TableMismatch {
                rows:      matrix.len(),
                addresses: addresses.len(),
            });
        }
        Ok(Self { addresses, matrix })
    }

    /// The hub's position.
    #[inline]
    pub fn hub(&self) -> AddressId {
        self.addresses.hub()
    }

    /// Distance between two positions.
    #[inline]
    pub fn distance(&self, a: AddressId, b: AddressId) -> GridResult<f64> {
        self.matrix.distance(a, b)
    }

    /// Distance between two address strings.  Resolves both positions first,
    /// so an unregistered address surfaces as `UnknownAddress`.
    pub fn distance_between(&self, a: &str, b: &str) -> GridResult<f64> {
        let a = self.addresses.position_of(a)?;
        let b = self.addresses.position_of(b)?;
        self.matrix.distance(a, b)
    }

    /// Distance from the hub to `address`.
    pub fn distance_from_hub(&self, address: AddressId) -> GridResult<f64> {
        self.matrix.distance(self.hub(), address)
    }
}
