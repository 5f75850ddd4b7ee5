//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into positional `Vec`s via `id.0 as usize` where the ID is
//! an index (`AddressId`), but callers should prefer the `.index()` helper
//! for clarity.  `PackageId` is a domain key, not an index — it comes from
//! the input tables and is never used as a vector position.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — the type's maximum value.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Unique key of a package as given by the input tables (1-based in the
    /// reference data, but any positive integer is accepted).
    pub struct PackageId(u32);
}

typed_id! {
    /// Position of an address in the `AddressIndex` and both axes of the
    /// `DistanceMatrix`.  `u16` bounds the grid at 65,535 addresses.
    pub struct AddressId(u16);
}

typed_id! {
    /// Identifier of a physical vehicle.  A vehicle may run more than one
    /// trip per day, so trips are tracked separately from vehicles.
    pub struct VehicleId(u16);
}
