//! `AddressIndex` — ordered, deduplicated registry of address strings.
//!
//! The index is the shared coordinate space of the whole engine: a package's
//! street address resolves to an `AddressId` here, and that ID is the row /
//! column index into the [`DistanceMatrix`][crate::DistanceMatrix].  Position
//! is stable once built.  The hub is a reserved entry: the **first** address
//! in the input list.

use rustc_hash::FxHashMap;

use fleet_core::AddressId;

use crate::{GridError, GridResult};

/// Ordered sequence of unique address strings with O(1) position lookup.
#[derive(Debug)]
pub struct AddressIndex {
    /// Address strings in input order.  Indexed by `AddressId`.
    names: Vec<String>,

    /// Reverse lookup: address string → position.
    positions: FxHashMap<String, AddressId>,
}

impl AddressIndex {
    /// Build the index from an ordered address list.
    ///
    /// The first entry is the hub.  Duplicate entries are a configuration
    /// error — the distance table's axes would be ambiguous.
    pub fn from_names<I, S>(names: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(GridError::EmptyAddressList);
        }

        let mut positions = FxHashMap::default();
        for (i, name) in names.iter().enumerate() {
            let id = AddressId::try_from(i)
                .map_err(|_| GridError::Parse(format!("address list too long at row {i}")))?;
            if positions.insert(name.clone(), id).is_some() {
                return Err(GridError::DuplicateAddress(name.clone()));
            }
        }

        Ok(Self { names, positions })
    }

    /// The hub's position — always the first entry.
    #[inline]
    pub fn hub(&self) -> AddressId {
        AddressId(0)
    }

    /// Position of `address`, or `UnknownAddress` if it was never registered.
    pub fn position_of(&self, address: &str) -> GridResult<AddressId> {
        self.positions
            .get(address)
            .copied()
            .ok_or_else(|| GridError::UnknownAddress(address.to_owned()))
    }

    /// `true` if `address` is registered.
    #[inline]
    pub fn contains(&self, address: &str) -> bool {
        self.positions.contains_key(address)
    }

    /// The address string at `id`.
    pub fn name(&self, id: AddressId) -> GridResult<&str> {
        self.names
            .get(id.index())
            .map(String::as_str)
            .ok_or(GridError::OutOfRange(id, self.names.len()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterator over `(AddressId, &str)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (AddressId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, s)| (AddressId(i as u16), s.as_str()))
    }
}
