//! `fleet-grid` — the read-only geography of a delivery day.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`address`] | `AddressIndex` — ordered, deduplicated address registry   |
//! | [`matrix`]  | `DistanceMatrix` — triangular pairwise distance table     |
//! | [`grid`]    | `DistanceGrid` — index + matrix behind one facade         |
//! | [`loader`]  | CSV loaders for the address list and distance table       |
//! | [`error`]   | `GridError`, `GridResult<T>`                              |
//!
//! # Distance model
//!
//! Distances come from an N×N table aligned to the address list's ordering.
//! Well-formed input populates exactly one of `(i, j)` and `(j, i)` for each
//! pair, so every lookup tries both orderings.  `distance(i, i)` is 0 by
//! convention even when the diagonal is absent.  Both structures are built
//! once before simulation and never mutated afterwards.

pub mod address;
pub mod error;
pub mod grid;
pub mod loader;
pub mod matrix;

#[cfg(test)]
mod tests;

pub use address::AddressIndex;
pub use error::{GridError, GridResult};
pub use grid::DistanceGrid;
pub use loader::{load_addresses_reader, load_distances_reader, load_grid_csv, load_grid_reader};
pub use matrix::DistanceMatrix;
