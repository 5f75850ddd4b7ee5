//! `fleet-store` — the single source of truth for package state.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`package`] | `Package`, `PackageStatus`, `Deadline`                   |
//! | [`store`]   | `PackageStore` — keyed store, ordered iteration          |
//! | [`loader`]  | CSV loader for package records                           |
//! | [`error`]   | `StoreError`, `StoreResult<T>`                           |
//!
//! # Ownership model
//!
//! Every `Package` is owned exclusively by one `PackageStore`.  Manifests and
//! routes hold `PackageId`s, never package references, so all mutation during
//! simulation funnels through the store — which is what makes the
//! no-shared-writes invariant of the tick loop structurally checkable.

pub mod error;
pub mod loader;
pub mod package;
pub mod store;


pub use error::{StoreError, StoreResult};
pub use loader::{load_packages_csv, load_packages_reader};
pub use package::{Deadline, Package, PackageStatus};
pub use store::PackageStore;
