//! CSV package-record loader.
//!
//! # CSV format
//!
//! One headerless row per package, columns in fixed order:
//!
//! ```csv
//! 1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,21,
//! 3,233 Canyon Rd,Salt Lake City,UT,84103,EOD,2,Can only be on truck 2
//! ```
//!
//! `deadline` is `"EOD"` or a time of day; `note` is free text (quoted when
//! it contains commas) and may be empty.  Ids must be unique — a duplicate
//! row is a `DuplicateKey` error, not a silent overwrite.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fleet_core::PackageId;

use crate::{Deadline, Package, PackageStore, StoreError, StoreResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PackageRecord {
    id:       u32,
    address:  String,
    city:     String,
    state:    String,
    zipcode:  String,
    deadline: String,
    weight:   u32,
    note:     String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`PackageStore`] from a CSV file.
pub fn load_packages_csv(path: &Path) -> StoreResult<PackageStore> {
    let file = std::fs::File::open(path)?;
    load_packages_reader(file)
}

/// Like [`load_packages_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_packages_reader<R: Read>(reader: R) -> StoreResult<PackageStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut store = PackageStore::new();
    for result in csv_reader.deserialize::<PackageRecord>() {
        let row = result.map_err(|e| StoreError::Parse(e.to_string()))?;
        let deadline = Deadline::parse(&row.deadline)
            .map_err(|e| StoreError::Parse(format!("package {}: {e}", row.id)))?;

        store.insert(Package::new(
            PackageId(row.id),
            row.address,
            row.city,
            row.state,
            row.zipcode,
            deadline,
            row.weight,
            row.note,
        ))?;
    }
    Ok(store)
}
