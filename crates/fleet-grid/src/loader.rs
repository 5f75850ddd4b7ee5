//! CSV loaders for the address list and distance table.
//!
//! # File formats
//!
//! **Address list** — one address per row, no header; only the first column
//! is read.  The first row is the hub:
//!
//! ```csv
//! HUB
//! 195 W Oakland Ave
//! 2530 S 500 E
//! ```
//!
//! **Distance table** — N numeric rows aligned to the address list's
//! ordering.  Cells may be empty (the unpopulated triangle); rows may be
//! ragged up to N cells:
//!
//! ```csv
//! 0
//! 7.2,0
//! 3.8,7.1,0
//! ```
//!
//! Both loaders accept any `Read` source, so tests pass `std::io::Cursor`.

use std::io::Read;
use std::path::Path;

use crate::{AddressIndex, DistanceGrid, DistanceMatrix, GridError, GridResult};

/// Load the ordered address list from any `Read` source.
pub fn load_addresses_reader<R: Read>(reader: R) -> GridResult<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut names = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| GridError::Parse(e.to_string()))?;
        match record.get(0) {
            Some(name) if !name.trim().is_empty() => names.push(name.trim().to_owned()),
            _ => {
                return Err(GridError::Parse(format!(
                    "empty address at row {}",
                    names.len() + 1
                )));
            }
        }
    }
    Ok(names)
}

/// Load the distance table rows from any `Read` source.
///
/// Empty cells become `None`; everything else must parse as a non-negative
/// float (sign is checked later by [`DistanceMatrix::from_rows`]).
pub fn load_distances_reader<R: Read>(reader: R) -> GridResult<Vec<Vec<Option<f64>>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| GridError::Parse(e.to_string()))?;
        let row = record
            .iter()
            .map(|cell| {
                let cell = cell.trim();
                if cell.is_empty() {
                    Ok(None)
                } else {
                    cell.parse::<f64>().map(Some).map_err(|_| {
                        GridError::Parse(format!("bad distance {cell:?} in row {i}"))
                    })
                }
            })
            .collect::<GridResult<Vec<Option<f64>>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Build a complete [`DistanceGrid`] from two `Read` sources.
pub fn load_grid_reader<A: Read, D: Read>(addresses: A, distances: D) -> GridResult<DistanceGrid> {
    let index = AddressIndex::from_names(load_addresses_reader(addresses)?)?;
    let matrix = DistanceMatrix::from_rows(load_distances_reader(distances)?)?;
    DistanceGrid::new(index, matrix)
}

/// Build a complete [`DistanceGrid`] from two CSV files on disk.
pub fn load_grid_csv(address_path: &Path, distance_path: &Path) -> GridResult<DistanceGrid> {
    let addresses = std::fs::File::open(address_path)?;
    let distances = std::fs::File::open(distance_path)?;
    load_grid_reader(addresses, distances)
}
