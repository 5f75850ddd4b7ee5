//! `DistanceMatrix` — N×N pairwise distance table with triangular storage.
//!
//! # Data layout
//!
//! Cells are stored row-major in a single flat `Vec<Option<f64>>` of length
//! `n * n`.  Well-formed input populates exactly one of `(i, j)` / `(j, i)`
//! per pair (typically the lower triangle), so [`DistanceMatrix::distance`]
//! consults both orderings.  The matrix is populated once at build time and
//! read-only thereafter.

use fleet_core::AddressId;

use crate::{GridError, GridResult};

/// Square table of pairwise distances keyed by `AddressId` on both axes.
#[derive(Debug)]
pub struct DistanceMatrix {
    n:     usize,
    cells: Vec<Option<f64>>,
}

impl DistanceMatrix {
    /// Build from parsed table rows (`None` = unpopulated cell).
    ///
    /// The table must be square: `rows.len()` defines N, and no row may have
    /// more than N cells.  Short rows are padded with `None` — triangular
    /// input files routinely omit trailing empty cells.  Negative distances
    /// are a configuration error.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> GridResult<Self> {
        let n = rows.len();
        let mut cells = vec![None; n * n];

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() > n {
                return Err(GridError::Shape { row: i, got: row.len(), expected: n });
            }
            for (j, cell) in row.into_iter().enumerate() {
                if let Some(d) = cell {
                    if d < 0.0 {
                        return Err(GridError::Parse(format!(
                            "negative distance {d} at row {i}, column {j}"
                        )));
                    }
                    cells[i * n + j] = Some(d);
                }
            }
        }

        Ok(Self { n, cells })
    }

    /// Number of addresses on each axis.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between two addresses.
    ///
    /// Tries `(a, b)` then `(b, a)` — only one triangle is populated on
    /// well-formed input.  `distance(a, a)` is 0 even when the diagonal cell
    /// is absent.  Neither triangle populated is `NoRouteData`, a fatal
    /// configuration error the builder screens for before any dispatch.
    pub fn distance(&self, a: AddressId, b: AddressId) -> GridResult<f64> {
        if a.index() >= self.n {
            return Err(GridError::OutOfRange(a, self.n));
        }
        if b.index() >= self.n {
            return Err(GridError::OutOfRange(b, self.n));
        }
        if a == b {
            return Ok(self.cell(a, b).unwrap_or(0.0));
        }
        self.cell(a, b)
            .or_else(|| self.cell(b, a))
            .ok_or(GridError::NoRouteData(a, b))
    }

    #[inline]
    fn cell(&self, a: AddressId, b: AddressId) -> Option<f64> {
        self.cells[a.index() * self.n + b.index()]
    }
}
