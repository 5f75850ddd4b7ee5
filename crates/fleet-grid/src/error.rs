use fleet_core::AddressId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("unknown address {0:?}")]
    UnknownAddress(String),

    #[error("duplicate address {0:?} in address list")]
    DuplicateAddress(String),

    #[error("address list is empty (the first entry must be the hub)")]
    EmptyAddressList,

    #[error("address {0} is out of range for a {1}-address grid")]
    OutOfRange(AddressId, usize),

    #[error("no distance populated between {0} and {1} in either triangle")]
    NoRouteData(AddressId, AddressId),

    #[error("distance table row {row} has {got} cells but the table has {expected} rows")]
    Shape {
        row:      usize,
        got:      usize,
        expected: usize,
    },

    #[error("distance table has {rows} rows but the address list has {addresses} entries")]
    TableMismatch { rows: usize, addresses: usize },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
