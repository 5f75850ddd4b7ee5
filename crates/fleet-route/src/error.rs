use fleet_core::PackageId;
use fleet_grid::GridError;
use fleet_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("cannot dispatch an empty route")]
    EmptyRoute,

    #[error("package {0} referenced by a route is not in the store")]
    UnknownPackage(PackageId),

    #[error("distance lookup failed: {0}")]
    Grid(#[from] GridError),

    #[error("package store error: {0}")]
    Store(#[from] StoreError),
}

pub type RouteResult<T> = Result<T, RouteError>;
