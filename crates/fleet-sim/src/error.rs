use thiserror::Error;

use fleet_grid::GridError;
use fleet_plan::PlanError;
use fleet_route::RouteError;
use fleet_store::StoreError;

#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid simulation setup (bad dispatch plan, unknown hold target,
    /// nonsensical clock or speed).  Raised by the builder, never mid-run.
    #[error("invalid simulation setup: {0}")]
    Config(String),

    #[error("partitioning policy rejected: {0}")]
    Plan(#[from] PlanError),

    #[error("distance grid error: {0}")]
    Grid(#[from] GridError),

    #[error("package store error: {0}")]
    Store(#[from] StoreError),

    #[error("routing error: {0}")]
    Route(#[from] RouteError),
}

pub type SimResult<T> = Result<T, SimError>;
