use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan configuration error: {0}")]
    BadConfig(String),
}

pub type PlanResult<T> = Result<T, PlanError>;
