use thiserror::Error;

/// Unrecoverable pool setup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("pool capacity must be greater than zero")]
    ZeroCapacity,

    #[error("item factory returned no resource for index {index}")]
    MissingItem { index: usize },

    #[error("control factory returned no resource for index {index}")]
    MissingControl { index: usize },
}
