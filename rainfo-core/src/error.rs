//! Errors raised while loading the state tables.

use thiserror::Error;

/// A state or rainfall table that fails validation.
///
/// Lookups never produce this; it only comes out of
/// [`StateAtlas::from_csv`](crate::StateAtlas::from_csv).
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("failed to read table: {0}")]
    Csv(#[from] csv::Error),

    #[error("state {name:?} has malformed code {code:?}")]
    BadCode { name: String, code: String },

    #[error("duplicate state name {0:?}")]
    DuplicateName(String),

    #[error("duplicate state code {0:?}")]
    DuplicateCode(String),

    #[error("expected {expected} states, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("rainfall for {state:?} must be a positive number, got {inches}")]
    BadRainfall { state: String, inches: f64 },

    #[error("duplicate rainfall entry for {0:?}")]
    DuplicateRainfall(String),

    #[error("no rainfall entry for {0:?}")]
    MissingRainfall(String),

    #[error("rainfall entry for unknown state {0:?}")]
    UnknownRainfall(String),
}
