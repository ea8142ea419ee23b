use thiserror::Error;

/// Errors raised while configuring a run split, before any item is processed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
}
