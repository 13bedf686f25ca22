//! Shared error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers failures in
//! the shared configuration types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
