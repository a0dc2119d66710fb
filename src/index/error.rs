//! Fatal pipeline errors.

use thiserror::Error;

use crate::download::{EngineError, FetchError};
use crate::parser::ParseError;

/// Errors that abort an index build.
///
/// Image resolution and download failures never appear here; they are
/// logged and absorbed per row or per image.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The source page could not be fetched.
    #[error("failed to fetch source page: {0}")]
    Fetch(#[from] FetchError),

    /// The source page does not have the expected structure.
    #[error("failed to parse source page: {0}")]
    Parse(#[from] ParseError),

    /// The download pool could not be created.
    #[error("invalid download settings: {0}")]
    Engine(#[from] EngineError),
}
