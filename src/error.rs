//! Error types for graph construction.
//!
//! Push execution itself is infallible by contract — handlers return
//! nothing, and recoverable failures travel as signals on dedicated output
//! ports (see the filter's bounce idiom). What remains are construction-time
//! contract violations.

use thiserror::Error;

/// Errors surfaced by the dataflow substrate.
#[derive(Error, Debug)]
pub enum FlowError {
    /// A demuxer was configured with the same routing field more than once.
    #[error("duplicate demuxer field: {0}")]
    DuplicateField(String),
}

pub type FlowResult<T> = std::result::Result<T, FlowError>;
