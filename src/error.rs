//! Error type shared by every correction entry point.
//!
//! All variants are raised before the first sample is written, so a call
//! that returns `Err` has left the caller's data untouched.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StimError {
    /// `tmin >= tmax`, a non-finite bound, or a mapped sample window that
    /// does not fit inside the target array.
    #[error("invalid window: {0}")]
    InvalidWindow(String),

    /// Linear interpolation needs a sample on each side of the window.
    #[error(
        "linear interpolation needs anchors at both sides of [{i0}, {i1}) \
         but the array has {n_times} samples"
    )]
    MissingAnchor { i0: usize, i1: usize, n_times: usize },

    #[error("unknown correction mode {0:?} (expected \"linear\" or \"window\")")]
    UnknownMode(String),

    #[error("sampling rate must be finite and > 0, got {0}")]
    InvalidSamplingRate(f64),

    #[error("invalid events: {0}")]
    InvalidEvents(String),
}

pub type Result<T> = std::result::Result<T, StimError>;
