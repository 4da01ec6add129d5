//! Error types for kernel evaluation

use crate::core::FeatureSide;
use thiserror::Error;

/// Errors surfaced by kernel evaluation.
///
/// These are caller errors, not transient runtime conditions. They are
/// reported immediately rather than clamped or defaulted, since a
/// silently-wrong scalar would corrupt any downstream kernel matrix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("no feature collections bound; attach left/right features before evaluating")]
    UnboundFeatures,

    #[error("index {index} out of range for {side} features of size {len}")]
    IndexOutOfRange {
        side: FeatureSide,
        index: usize,
        len: usize,
    },

    #[error("dimension mismatch: left vector has {lhs} components, right has {rhs}")]
    DimensionMismatch { lhs: usize, rhs: usize },
}

pub type Result<T> = std::result::Result<T, KernelError>;
