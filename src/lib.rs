//! Rust abstraction for stationary (translation-invariant) kernel functions
//!
//! Stationary kernels depend only on the displacement between their two
//! input vectors, never on absolute positions (e.g. the Gaussian kernel).
//! This crate defines the contract such kernels satisfy: the [`Kernel`] and
//! [`StationaryKernel`] traits, the [`FeaturePair`] binding over non-owning
//! left/right [`FeatureCollection`] handles, and fail-fast error reporting
//! for unbound or out-of-range evaluation. Concrete kernels live downstream;
//! this crate carries the contract they implement.

pub mod core;
pub mod features;
pub mod kernel;

// Re-export main types for convenience
pub use crate::core::{FeatureSide, KernelError, KernelType, Result};
pub use crate::features::FeatureCollection;
pub use crate::kernel::{evaluate_matrix, FeaturePair, Kernel, KernelMatrix, StationaryKernel};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
