//! Core type definitions for the kernel abstraction

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a concrete kernel variant.
///
/// Every instantiable kernel reports one of these so that the surrounding
/// framework can dispatch on, and serialize, the kernel it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KernelType {
    /// Gaussian (RBF): exp(-||x - y||² / (2σ²))
    Gaussian,
    /// Laplacian: exp(-||x - y||₁ / σ)
    Laplacian,
    /// Cauchy: 1 / (1 + ||x - y||² / σ²)
    Cauchy,
    /// Rational quadratic: 1 - ||x - y||² / (||x - y||² + c)
    RationalQuadratic,
    /// User-defined stationary kernel
    Custom,
}

impl KernelType {
    /// Human-readable name of the kernel variant
    pub fn as_str(&self) -> &'static str {
        match self {
            KernelType::Gaussian => "gaussian",
            KernelType::Laplacian => "laplacian",
            KernelType::Cauchy => "cauchy",
            KernelType::RationalQuadratic => "rational_quadratic",
            KernelType::Custom => "custom",
        }
    }
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two bound feature collections an operation refers to.
///
/// Used in error reporting so a failed kernel-matrix computation can name
/// the collection that received the invalid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureSide {
    /// Left-hand side collection (row indices)
    Lhs,
    /// Right-hand side collection (column indices)
    Rhs,
}

impl fmt::Display for FeatureSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureSide::Lhs => f.write_str("left"),
            FeatureSide::Rhs => f.write_str("right"),
        }
    }
}
