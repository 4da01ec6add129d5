//! Left/right feature binding shared by stationary kernels
//!
//! A kernel is either unbound (no collections attached yet) or bound to a
//! left and a right collection. All index validation lives here so every
//! concrete kernel fails the same way on the same bad input.

use crate::core::{FeatureSide, KernelError, Result};
use crate::features::FeatureCollection;
use log::debug;

/// Non-owning handles to the left and right feature collections of a kernel.
///
/// The two handles may alias the same collection for symmetric self-kernels.
/// The pair never outlives, and is not responsible for freeing, the
/// collections it references.
#[derive(Clone, Copy, Default)]
pub struct FeaturePair<'a> {
    features: Option<(&'a dyn FeatureCollection, &'a dyn FeatureCollection)>,
}

impl<'a> FeaturePair<'a> {
    /// Create an unbound pair; collections must be attached via [`bind`]
    /// before evaluation is attempted.
    ///
    /// [`bind`]: FeaturePair::bind
    pub fn unbound() -> Self {
        Self { features: None }
    }

    /// Create a pair bound to the given left and right collections.
    pub fn bound(lhs: &'a dyn FeatureCollection, rhs: &'a dyn FeatureCollection) -> Self {
        let mut pair = Self::unbound();
        pair.bind(lhs, rhs);
        pair
    }

    /// Attach left and right collections, replacing any previous binding.
    pub fn bind(&mut self, lhs: &'a dyn FeatureCollection, rhs: &'a dyn FeatureCollection) {
        debug!(
            "binding features: lhs {}x{}, rhs {}x{}",
            lhs.len(),
            lhs.dim(),
            rhs.len(),
            rhs.dim()
        );
        self.features = Some((lhs, rhs));
    }

    /// Check whether collections are attached
    pub fn is_bound(&self) -> bool {
        self.features.is_some()
    }

    /// The bound left-hand side collection
    pub fn lhs(&self) -> Result<&'a dyn FeatureCollection> {
        self.features
            .map(|(l, _)| l)
            .ok_or(KernelError::UnboundFeatures)
    }

    /// The bound right-hand side collection
    pub fn rhs(&self) -> Result<&'a dyn FeatureCollection> {
        self.features
            .map(|(_, r)| r)
            .ok_or(KernelError::UnboundFeatures)
    }

    /// Fetch the left vector at `idx_a` and the right vector at `idx_b`,
    /// validating both indices against their collection's extent.
    pub fn vector_pair(&self, idx_a: usize, idx_b: usize) -> Result<(&'a [f64], &'a [f64])> {
        let (lhs, rhs) = self.features.ok_or(KernelError::UnboundFeatures)?;
        if idx_a >= lhs.len() {
            return Err(KernelError::IndexOutOfRange {
                side: FeatureSide::Lhs,
                index: idx_a,
                len: lhs.len(),
            });
        }
        if idx_b >= rhs.len() {
            return Err(KernelError::IndexOutOfRange {
                side: FeatureSide::Rhs,
                index: idx_b,
                len: rhs.len(),
            });
        }
        Ok((lhs.vector(idx_a), rhs.vector(idx_b)))
    }

    /// Elementwise difference between the left vector at `idx_a` and the
    /// right vector at `idx_b` (left minus right).
    pub fn diff(&self, idx_a: usize, idx_b: usize) -> Result<Vec<f64>> {
        let (a, b) = self.vector_pair(idx_a, idx_b)?;
        if a.len() != b.len() {
            return Err(KernelError::DimensionMismatch {
                lhs: a.len(),
                rhs: b.len(),
            });
        }
        Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
    }
}

impl std::fmt::Debug for FeaturePair<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.features {
            Some((lhs, rhs)) => f
                .debug_struct("FeaturePair")
                .field("lhs", &format_args!("{}x{}", lhs.len(), lhs.dim()))
                .field("rhs", &format_args!("{}x{}", rhs.len(), rhs.dim()))
                .finish(),
            None => f.write_str("FeaturePair(unbound)"),
        }
    }
}
