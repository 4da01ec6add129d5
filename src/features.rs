//! Feature collection abstraction
//!
//! Kernels never own the data they evaluate; they hold non-owning handles
//! to a left and a right collection (possibly the same one) and fetch
//! vectors by index. Any indexed, fixed-dimensionality container can serve
//! as a collection by implementing this trait.

/// Indexed, read-only access to a set of feature vectors.
///
/// Implementations must provide O(1) (or documented-cost) random access and
/// a fixed vector dimensionality per collection. Collections are read-only
/// from the kernel's perspective; mutating one while an evaluation is in
/// flight is the caller's responsibility to prevent.
pub trait FeatureCollection: Send + Sync {
    /// Number of feature vectors in the collection
    fn len(&self) -> usize;

    /// Dimensionality shared by every vector in the collection
    fn dim(&self) -> usize;

    /// Get the feature vector at `idx`
    ///
    /// # Panics
    /// May panic if `idx >= len()`. Callers go through the binding layer,
    /// which validates indices and reports `IndexOutOfRange` instead.
    fn vector(&self, idx: usize) -> &[f64];

    /// Check if the collection has no vectors
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for dyn FeatureCollection + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FeatureCollection({}x{})", self.len(), self.dim())
    }
}

impl FeatureCollection for [Vec<f64>] {
    fn len(&self) -> usize {
        <[Vec<f64>]>::len(self)
    }

    fn dim(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    fn vector(&self, idx: usize) -> &[f64] {
        &self[idx]
    }
}

impl FeatureCollection for Vec<Vec<f64>> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn dim(&self) -> usize {
        FeatureCollection::dim(self.as_slice())
    }

    fn vector(&self, idx: usize) -> &[f64] {
        FeatureCollection::vector(self.as_slice(), idx)
    }
}

impl<C: FeatureCollection + ?Sized> FeatureCollection for &C {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn dim(&self) -> usize {
        (**self).dim()
    }

    fn vector(&self, idx: usize) -> &[f64] {
        (**self).vector(idx)
    }
}
