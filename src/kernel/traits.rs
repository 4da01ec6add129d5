//! Kernel trait definitions
//!
//! `Kernel` is the general contract every kernel satisfies; `StationaryKernel`
//! specializes it for translation-invariant kernels, where the value depends
//! only on the displacement between the two input vectors.

use crate::core::{KernelType, Result};
use crate::kernel::FeaturePair;

/// General kernel contract.
///
/// A kernel evaluates a scalar similarity for a pair of feature-vector
/// indices, `idx_a` into its left collection and `idx_b` into its right
/// collection. Evaluation is a pure read; implementations must be safe to
/// call from multiple threads as long as the underlying collections are.
pub trait Kernel: Send + Sync {
    /// Name of the concrete kernel implementation
    fn name(&self) -> &'static str;

    /// Identifier of the concrete kernel variant
    fn kernel_type(&self) -> KernelType;

    /// Compute the kernel value for the left vector at `idx_a` and the
    /// right vector at `idx_b`.
    ///
    /// This is the sole extension point carrying the mathematical
    /// definition of a specific kernel. Fails with `UnboundFeatures` when
    /// no collections are attached and `IndexOutOfRange` when either index
    /// exceeds its collection's extent.
    fn compute(&self, idx_a: usize, idx_b: usize) -> Result<f64>;
}

/// A kernel whose value depends only on the displacement between its two
/// input vectors, never on their absolute positions.
///
/// Translating every vector in both the left and the right collection by
/// the same offset must leave every computed value unchanged. That is the
/// contract every implementation of this trait commits to; it is what lets
/// callers precompute and reuse displacement-based quantities.
pub trait StationaryKernel: Kernel {
    /// The kernel's feature binding (unbound or bound left/right handles)
    fn features(&self) -> &FeaturePair<'_>;

    /// Displacement between the left vector at `idx_a` and the right vector
    /// at `idx_b` (left minus right).
    ///
    /// The default is the elementwise difference. Implementations may
    /// override it to redefine displacement (e.g. a wrapped difference on a
    /// periodic domain) as long as the stationarity contract still holds.
    fn feature_diff(&self, idx_a: usize, idx_b: usize) -> Result<Vec<f64>> {
        self.features().diff(idx_a, idx_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KernelError;
    use approx::assert_relative_eq;

    /// Gaussian kernel used to exercise the trait contract:
    /// K(a, b) = exp(-||a - b||² / (2σ²))
    struct GaussianKernel<'a> {
        features: FeaturePair<'a>,
        sigma: f64,
    }

    impl<'a> GaussianKernel<'a> {
        fn new(features: FeaturePair<'a>, sigma: f64) -> Self {
            Self { features, sigma }
        }
    }

    impl Kernel for GaussianKernel<'_> {
        fn name(&self) -> &'static str {
            "GaussianKernel"
        }

        fn kernel_type(&self) -> KernelType {
            KernelType::Gaussian
        }

        fn compute(&self, idx_a: usize, idx_b: usize) -> Result<f64> {
            let diff = self.feature_diff(idx_a, idx_b)?;
            let dist_sq: f64 = diff.iter().map(|d| d * d).sum();
            Ok((-dist_sq / (2.0 * self.sigma * self.sigma)).exp())
        }
    }

    impl StationaryKernel for GaussianKernel<'_> {
        fn features(&self) -> &FeaturePair<'_> {
            &self.features
        }
    }

    /// Kernel overriding the default displacement with a wrapped difference
    /// on the unit circle [0, 1).
    struct PeriodicKernel<'a> {
        features: FeaturePair<'a>,
    }

    impl Kernel for PeriodicKernel<'_> {
        fn name(&self) -> &'static str {
            "PeriodicKernel"
        }

        fn kernel_type(&self) -> KernelType {
            KernelType::Custom
        }

        fn compute(&self, idx_a: usize, idx_b: usize) -> Result<f64> {
            let diff = self.feature_diff(idx_a, idx_b)?;
            let dist_sq: f64 = diff.iter().map(|d| d * d).sum();
            Ok((-dist_sq).exp())
        }
    }

    impl StationaryKernel for PeriodicKernel<'_> {
        fn features(&self) -> &FeaturePair<'_> {
            &self.features
        }

        fn feature_diff(&self, idx_a: usize, idx_b: usize) -> Result<Vec<f64>> {
            let raw = self.features().diff(idx_a, idx_b)?;
            Ok(raw.into_iter().map(|d| d - d.round()).collect())
        }
    }

    fn grid() -> Vec<Vec<f64>> {
        vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![2.0, 2.0]]
    }

    #[test]
    fn test_gaussian_example_scenario() {
        let data = grid();
        let kernel = GaussianKernel::new(FeaturePair::bound(&data, &data), 1.0);

        assert_eq!(kernel.feature_diff(0, 2).unwrap(), vec![-2.0, -2.0]);
        // exp(-((-2)² + (-2)²) / 2) = exp(-4)
        assert_relative_eq!(
            kernel.compute(0, 2).unwrap(),
            (-4.0_f64).exp(),
            epsilon = 1e-12
        );
        assert_relative_eq!(kernel.compute(0, 2).unwrap(), 0.0183, epsilon = 1e-4);
    }

    #[test]
    fn test_kernel_identity_and_symmetry() {
        let data = grid();
        let kernel = GaussianKernel::new(FeaturePair::bound(&data, &data), 1.0);

        // K(x, x) = 1 for any Gaussian kernel
        for i in 0..data.len() {
            assert_relative_eq!(kernel.compute(i, i).unwrap(), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(
            kernel.compute(0, 2).unwrap(),
            kernel.compute(2, 0).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_stationarity_under_translation() {
        let data = grid();
        let shifted: Vec<Vec<f64>> = data
            .iter()
            .map(|v| v.iter().map(|x| x + 17.5).collect())
            .collect();

        let kernel = GaussianKernel::new(FeaturePair::bound(&data, &data), 0.7);
        let kernel_shifted = GaussianKernel::new(FeaturePair::bound(&shifted, &shifted), 0.7);

        for i in 0..data.len() {
            for j in 0..data.len() {
                assert_relative_eq!(
                    kernel.compute(i, j).unwrap(),
                    kernel_shifted.compute(i, j).unwrap(),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_unbound_kernel_fails() {
        let kernel = GaussianKernel::new(FeaturePair::unbound(), 1.0);
        assert_eq!(kernel.compute(0, 0).unwrap_err(), KernelError::UnboundFeatures);
        assert_eq!(
            kernel.feature_diff(0, 0).unwrap_err(),
            KernelError::UnboundFeatures
        );
    }

    #[test]
    fn test_out_of_range_propagates_through_compute() {
        let data = grid();
        let kernel = GaussianKernel::new(FeaturePair::bound(&data, &data), 1.0);
        assert!(matches!(
            kernel.compute(3, 0).unwrap_err(),
            KernelError::IndexOutOfRange { .. }
        ));
        assert!(matches!(
            kernel.feature_diff(0, 99).unwrap_err(),
            KernelError::IndexOutOfRange { .. }
        ));
    }

    #[test]
    fn test_kernel_type_and_name() {
        let kernel = GaussianKernel::new(FeaturePair::unbound(), 1.0);
        assert_eq!(kernel.kernel_type(), KernelType::Gaussian);
        assert_eq!(kernel.name(), "GaussianKernel");
    }

    #[test]
    fn test_displacement_override_keeps_stationarity() {
        // Points 0.1 and 0.9 are 0.2 apart on the unit circle, not 0.8.
        let left = vec![vec![0.1]];
        let right = vec![vec![0.9]];
        let kernel = PeriodicKernel {
            features: FeaturePair::bound(&left, &right),
        };

        let diff = kernel.feature_diff(0, 0).unwrap();
        assert_relative_eq!(diff[0], 0.2, epsilon = 1e-12);

        // Shifting both inputs by the same amount leaves the value unchanged.
        let left_shifted = vec![vec![0.1 + 3.0]];
        let right_shifted = vec![vec![0.9 + 3.0]];
        let kernel_shifted = PeriodicKernel {
            features: FeaturePair::bound(&left_shifted, &right_shifted),
        };
        assert_relative_eq!(
            kernel.compute(0, 0).unwrap(),
            kernel_shifted.compute(0, 0).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_kernel_usable_as_trait_object() {
        let data = grid();
        let gaussian = GaussianKernel::new(FeaturePair::bound(&data, &data), 1.0);
        let kernel: &dyn Kernel = &gaussian;
        assert_eq!(kernel.kernel_type(), KernelType::Gaussian);
        assert!(kernel.compute(1, 1).is_ok());
    }
}
