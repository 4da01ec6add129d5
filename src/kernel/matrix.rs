//! Batch kernel-matrix evaluation over index ranges
//!
//! The surrounding framework evaluates kernels over whole index ranges at a
//! time. Evaluation here is uncached and fail-fast: the first invalid index
//! pair aborts the computation with the offending side and index.

use crate::core::Result;
use crate::kernel::Kernel;
use log::trace;
use std::ops::Range;

/// Dense, row-major matrix of kernel values over two index ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelMatrix {
    n_rows: usize,
    n_cols: usize,
    values: Vec<f64>,
}

impl KernelMatrix {
    /// Number of rows (left-hand side indices)
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns (right-hand side indices)
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Value at row `i`, column `j`
    ///
    /// # Panics
    /// Panics if `i >= n_rows()` or `j >= n_cols()`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n_rows && j < self.n_cols, "matrix index out of bounds");
        self.values[i * self.n_cols + j]
    }

    /// Row-major slice of all values
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Evaluate `kernel` over the cross product of `rows` (left indices) and
/// `cols` (right indices).
///
/// Aborts on the first evaluation error, propagating the failing pair's
/// diagnostics unchanged.
pub fn evaluate_matrix<K: Kernel + ?Sized>(
    kernel: &K,
    rows: Range<usize>,
    cols: Range<usize>,
) -> Result<KernelMatrix> {
    let n_rows = rows.len();
    let n_cols = cols.len();
    trace!(
        "evaluating {}x{} kernel matrix with {} kernel",
        n_rows,
        n_cols,
        kernel.name()
    );

    let mut values = Vec::with_capacity(n_rows * n_cols);
    for i in rows {
        for j in cols.clone() {
            values.push(kernel.compute(i, j)?);
        }
    }

    Ok(KernelMatrix {
        n_rows,
        n_cols,
        values,
    })
}
