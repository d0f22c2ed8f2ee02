//! Gauss-Legendre quadrature rules on the reference interval `[-1, 1]`.
//!
//! Rules are computed with the Golub-Welsch algorithm: the three-term
//! recurrence of the Legendre polynomials defines a symmetric tridiagonal
//! Jacobi matrix whose eigenvalues are the quadrature nodes. Each weight is
//! `2 v0²`, where `v0` is the first component of the corresponding
//! orthonormal eigenvector and 2 is the zeroth moment of the weight
//! function (the length of `[-1, 1]`). This pins the normalization: the
//! weights of any rule sum to 2.

use itertools::izip;
use ndarray::{Array1, Array2};
use ndarray_linalg::{Eigh, UPLO};
use thiserror::Error;

/// Errors from constructing a quadrature rule.
#[derive(Error, Debug)]
pub enum QuadratureError {
    #[error("Quadrature order must be at least 1, but was {0}.")]
    InvalidOrder(usize),

    #[error("Eigendecomposition of the Jacobi matrix failed: {0}")]
    Eigen(#[from] ndarray_linalg::error::LinalgError),
}

/// An order-n Gauss-Legendre rule: n nodes in `(-1, 1)` with their weights.
///
/// An order-n rule integrates polynomials of degree up to `2n - 1` exactly
/// over `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct GaussLegendre {
    /// Quadrature nodes, ascending. Roots of the order-n Legendre polynomial.
    pub nodes: Array1<f64>,
    /// Quadrature weights; `weights[i]` belongs to `nodes[i]`.
    pub weights: Array1<f64>,
}

impl GaussLegendre {
    /// Computes the rule of the given order.
    pub fn new(order: usize) -> Result<Self, QuadratureError> {
        if order == 0 {
            return Err(QuadratureError::InvalidOrder(order));
        }

        // Jacobi matrix of the Legendre recurrence: zero diagonal,
        // off-diagonal entries b_k = k / sqrt(4k² - 1).
        let mut jacobi = Array2::zeros((order, order));
        for k in 1..order {
            let kf = k as f64;
            let b = kf / (4.0 * kf * kf - 1.0).sqrt();
            jacobi[[k, k - 1]] = b;
            jacobi[[k - 1, k]] = b;
        }

        // The eigensolver returns eigenvalues ascending, which is the
        // conventional node ordering; no re-sorting is needed.
        let (nodes, vectors) = jacobi.eigh(UPLO::Lower)?;
        let weights = vectors.row(0).mapv(|v0| 2.0 * v0 * v0);

        Ok(Self { nodes, weights })
    }

    /// Number of (node, weight) pairs in this rule.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Integrates `f` over `[a, b]` with this rule.
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let mid = 0.5 * (a + b);
        let half_width = 0.5 * (b - a);

        let mut sum = 0.0;
        for (&x, &w) in izip!(&self.nodes, &self.weights) {
            sum += w * f(mid + half_width * x);
        }
        sum * half_width
    }
}
