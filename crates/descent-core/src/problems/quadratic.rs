//! Positive definite quadratic forms.

use nalgebra::Cholesky;

use crate::bounds::BoxBounds;
use crate::error::{OptimError, OptimResult};
use crate::problem::Problem;
use crate::types::{InverseHessian, Point};

const SYMMETRY_TOLERANCE: f64 = 1e-12;

/// `f(x) = (x - c)^T A (x - c)` with `A` symmetric positive definite.
///
/// The Hessian `2A` is constant, so its inverse is computed once at
/// construction and a single Newton step lands exactly on `c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadratic<const D: usize> {
    matrix: InverseHessian<D>,
    center: Point<D>,
    inverse_hessian: InverseHessian<D>,
    bounds: BoxBounds<D>,
}

impl<const D: usize> Quadratic<D> {
    /// Creates the quadratic form centered at `center`.
    ///
    /// # Errors
    ///
    /// Returns [`OptimError::InvalidProblem`] if `matrix` is not symmetric
    /// positive definite.
    pub fn new(
        matrix: InverseHessian<D>,
        center: Point<D>,
        bounds: BoxBounds<D>,
    ) -> OptimResult<Self> {
        if (matrix - matrix.transpose()).amax() > SYMMETRY_TOLERANCE {
            return Err(OptimError::invalid_problem(
                "quadratic form matrix must be symmetric",
            ));
        }

        let cholesky = Cholesky::new(matrix * 2.0).ok_or_else(|| {
            OptimError::invalid_problem("quadratic form matrix must be positive definite")
        })?;

        Ok(Self {
            matrix,
            center,
            inverse_hessian: cholesky.inverse(),
            bounds,
        })
    }

    /// The minimizer `c`.
    pub fn center(&self) -> &Point<D> {
        &self.center
    }
}

impl<const D: usize> Problem<D> for Quadratic<D> {
    type Bounds = BoxBounds<D>;

    fn value(&self, x: &Point<D>) -> f64 {
        let d = x - self.center;
        d.dot(&(self.matrix * d))
    }

    fn gradient(&self, x: &Point<D>) -> Point<D> {
        (self.matrix * (x - self.center)) * 2.0
    }

    fn ihessian(&self, _x: &Point<D>) -> InverseHessian<D> {
        self.inverse_hessian
    }

    fn bounds(&self) -> &BoxBounds<D> {
        &self.bounds
    }
}
