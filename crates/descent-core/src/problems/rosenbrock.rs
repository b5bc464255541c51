//! The two-dimensional Rosenbrock function.

use crate::bounds::BoxBounds;
use crate::error::OptimResult;
use crate::problem::Problem;
use crate::types::{InverseHessian, Point};

/// `f(x, y) = (1 - x)^2 + 100 (y - x^2)^2`.
///
/// Non-convex, with its minimum `0` at `(1, 1)` at the bottom of a narrow
/// curved valley. Where the Hessian is singular the inverse Hessian is the
/// zero matrix, so a Newton step leaves the iterate in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Rosenbrock {
    bounds: BoxBounds<2>,
}

impl Rosenbrock {
    /// Creates the Rosenbrock function over `[-half_width, half_width]^2`.
    ///
    /// # Errors
    ///
    /// Returns an error if `half_width` is negative or not finite.
    pub fn new(half_width: f64) -> OptimResult<Self> {
        Ok(Self {
            bounds: BoxBounds::symmetric(half_width)?,
        })
    }
}

impl Problem<2> for Rosenbrock {
    type Bounds = BoxBounds<2>;

    fn value(&self, p: &Point<2>) -> f64 {
        let (x, y) = (p[0], p[1]);
        (1.0 - x).powi(2) + 100.0 * (y - x * x).powi(2)
    }

    fn gradient(&self, p: &Point<2>) -> Point<2> {
        let (x, y) = (p[0], p[1]);
        Point::<2>::new(
            -2.0 * (1.0 - x) - 400.0 * x * (y - x * x),
            200.0 * (y - x * x),
        )
    }

    fn ihessian(&self, p: &Point<2>) -> InverseHessian<2> {
        let (x, y) = (p[0], p[1]);
        let hessian = InverseHessian::<2>::new(
            2.0 - 400.0 * y + 1200.0 * x * x,
            -400.0 * x,
            -400.0 * x,
            200.0,
        );
        hessian.try_inverse().unwrap_or_else(InverseHessian::<2>::zeros)
    }

    fn bounds(&self) -> &BoxBounds<2> {
        &self.bounds
    }
}
