//! The sphere function `f(x) = x^T x`.

use crate::bounds::BoxBounds;
use crate::error::OptimResult;
use crate::problem::Problem;
use crate::types::{InverseHessian, Point};

/// `f(x) = x^T x` over a symmetric box.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere<const D: usize> {
    bounds: BoxBounds<D>,
}

impl<const D: usize> Sphere<D> {
    /// Creates the sphere function over `[-half_width, half_width]^D`.
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

impl<const D: usize> Problem<D> for Sphere<D> {
    type Bounds = BoxBounds<D>;

    fn value(&self, x: &Point<D>) -> f64 {
        x.dot(x)
    }

    fn gradient(&self, x: &Point<D>) -> Point<D> {
        x * 2.0
    }

    fn ihessian(&self, _x: &Point<D>) -> InverseHessian<D> {
        InverseHessian::<D>::identity() * 0.5
    }

    fn bounds(&self) -> &BoxBounds<D> {
        &self.bounds
    }
}
