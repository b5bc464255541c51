//! The objective abstraction consumed by every optimizer.
//!
//! A [`Problem`] is owned by the caller and only ever borrowed immutably, so
//! implementations must keep their evaluation methods free of side effects.
//! That is also what makes a `Sync` problem safe to share across parallel
//! restarts without locking.
//!
//! # Example
//!
//! ```rust
//! use descent_core::{BoxBounds, InverseHessian, Point, Problem};
//!
//! /// f(x) = (x - 3)^2 on [-10, 10].
//! struct Shifted {
//!     bounds: BoxBounds<1>,
//! }
//!
//! impl Problem<1> for Shifted {
//!     type Bounds = BoxBounds<1>;
//!
//!     fn value(&self, x: &Point<1>) -> f64 {
//!         (x[0] - 3.0).powi(2)
//!     }
//!
//!     fn gradient(&self, x: &Point<1>) -> Point<1> {
//!         Point::<1>::new(2.0 * (x[0] - 3.0))
//!     }
//!
//!     fn ihessian(&self, _x: &Point<1>) -> InverseHessian<1> {
//!         InverseHessian::<1>::new(0.5)
//!     }
//!
//!     fn bounds(&self) -> &BoxBounds<1> {
//!         &self.bounds
//!     }
//! }
//!
//! let problem = Shifted { bounds: BoxBounds::symmetric(10.0).unwrap() };
//! assert_eq!(problem.value(&Point::<1>::new(3.0)), 0.0);
//! ```

use rand::Rng;

use crate::types::{InverseHessian, Point};

/// A feasible region that can be sampled uniformly.
pub trait Bounds<const D: usize> {
    /// Draws an independent, uniformly distributed feasible point.
    fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<D>;

    /// Returns true if `x` lies inside the region.
    fn contains(&self, x: &Point<D>) -> bool;
}

/// An objective to minimize over a `D`-dimensional feasible region.
pub trait Problem<const D: usize> {
    /// The feasible region start points are drawn from.
    type Bounds: Bounds<D>;

    /// Objective value at `x`. Must be a pure function of `x`.
    fn value(&self, x: &Point<D>) -> f64;

    /// Gradient of the objective at `x`.
    fn gradient(&self, x: &Point<D>) -> Point<D>;

    /// Inverse Hessian (or an approximation of it) at `x`.
    fn ihessian(&self, x: &Point<D>) -> InverseHessian<D>;

    /// The feasible region.
    fn bounds(&self) -> &Self::Bounds;
}
