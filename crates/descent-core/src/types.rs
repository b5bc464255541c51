//! Fixed-dimension vector and matrix aliases.
//!
//! The dimension is a const generic shared by a problem and every optimizer
//! run against it, so mixing dimensions is a compile error rather than a
//! runtime check.

use nalgebra::{SMatrix, SVector};

/// A point in the `D`-dimensional search space.
pub type Point<const D: usize> = SVector<f64, D>;

/// A `D x D` inverse Hessian (or an approximation of one).
pub type InverseHessian<const D: usize> = SMatrix<f64, D, D>;

/// Returns true if every coordinate of the point is finite.
pub fn is_finite<const D: usize>(x: &Point<D>) -> bool {
    x.iter().all(|v| v.is_finite())
}
