//! Axis-aligned box feasible regions.

use rand::Rng;

use crate::error::{OptimError, OptimResult};
use crate::problem::Bounds;
use crate::types::Point;

/// The box `[lower_0, upper_0] x ... x [lower_{D-1}, upper_{D-1}]`.
///
/// Sampling draws each coordinate independently and uniformly from its
/// closed interval. Degenerate intervals (`lower_i == upper_i`) are allowed
/// and always yield that coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxBounds<const D: usize> {
    lower: Point<D>,
    upper: Point<D>,
}

impl<const D: usize> BoxBounds<D> {
    /// Creates a box from per-coordinate lower and upper bounds.
    ///
    /// # Errors
    ///
    /// Returns [`OptimError::InvalidProblem`] if a bound is not finite, a
    /// lower bound exceeds its upper bound, or an interval is too wide to
    /// sample from.
    pub fn new(lower: Point<D>, upper: Point<D>) -> OptimResult<Self> {
        for i in 0..D {
            let (lo, hi) = (lower[i], upper[i]);
            if !lo.is_finite() || !hi.is_finite() {
                return Err(OptimError::invalid_problem(format!(
                    "bounds for coordinate {i} must be finite, got [{lo}, {hi}]"
                )));
            }
            if lo > hi {
                return Err(OptimError::invalid_problem(format!(
                    "lower bound {lo} exceeds upper bound {hi} for coordinate {i}"
                )));
            }
            // The uniform sampler divides the width by `1 - EPSILON`.
            if !((hi - lo) / (1.0 - f64::EPSILON)).is_finite() {
                return Err(OptimError::invalid_problem(format!(
                    "width of coordinate {i} overflows, got [{lo}, {hi}]"
                )));
            }
        }
        Ok(Self { lower, upper })
    }

    /// Creates the box `[-half_width, half_width]^D`.
    ///
    /// # Errors
    ///
    /// Returns [`OptimError::InvalidProblem`] if `half_width` is negative,
    /// not finite, or so large that `2 * half_width` overflows.
    pub fn symmetric(half_width: f64) -> OptimResult<Self> {
        Self::new(
            Point::<D>::repeat(-half_width),
            Point::<D>::repeat(half_width),
        )
    }

    /// Per-coordinate lower bounds.
    pub fn lower(&self) -> &Point<D> {
        &self.lower
    }

    /// Per-coordinate upper bounds.
    pub fn upper(&self) -> &Point<D> {
        &self.upper
    }
}

impl<const D: usize> Bounds<D> for BoxBounds<D> {
    fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<D> {
        Point::<D>::from_fn(|i, _| rng.gen_range(self.lower[i]..=self.upper[i]))
    }

    fn contains(&self, x: &Point<D>) -> bool {
        (0..D).all(|i| x[i] >= self.lower[i] && x[i] <= self.upper[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_inverted_bounds() {
        let result = BoxBounds::new(Point::<2>::new(0.0, 1.0), Point::<2>::new(1.0, 0.0));
        assert!(matches!(result, Err(OptimError::InvalidProblem { .. })));
    }

    #[test]
    fn test_rejects_non_finite_bounds() {
        let result = BoxBounds::<1>::symmetric(f64::INFINITY);
        assert!(matches!(result, Err(OptimError::InvalidProblem { .. })));

        let result = BoxBounds::new(Point::<1>::new(f64::NAN), Point::<1>::new(1.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_overflowing_width() {
        let result = BoxBounds::<1>::symmetric(f64::MAX);
        assert!(matches!(result, Err(OptimError::InvalidProblem { .. })));

        let result = BoxBounds::new(Point::<1>::new(f64::MIN / 2.0), Point::<1>::new(0.0));
        assert!(result.is_ok());
    }

    #[test]
    fn test_samples_very_wide_box() {
        let bounds = BoxBounds::<2>::symmetric(f64::MAX / 4.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..100 {
            assert!(bounds.contains(&bounds.random_point(&mut rng)));
        }
    }

    #[test]
    fn test_negative_half_width_is_inverted() {
        assert!(BoxBounds::<3>::symmetric(-1.0).is_err());
    }

    #[test]
    fn test_samples_stay_inside() {
        let bounds = BoxBounds::new(
            Point::<3>::new(-1.0, 0.0, 5.0),
            Point::<3>::new(1.0, 2.0, 5.0),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let x = bounds.random_point(&mut rng);
            assert!(bounds.contains(&x));
            assert_eq!(x[2], 5.0);
        }
    }

    #[test]
    fn test_contains_edges() {
        let bounds = BoxBounds::<2>::symmetric(10.0).unwrap();
        assert!(bounds.contains(&Point::<2>::new(10.0, -10.0)));
        assert!(!bounds.contains(&Point::<2>::new(10.0001, 0.0)));
        assert_eq!(bounds.lower()[0], -10.0);
        assert_eq!(bounds.upper()[1], 10.0);
    }

    proptest! {
        #[test]
        fn prop_samples_inside_arbitrary_box(
            lo in -1e6f64..1e6,
            width in 0.0f64..1e6,
            seed in any::<u64>(),
        ) {
            let bounds = BoxBounds::new(
                Point::<2>::new(lo, -width),
                Point::<2>::new(lo + width, 0.0),
            )
            .unwrap();
            let x = bounds.random_point(&mut StdRng::seed_from_u64(seed));
            prop_assert!(bounds.contains(&x));
        }
    }
}
