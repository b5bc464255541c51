//! The optimizer capability shared by every strategy.

use descent_core::{OptimResult, Point, Problem};
use rand::Rng;

/// A strategy that searches a problem's feasible region for a minimizer.
///
/// Implementations hold only their hyperparameters. Calling
/// [`optimize`](Self::optimize) twice is independent and leaves the
/// optimizer unchanged, though results differ run to run unless the
/// randomness is pinned via [`optimize_with_rng`](Self::optimize_with_rng).
///
/// # Example
///
/// ```rust
/// use descent_core::problems::Sphere;
/// use descent_core::Problem;
/// use descent_optim::{AcceleratedGradientDescent, Optimizer, RestartConfig};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let problem = Sphere::<3>::new(10.0).unwrap();
/// let optimizer = AcceleratedGradientDescent::new(RestartConfig::new(5, 200)).unwrap();
///
/// let x = optimizer
///     .optimize_with_rng(&problem, &mut StdRng::seed_from_u64(42))
///     .unwrap();
/// assert!(problem.value(&x) < 1e-3);
/// ```
pub trait Optimizer {
    /// Returns a point believed to approximately minimize `problem`, drawing
    /// all random samples from `rng`.
    ///
    /// The start points are feasible; unconstrained gradient or Newton steps
    /// may move the returned point outside the region.
    ///
    /// # Errors
    ///
    /// Returns [`OptimError::InvalidProblem`](descent_core::OptimError::InvalidProblem)
    /// if the problem's bounds produce a non-finite sample.
    fn optimize_with_rng<const D: usize, P, R>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> OptimResult<Point<D>>
    where
        P: Problem<D> + ?Sized,
        R: Rng + ?Sized;

    /// Same as [`optimize_with_rng`](Self::optimize_with_rng) using the
    /// thread-local generator.
    ///
    /// # Errors
    ///
    /// See [`optimize_with_rng`](Self::optimize_with_rng).
    fn optimize<const D: usize, P>(&self, problem: &P) -> OptimResult<Point<D>>
    where
        P: Problem<D> + ?Sized,
    {
        self.optimize_with_rng(problem, &mut rand::thread_rng())
    }

    /// Returns the human-readable name of the strategy.
    fn name(&self) -> &'static str;
}
