//! Multi-restart Newton's method.

use descent_core::{OptimResult, Point, Problem};
use rand::Rng;

use crate::config::RestartConfig;
use crate::optimizer::Optimizer;
use crate::restart::best_of_restarts;

/// Best-of-restarts Newton iteration using the problem's inverse Hessian.
///
/// Each restart applies the full step `x <- x - H⁻¹(x) ∇f(x)` for the whole
/// iteration budget. There is no damping, line search or convergence check:
/// an ill-conditioned inverse Hessian diverges silently, and the caller is
/// expected to validate the returned point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewtonsMethod {
    config: RestartConfig,
}

impl NewtonsMethod {
    /// Creates the optimizer.
    ///
    /// # Errors
    ///
    /// Returns [`OptimError::InvalidConfiguration`](descent_core::OptimError::InvalidConfiguration)
    /// if `config.restarts` is zero.
    pub fn new(config: RestartConfig) -> OptimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The restart configuration.
    pub fn config(&self) -> &RestartConfig {
        &self.config
    }

    /// Runs a single restart from `start` and returns its final iterate.
    pub fn iterate<const D: usize, P>(&self, problem: &P, start: Point<D>) -> Point<D>
    where
        P: Problem<D> + ?Sized,
    {
        (0..self.config.steps_per_restart).fold(start, |x, _| {
            x - problem.ihessian(&x) * problem.gradient(&x)
        })
    }

    /// Runs the restarts on the rayon thread pool.
    ///
    /// Returns exactly what [`Optimizer::optimize_with_rng`] returns for the
    /// same generator state.
    ///
    /// # Errors
    ///
    /// See [`Optimizer::optimize_with_rng`].
    #[cfg(feature = "parallel")]
    pub fn optimize_par_with_rng<const D: usize, P, R>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> OptimResult<Point<D>>
    where
        P: Problem<D> + Sync + ?Sized,
        R: Rng + ?Sized,
    {
        crate::restart::best_of_restarts_par(
            self.name(),
            problem,
            rng,
            self.config.restarts,
            |start| self.iterate(problem, start),
        )
    }
}

impl Optimizer for NewtonsMethod {
    fn optimize_with_rng<const D: usize, P, R>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> OptimResult<Point<D>>
    where
        P: Problem<D> + ?Sized,
        R: Rng + ?Sized,
    {
        best_of_restarts(
            self.name(),
            problem,
            rng,
            self.config.restarts,
            |start| self.iterate(problem, start),
        )
    }

    fn name(&self) -> &'static str {
        "Newton's Method"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use descent_core::problems::{Quadratic, Rosenbrock};
    use descent_core::BoxBounds;
    use nalgebra::Matrix3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quadratic() -> Quadratic<3> {
        Quadratic::new(
            Matrix3::new(4.0, 1.0, 0.0, 1.0, 3.0, 0.5, 0.0, 0.5, 2.0),
            Point::<3>::new(1.0, -1.0, 2.0),
            BoxBounds::symmetric(10.0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_one_step_solves_quadratic() {
        let problem = quadratic();
        let newton = NewtonsMethod::new(RestartConfig::new(1, 1)).unwrap();

        let x = newton.iterate(&problem, Point::<3>::new(-7.0, 4.0, 9.5));

        assert_relative_eq!(x, *problem.center(), epsilon = 1e-12);
    }

    #[test]
    fn test_optimize_finds_quadratic_minimum() {
        let problem = quadratic();
        let newton = NewtonsMethod::new(RestartConfig::new(3, 2)).unwrap();

        let x = newton
            .optimize_with_rng(&problem, &mut StdRng::seed_from_u64(17))
            .unwrap();

        assert_relative_eq!(problem.value(&x), 0.0, epsilon = 1e-20);
    }

    #[test]
    fn test_zero_steps_is_identity() {
        let problem = quadratic();
        let newton = NewtonsMethod::new(RestartConfig::new(2, 0)).unwrap();
        let start = Point::<3>::new(0.1, 0.2, 0.3);

        assert_eq!(newton.iterate(&problem, start), start);
    }

    #[test]
    fn test_rosenbrock_near_minimum() {
        let problem = Rosenbrock::new(2.0).unwrap();
        let newton = NewtonsMethod::new(RestartConfig::new(1, 6)).unwrap();

        let x = newton.iterate(&problem, Point::<2>::new(1.2, 1.2));

        assert_relative_eq!(x, Point::<2>::new(1.0, 1.0), epsilon = 1e-8);
    }

    #[test]
    fn test_zero_restarts_rejected() {
        assert!(NewtonsMethod::new(RestartConfig::new(0, 5)).is_err());
    }
}
