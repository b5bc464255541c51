//! Multi-restart accelerated gradient descent.
//!
//! Each restart runs Nesterov-style momentum descent from a fresh feasible
//! sample for a fixed number of steps. With `g = ∇f(y)`:
//!
//! ```text
//! x' = y - η g
//! t' = t (-t + sqrt(4 + t²)) / 2
//! y' = x' + t (1 - t) / (t² + t') (x' - x)
//! t' = 1            if (x' - x)ᵀ g > 0
//! ```
//!
//! The last line restarts the momentum schedule whenever the step and the
//! gradient disagree. It does not restart the outer loop.

use descent_core::{OptimResult, Point, Problem};
use rand::Rng;

use crate::config::RestartConfig;
use crate::optimizer::Optimizer;
use crate::restart::best_of_restarts;

/// Fixed gradient step size `η`.
pub const STEP_SIZE: f64 = 0.01;

/// The `(x, y, t)` triple carried between accelerated descent steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumState<const D: usize> {
    /// Current iterate.
    pub x: Point<D>,
    /// Momentum-extrapolated point the next gradient is taken at.
    pub y: Point<D>,
    /// Momentum coefficient.
    pub t: f64,
}

impl<const D: usize> MomentumState<D> {
    /// Initial state at `start`: `x = y = start`, `t = 1`.
    pub fn new(start: Point<D>) -> Self {
        Self {
            x: start,
            y: start,
            t: 1.0,
        }
    }

    /// Applies one step given `gradient = ∇f(self.y)`.
    #[must_use]
    pub fn next(&self, gradient: &Point<D>) -> Self {
        let t = self.t;
        let x = self.y - gradient * STEP_SIZE;
        let mut t_next = 0.5 * t * (-t + (4.0 + t * t).sqrt());
        let step = x - self.x;
        let y = x + step * (t * (1.0 - t) / (t * t + t_next));

        if step.dot(gradient) > 0.0 {
            log::trace!("momentum reset at t = {t_next:.6}");
            t_next = 1.0;
        }

        Self { x, y, t: t_next }
    }
}

/// Best-of-restarts accelerated gradient descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceleratedGradientDescent {
    config: RestartConfig,
}

impl AcceleratedGradientDescent {
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

    /// A single restart of `steps_per_restart` iterations.
    pub(crate) fn single(steps_per_restart: usize) -> Self {
        Self {
            config: RestartConfig::single(steps_per_restart),
        }
    }

    /// The restart configuration.
    pub fn config(&self) -> &RestartConfig {
        &self.config
    }

    /// Runs a single restart from `start` and returns its final iterate.
    pub fn descend<const D: usize, P>(&self, problem: &P, start: Point<D>) -> Point<D>
    where
        P: Problem<D> + ?Sized,
    {
        (0..self.config.steps_per_restart)
            .fold(MomentumState::new(start), |state, _| {
                state.next(&problem.gradient(&state.y))
            })
            .x
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
            |start| self.descend(problem, start),
        )
    }
}

impl Optimizer for AcceleratedGradientDescent {
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
            |start| self.descend(problem, start),
        )
    }

    fn name(&self) -> &'static str {
        "Stochastic Gradient Descent"
    }
}
