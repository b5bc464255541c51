//! Single-start gradient descent.

use descent_core::{OptimResult, Point, Problem};
use rand::Rng;

use crate::accelerated::AcceleratedGradientDescent;
use crate::optimizer::Optimizer;

/// Accelerated gradient descent from a single random start.
///
/// Delegates to [`AcceleratedGradientDescent`] with one restart and
/// produces identical output for the same random draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientDescent {
    inner: AcceleratedGradientDescent,
}

impl GradientDescent {
    /// Creates the optimizer with `steps_per_restart` iterations.
    pub fn new(steps_per_restart: usize) -> Self {
        Self {
            inner: AcceleratedGradientDescent::single(steps_per_restart),
        }
    }

    /// Number of iterations in the single run.
    pub fn steps_per_restart(&self) -> usize {
        self.inner.config().steps_per_restart
    }
}

impl Optimizer for GradientDescent {
    fn optimize_with_rng<const D: usize, P, R>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> OptimResult<Point<D>>
    where
        P: Problem<D> + ?Sized,
        R: Rng + ?Sized,
    {
        self.inner.optimize_with_rng(problem, rng)
    }

    fn name(&self) -> &'static str {
        "Gradient Descent"
    }
}
