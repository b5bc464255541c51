//! Pure random search baseline.

use descent_core::{OptimError, OptimResult, Point, Problem};
use rand::Rng;

use crate::optimizer::Optimizer;
use crate::restart::{sample, Best};

/// Draws `count` feasible points and keeps the one with the lowest value.
///
/// Ties keep the first point drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGuessing {
    count: usize,
}

impl RandomGuessing {
    /// Creates a random search over `count` samples.
    ///
    /// # Errors
    ///
    /// Returns [`OptimError::InvalidConfiguration`] if `count` is zero.
    pub fn new(count: usize) -> OptimResult<Self> {
        if count == 0 {
            return Err(OptimError::invalid_configuration("count must be >= 1"));
        }
        Ok(Self { count })
    }

    /// Number of points sampled per run.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Optimizer for RandomGuessing {
    fn optimize_with_rng<const D: usize, P, R>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> OptimResult<Point<D>>
    where
        P: Problem<D> + ?Sized,
        R: Rng + ?Sized,
    {
        let first = sample(problem, rng)?;
        let mut best = Best::new(first, problem.value(&first));

        for _ in 1..self.count {
            let x = sample(problem, rng)?;
            best.offer(x, problem.value(&x));
        }

        Ok(best.into_point())
    }

    fn name(&self) -> &'static str {
        "Random Guessing"
    }
}
