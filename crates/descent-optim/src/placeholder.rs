//! Placeholder strategies.
//!
//! Both return a single feasible random point. They exist so callers can
//! enumerate the full strategy set uniformly; a real simulated annealing
//! needs a temperature schedule and Metropolis acceptance, and a real
//! interior point method needs a barrier trajectory with a duality-gap
//! check.

use descent_core::{OptimResult, Point, Problem};
use rand::Rng;

use crate::optimizer::Optimizer;
use crate::restart::sample;

/// Simulated annealing placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedAnnealing;

impl Optimizer for SimulatedAnnealing {
    fn optimize_with_rng<const D: usize, P, R>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> OptimResult<Point<D>>
    where
        P: Problem<D> + ?Sized,
        R: Rng + ?Sized,
    {
        sample(problem, rng)
    }

    fn name(&self) -> &'static str {
        "Simulated Annealing"
    }
}

/// Interior point method placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteriorPointsMethod;

impl Optimizer for InteriorPointsMethod {
    fn optimize_with_rng<const D: usize, P, R>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> OptimResult<Point<D>>
    where
        P: Problem<D> + ?Sized,
        R: Rng + ?Sized,
    {
        sample(problem, rng)
    }

    fn name(&self) -> &'static str {
        "Interior Points Method"
    }
}
