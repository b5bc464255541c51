//! Best-of-restarts driver shared by the iterative strategies.
//!
//! Random draws always happen in the same order: one fallback point, then
//! one start point per restart. The per-restart routines never touch the
//! generator, so the sequential and parallel drivers see identical starts
//! for the same generator state and reduce to the same answer.

use descent_core::types::is_finite;
use descent_core::{Bounds, OptimError, OptimResult, Point, Problem};
use rand::Rng;

/// Draws a feasible point, rejecting non-finite samples.
pub(crate) fn sample<const D: usize, P, R>(problem: &P, rng: &mut R) -> OptimResult<Point<D>>
where
    P: Problem<D> + ?Sized,
    R: Rng + ?Sized,
{
    let x = problem.bounds().random_point(rng);
    if is_finite(&x) {
        Ok(x)
    } else {
        Err(OptimError::invalid_problem(
            "bounds produced a non-finite sample",
        ))
    }
}

/// Best-so-far point under strict `<`, so ties keep the earlier point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Best<const D: usize> {
    point: Point<D>,
    value: f64,
}

impl<const D: usize> Best<D> {
    pub(crate) fn new(point: Point<D>, value: f64) -> Self {
        Self { point, value }
    }

    /// Keeps `point` if it is strictly better. NaN values never win.
    pub(crate) fn offer(&mut self, point: Point<D>, value: f64) -> bool {
        if value < self.value {
            self.point = point;
            self.value = value;
            true
        } else {
            false
        }
    }

    pub(crate) fn into_point(self) -> Point<D> {
        self.point
    }
}

/// Runs `restarts` independent restarts and returns the best final point,
/// seeded with an independent fallback sample.
pub(crate) fn best_of_restarts<const D: usize, P, R, F>(
    name: &str,
    problem: &P,
    rng: &mut R,
    restarts: usize,
    mut run: F,
) -> OptimResult<Point<D>>
where
    P: Problem<D> + ?Sized,
    R: Rng + ?Sized,
    F: FnMut(Point<D>) -> Point<D>,
{
    let fallback = sample(problem, rng)?;
    let mut best = Best::new(fallback, problem.value(&fallback));

    for restart in 0..restarts {
        let start = sample(problem, rng)?;
        let candidate = run(start);
        let value = problem.value(&candidate);
        let improved = best.offer(candidate, value);
        log::debug!(
            "{name}: restart {}/{restarts} finished at {value:.6e}{}",
            restart + 1,
            if improved { " (new best)" } else { "" }
        );
    }

    Ok(best.into_point())
}

/// Parallel counterpart of [`best_of_restarts`].
///
/// Start points are drawn up front in restart order, restarts run on the
/// rayon pool, and candidates are folded back in restart order.
#[cfg(feature = "parallel")]
pub(crate) fn best_of_restarts_par<const D: usize, P, R, F>(
    name: &str,
    problem: &P,
    rng: &mut R,
    restarts: usize,
    run: F,
) -> OptimResult<Point<D>>
where
    P: Problem<D> + Sync + ?Sized,
    R: Rng + ?Sized,
    F: Fn(Point<D>) -> Point<D> + Sync,
{
    use rayon::prelude::*;

    let fallback = sample(problem, rng)?;
    let starts = (0..restarts)
        .map(|_| sample(problem, rng))
        .collect::<OptimResult<Vec<_>>>()?;

    let candidates: Vec<(Point<D>, f64)> = starts
        .into_par_iter()
        .map(|start| {
            let candidate = run(start);
            let value = problem.value(&candidate);
            (candidate, value)
        })
        .collect();

    let mut best = Best::new(fallback, problem.value(&fallback));
    for (restart, (candidate, value)) in candidates.into_iter().enumerate() {
        let improved = best.offer(candidate, value);
        log::debug!(
            "{name}: restart {}/{restarts} finished at {value:.6e}{}",
            restart + 1,
            if improved { " (new best)" } else { "" }
        );
    }

    Ok(best.into_point())
}
