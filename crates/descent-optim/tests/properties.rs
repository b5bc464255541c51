//! Behavioral properties shared by the restart-based strategies.
//!
//! Every optimizer draws its random points from the caller's generator in
//! a fixed order (fallback first, then one start per restart), so a cloned
//! generator replays exactly the points a run saw.

use std::cell::Cell;

use descent_core::problems::{Rosenbrock, Sphere};
use descent_core::{Bounds, InverseHessian, OptimError, Point, Problem};
use descent_optim::{
    AcceleratedGradientDescent, GradientDescent, NewtonsMethod, Optimizer, RandomGuessing,
    RestartConfig,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// SCRIPTED PROBLEM
// =============================================================================

/// Hands out a fixed sequence of samples, ignoring the generator.
struct Scripted {
    samples: Vec<f64>,
    next: Cell<usize>,
}

impl Bounds<1> for Scripted {
    fn random_point<R: Rng + ?Sized>(&self, _rng: &mut R) -> Point<1> {
        let i = self.next.get();
        self.next.set(i + 1);
        Point::<1>::new(self.samples[i % self.samples.len()])
    }

    fn contains(&self, x: &Point<1>) -> bool {
        self.samples.contains(&x[0])
    }
}

/// `f(x) = x^2` over a scripted sample sequence.
struct Parabola {
    bounds: Scripted,
}

impl Parabola {
    fn new(samples: &[f64]) -> Self {
        Self {
            bounds: Scripted {
                samples: samples.to_vec(),
                next: Cell::new(0),
            },
        }
    }
}

impl Problem<1> for Parabola {
    type Bounds = Scripted;

    fn value(&self, x: &Point<1>) -> f64 {
        x[0] * x[0]
    }

    fn gradient(&self, x: &Point<1>) -> Point<1> {
        x * 2.0
    }

    fn ihessian(&self, _x: &Point<1>) -> InverseHessian<1> {
        InverseHessian::<1>::new(0.5)
    }

    fn bounds(&self) -> &Scripted {
        &self.bounds
    }
}

/// Replays the `1 + restarts` points a restart-based run draws.
fn replay_draws<const D: usize, P: Problem<D>>(
    problem: &P,
    seed: u64,
    restarts: usize,
) -> Vec<Point<D>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..=restarts)
        .map(|_| problem.bounds().random_point(&mut rng))
        .collect()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_random_guessing_scripted_samples() {
    let problem = Parabola::new(&[2.0, 0.1, 5.0]);
    let optimizer = RandomGuessing::new(3).unwrap();

    let x = optimizer.optimize(&problem).unwrap();

    assert_eq!(x[0], 0.1);
}

#[test]
fn test_random_guessing_ties_keep_first() {
    let problem = Parabola::new(&[3.0, -1.0, 1.0]);
    let optimizer = RandomGuessing::new(3).unwrap();

    let x = optimizer.optimize(&problem).unwrap();

    assert_eq!(x[0], -1.0);
}

#[test]
fn test_zero_counts_are_configuration_errors() {
    let errors = [
        RandomGuessing::new(0).unwrap_err(),
        AcceleratedGradientDescent::new(RestartConfig::new(0, 200)).unwrap_err(),
        NewtonsMethod::new(RestartConfig::new(0, 200)).unwrap_err(),
    ];

    for err in errors {
        assert!(matches!(err, OptimError::InvalidConfiguration { .. }));
    }
}

#[test]
fn test_sphere_convergence_in_five_dimensions() {
    let problem = Sphere::<5>::new(10.0).unwrap();
    let optimizer = AcceleratedGradientDescent::new(RestartConfig::new(5, 200)).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let x = optimizer.optimize_with_rng(&problem, &mut rng).unwrap();

    assert!(problem.value(&x) < 1e-3);
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_accelerated_best_of_restarts(
        seed in any::<u64>(),
        restarts in 2usize..6,
        steps in 0usize..40,
    ) {
        let problem = Rosenbrock::new(1.5).unwrap();
        let optimizer = AcceleratedGradientDescent::new(RestartConfig::new(restarts, steps)).unwrap();

        let x = optimizer
            .optimize_with_rng(&problem, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let best = problem.value(&x);

        let draws = replay_draws(&problem, seed, restarts);
        prop_assert!(best <= problem.value(&draws[0]));
        for start in &draws[1..] {
            let value = problem.value(&optimizer.descend(&problem, *start));
            if value.is_finite() {
                prop_assert!(best <= value);
            }
        }
    }

    #[test]
    fn prop_newton_best_of_restarts(
        seed in any::<u64>(),
        restarts in 2usize..6,
        steps in 0usize..8,
    ) {
        let problem = Rosenbrock::new(1.5).unwrap();
        let optimizer = NewtonsMethod::new(RestartConfig::new(restarts, steps)).unwrap();

        let x = optimizer
            .optimize_with_rng(&problem, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let best = problem.value(&x);

        let draws = replay_draws(&problem, seed, restarts);
        prop_assert!(best <= problem.value(&draws[0]));
        for start in &draws[1..] {
            let value = problem.value(&optimizer.iterate(&problem, *start));
            if value.is_finite() {
                prop_assert!(best <= value);
            }
        }
    }

    #[test]
    fn prop_gradient_descent_equals_single_restart(seed in any::<u64>(), steps in 0usize..100) {
        let problem = Sphere::<3>::new(10.0).unwrap();
        let gd = GradientDescent::new(steps);
        let agd = AcceleratedGradientDescent::new(RestartConfig::new(1, steps)).unwrap();

        let a = gd.optimize_with_rng(&problem, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = agd.optimize_with_rng(&problem, &mut StdRng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_zero_steps_return_a_drawn_point(seed in any::<u64>(), restarts in 1usize..5) {
        let problem = Sphere::<2>::new(3.0).unwrap();
        let config = RestartConfig::new(restarts, 0);
        let draws = replay_draws(&problem, seed, restarts);

        let agd = AcceleratedGradientDescent::new(config).unwrap()
            .optimize_with_rng(&problem, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let newton = NewtonsMethod::new(config).unwrap()
            .optimize_with_rng(&problem, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        prop_assert!(draws.contains(&agd));
        prop_assert!(draws.contains(&newton));
        prop_assert!(problem.bounds().contains(&agd));
    }

    #[test]
    fn prop_sphere_convergence(seed in any::<u64>()) {
        let problem = Sphere::<3>::new(10.0).unwrap();
        let optimizer = AcceleratedGradientDescent::new(RestartConfig::new(5, 200)).unwrap();

        let x = optimizer
            .optimize_with_rng(&problem, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        prop_assert!(problem.value(&x) < 1e-3);
    }
}
