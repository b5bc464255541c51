//! The closed set of strategies behind one dispatching type.
//!
//! [`Optimizer`] has generic methods, so it cannot be used as a trait
//! object. [`Strategy`] covers every variant instead, letting callers hold a
//! heterogeneous list and run each against the same problem:
//!
//! ```rust
//! use descent_core::problems::Sphere;
//! use descent_core::Problem;
//! use descent_optim::{Optimizer, RestartConfig, Strategy};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let problem = Sphere::<2>::new(5.0).unwrap();
//! for strategy in Strategy::all(&RestartConfig::new(3, 50)).unwrap() {
//!     let mut rng = StdRng::seed_from_u64(1);
//!     let x = strategy.optimize_with_rng(&problem, &mut rng).unwrap();
//!     println!("{:<30} {:.3e}", strategy.name(), problem.value(&x));
//! }
//! ```

use descent_core::{OptimError, OptimResult, Point, Problem};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::accelerated::AcceleratedGradientDescent;
use crate::config::RestartConfig;
use crate::gradient_descent::GradientDescent;
use crate::newton::NewtonsMethod;
use crate::optimizer::Optimizer;
use crate::placeholder::{InteriorPointsMethod, SimulatedAnnealing};
use crate::random_guessing::RandomGuessing;

/// Plain-data description of a strategy and its hyperparameters.
///
/// With the `serde` feature this is an internally tagged object, e.g.
/// `{"kind": "newtons_method", "restarts": 5, "steps_per_restart": 10}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum StrategyConfig {
    /// See [`RandomGuessing`].
    RandomGuessing {
        /// Number of samples.
        count: usize,
    },
    /// See [`AcceleratedGradientDescent`].
    AcceleratedGradientDescent {
        /// Number of restarts.
        restarts: usize,
        /// Iterations per restart.
        steps_per_restart: usize,
    },
    /// See [`GradientDescent`].
    GradientDescent {
        /// Iterations in the single run.
        steps_per_restart: usize,
    },
    /// See [`NewtonsMethod`].
    NewtonsMethod {
        /// Number of restarts.
        restarts: usize,
        /// Iterations per restart.
        steps_per_restart: usize,
    },
    /// See [`SimulatedAnnealing`].
    SimulatedAnnealing,
    /// See [`InteriorPointsMethod`].
    InteriorPointsMethod,
}

/// Any of the available optimizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Random search baseline.
    RandomGuessing(RandomGuessing),
    /// Multi-restart accelerated gradient descent.
    AcceleratedGradientDescent(AcceleratedGradientDescent),
    /// Single-start accelerated gradient descent.
    GradientDescent(GradientDescent),
    /// Multi-restart Newton's method.
    NewtonsMethod(NewtonsMethod),
    /// Simulated annealing placeholder.
    SimulatedAnnealing(SimulatedAnnealing),
    /// Interior point placeholder.
    InteriorPointsMethod(InteriorPointsMethod),
}

impl Strategy {
    /// Builds every strategy from a shared restart configuration.
    ///
    /// Random guessing draws `restarts * max(steps_per_restart, 1)` samples,
    /// roughly one per gradient evaluation of the iterative strategies.
    ///
    /// # Errors
    ///
    /// Returns [`OptimError::InvalidConfiguration`]
    /// if `config.restarts` is zero or the random guessing budget overflows
    /// `usize`.
    pub fn all(config: &RestartConfig) -> OptimResult<Vec<Self>> {
        config.validate()?;
        let samples = config
            .restarts
            .checked_mul(config.steps_per_restart.max(1))
            .ok_or_else(|| {
                OptimError::invalid_configuration(format!(
                    "random guessing budget {} x {} overflows",
                    config.restarts, config.steps_per_restart
                ))
            })?;

        Ok(vec![
            RandomGuessing::new(samples)?.into(),
            AcceleratedGradientDescent::new(*config)?.into(),
            GradientDescent::new(config.steps_per_restart).into(),
            NewtonsMethod::new(*config)?.into(),
            SimulatedAnnealing.into(),
            InteriorPointsMethod.into(),
        ])
    }

    /// The configuration this strategy was built from.
    pub fn config(&self) -> StrategyConfig {
        match self {
            Self::RandomGuessing(o) => StrategyConfig::RandomGuessing { count: o.count() },
            Self::AcceleratedGradientDescent(o) => StrategyConfig::AcceleratedGradientDescent {
                restarts: o.config().restarts,
                steps_per_restart: o.config().steps_per_restart,
            },
            Self::GradientDescent(o) => StrategyConfig::GradientDescent {
                steps_per_restart: o.steps_per_restart(),
            },
            Self::NewtonsMethod(o) => StrategyConfig::NewtonsMethod {
                restarts: o.config().restarts,
                steps_per_restart: o.config().steps_per_restart,
            },
            Self::SimulatedAnnealing(_) => StrategyConfig::SimulatedAnnealing,
            Self::InteriorPointsMethod(_) => StrategyConfig::InteriorPointsMethod,
        }
    }
}

impl TryFrom<StrategyConfig> for Strategy {
    type Error = OptimError;

    fn try_from(config: StrategyConfig) -> OptimResult<Self> {
        Ok(match config {
            StrategyConfig::RandomGuessing { count } => RandomGuessing::new(count)?.into(),
            StrategyConfig::AcceleratedGradientDescent {
                restarts,
                steps_per_restart,
            } => AcceleratedGradientDescent::new(RestartConfig::new(restarts, steps_per_restart))?
                .into(),
            StrategyConfig::GradientDescent { steps_per_restart } => {
                GradientDescent::new(steps_per_restart).into()
            }
            StrategyConfig::NewtonsMethod {
                restarts,
                steps_per_restart,
            } => NewtonsMethod::new(RestartConfig::new(restarts, steps_per_restart))?.into(),
            StrategyConfig::SimulatedAnnealing => SimulatedAnnealing.into(),
            StrategyConfig::InteriorPointsMethod => InteriorPointsMethod.into(),
        })
    }
}

impl Optimizer for Strategy {
    fn optimize_with_rng<const D: usize, P, R>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> OptimResult<Point<D>>
    where
        P: Problem<D> + ?Sized,
        R: Rng + ?Sized,
    {
        match self {
            Self::RandomGuessing(o) => o.optimize_with_rng(problem, rng),
            Self::AcceleratedGradientDescent(o) => o.optimize_with_rng(problem, rng),
            Self::GradientDescent(o) => o.optimize_with_rng(problem, rng),
            Self::NewtonsMethod(o) => o.optimize_with_rng(problem, rng),
            Self::SimulatedAnnealing(o) => o.optimize_with_rng(problem, rng),
            Self::InteriorPointsMethod(o) => o.optimize_with_rng(problem, rng),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::RandomGuessing(o) => o.name(),
            Self::AcceleratedGradientDescent(o) => o.name(),
            Self::GradientDescent(o) => o.name(),
            Self::NewtonsMethod(o) => o.name(),
            Self::SimulatedAnnealing(o) => o.name(),
            Self::InteriorPointsMethod(o) => o.name(),
        }
    }
}

impl From<RandomGuessing> for Strategy {
    fn from(o: RandomGuessing) -> Self {
        Self::RandomGuessing(o)
    }
}

impl From<AcceleratedGradientDescent> for Strategy {
    fn from(o: AcceleratedGradientDescent) -> Self {
        Self::AcceleratedGradientDescent(o)
    }
}

impl From<GradientDescent> for Strategy {
    fn from(o: GradientDescent) -> Self {
        Self::GradientDescent(o)
    }
}

impl From<NewtonsMethod> for Strategy {
    fn from(o: NewtonsMethod) -> Self {
        Self::NewtonsMethod(o)
    }
}

impl From<SimulatedAnnealing> for Strategy {
    fn from(o: SimulatedAnnealing) -> Self {
        Self::SimulatedAnnealing(o)
    }
}

impl From<InteriorPointsMethod> for Strategy {
    fn from(o: InteriorPointsMethod) -> Self {
        Self::InteriorPointsMethod(o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use descent_core::problems::Sphere;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_all_names_unique() {
        let strategies = Strategy::all(&RestartConfig::new(2, 10)).unwrap();
        let mut names: Vec<_> = strategies.iter().map(Optimizer::name).collect();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_all_rejects_zero_restarts() {
        assert!(Strategy::all(&RestartConfig::new(0, 10)).is_err());
    }

    #[test]
    fn test_all_rejects_overflowing_budget() {
        let err = Strategy::all(&RestartConfig::new(usize::MAX / 2, 3)).unwrap_err();
        assert!(err.is_configuration());

        let strategies = Strategy::all(&RestartConfig::new(usize::MAX, 0)).unwrap();
        assert_eq!(
            strategies[0].config(),
            StrategyConfig::RandomGuessing { count: usize::MAX }
        );
    }

    #[test]
    fn test_config_round_trip() {
        for strategy in Strategy::all(&RestartConfig::new(4, 25)).unwrap() {
            assert_eq!(Strategy::try_from(strategy.config()).unwrap(), strategy);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let zero_count = StrategyConfig::RandomGuessing { count: 0 };
        let zero_restarts = StrategyConfig::NewtonsMethod {
            restarts: 0,
            steps_per_restart: 3,
        };

        assert!(Strategy::try_from(zero_count).unwrap_err().is_configuration());
        assert!(Strategy::try_from(zero_restarts).unwrap_err().is_configuration());
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let problem = Sphere::<3>::new(2.0).unwrap();
        let agd = AcceleratedGradientDescent::new(RestartConfig::new(3, 20)).unwrap();
        let strategy = Strategy::from(agd);

        let direct = agd
            .optimize_with_rng(&problem, &mut StdRng::seed_from_u64(21))
            .unwrap();
        let dispatched = strategy
            .optimize_with_rng(&problem, &mut StdRng::seed_from_u64(21))
            .unwrap();

        assert_eq!(direct, dispatched);
        assert_eq!(strategy.name(), agd.name());
    }
}
