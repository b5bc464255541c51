//! Hyperparameters for the restart-based strategies.

use descent_core::{OptimError, OptimResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of independent restarts.
pub const DEFAULT_RESTARTS: usize = 10;

/// Default number of iterations per restart.
pub const DEFAULT_STEPS_PER_RESTART: usize = 100;

/// Configuration for restart-based optimizers.
///
/// Validation happens when an optimizer is built from the configuration,
/// so a config may be assembled (or deserialized) freely first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RestartConfig {
    /// Number of independent restarts, at least 1.
    pub restarts: usize,
    /// Fixed number of iterations in each restart. Zero returns the sampled
    /// start points untouched.
    pub steps_per_restart: usize,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            restarts: DEFAULT_RESTARTS,
            steps_per_restart: DEFAULT_STEPS_PER_RESTART,
        }
    }
}

impl RestartConfig {
    /// Creates a new restart configuration.
    #[must_use]
    pub fn new(restarts: usize, steps_per_restart: usize) -> Self {
        Self {
            restarts,
            steps_per_restart,
        }
    }

    /// A single restart running `steps_per_restart` iterations.
    #[must_use]
    pub fn single(steps_per_restart: usize) -> Self {
        Self::new(1, steps_per_restart)
    }

    /// Sets the number of restarts.
    #[must_use]
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Sets the number of iterations per restart.
    #[must_use]
    pub fn with_steps_per_restart(mut self, steps_per_restart: usize) -> Self {
        self.steps_per_restart = steps_per_restart;
        self
    }

    /// Checks that the configuration describes at least one restart.
    ///
    /// # Errors
    ///
    /// Returns [`OptimError::InvalidConfiguration`] if `restarts` is zero.
    pub fn validate(&self) -> OptimResult<()> {
        if self.restarts == 0 {
            return Err(OptimError::invalid_configuration(
                "restarts must be >= 1",
            ));
        }
        Ok(())
    }
}
