//! Error types for optimizer construction and problem validation.

use thiserror::Error;

/// A specialized Result type for optimizer operations.
pub type OptimResult<T> = Result<T, OptimError>;

/// Errors that can occur when configuring or running an optimizer.
///
/// Numerical degeneracy (diverging iterates, ill-conditioned inverse
/// Hessians) is deliberately absent: it surfaces as a poor or non-finite
/// returned point, not as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptimError {
    /// Hyperparameters that would make an optimizer loop meaningless.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the rejected hyperparameter.
        reason: String,
    },

    /// The problem or its feasible region breaks its contract.
    #[error("Invalid problem: {reason}")]
    InvalidProblem {
        /// Description of the contract violation.
        reason: String,
    },
}

impl OptimError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Creates an invalid problem error.
    #[must_use]
    pub fn invalid_problem(reason: impl Into<String>) -> Self {
        Self::InvalidProblem {
            reason: reason.into(),
        }
    }

    /// Returns true for configuration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}
