//! # Descent Optim
//!
//! Fixed-budget optimizers that search a problem's feasible region for a
//! minimizer of its objective.
//!
//! This crate provides:
//!
//! - **[`AcceleratedGradientDescent`]**: Best-of-restarts Nesterov momentum descent
//! - **[`GradientDescent`]**: The single-restart specialization
//! - **[`NewtonsMethod`]**: Best-of-restarts full Newton steps
//! - **[`RandomGuessing`]**: Pure random search baseline
//! - **[`SimulatedAnnealing`]**, **[`InteriorPointsMethod`]**: Placeholders returning one sample
//! - **[`Strategy`]**: Uniform dispatch over all of the above
//!
//! # Choosing a Strategy
//!
//! | Strategy | Needs | Cost per restart |
//! |----------|-------|------------------|
//! | Random Guessing | Values | 1 evaluation per sample |
//! | Accelerated Gradient Descent | Gradients | 1 gradient per step |
//! | Newton's Method | Gradients, inverse Hessians | 1 of each per step |
//!
//! None of the strategies checks convergence or enforces bounds after the
//! first step. Iteration counts are fixed at construction.
//!
//! # Features
//!
//! - `parallel`: run restarts on the rayon thread pool
//! - `serde`: (de)serialize [`RestartConfig`] and [`StrategyConfig`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]

pub mod accelerated;
pub mod config;
pub mod gradient_descent;
pub mod newton;
pub mod optimizer;
pub mod placeholder;
pub mod random_guessing;
pub mod strategy;

mod restart;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accelerated::{AcceleratedGradientDescent, MomentumState, STEP_SIZE};
    pub use crate::config::RestartConfig;
    pub use crate::gradient_descent::GradientDescent;
    pub use crate::newton::NewtonsMethod;
    pub use crate::optimizer::Optimizer;
    pub use crate::placeholder::{InteriorPointsMethod, SimulatedAnnealing};
    pub use crate::random_guessing::RandomGuessing;
    pub use crate::strategy::{Strategy, StrategyConfig};
    pub use descent_core::prelude::*;
}

pub use accelerated::{AcceleratedGradientDescent, MomentumState};
pub use config::RestartConfig;
pub use gradient_descent::GradientDescent;
pub use newton::NewtonsMethod;
pub use optimizer::Optimizer;
pub use placeholder::{InteriorPointsMethod, SimulatedAnnealing};
pub use random_guessing::RandomGuessing;
pub use strategy::{Strategy, StrategyConfig};
