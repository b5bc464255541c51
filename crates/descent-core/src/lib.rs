//! # Descent Core
//!
//! Shared abstractions for the Descent optimizers.
//!
//! This crate provides:
//!
//! - **Problem**: The objective abstraction (value, gradient, inverse Hessian, bounds)
//! - **Bounds**: Uniformly sampled feasible regions, with [`BoxBounds`] as the standard box
//! - **Types**: Fixed-dimension [`Point`] and [`InverseHessian`] aliases over `nalgebra`
//! - **Problems**: Reference objectives (Sphere, Quadratic, Rosenbrock)
//!
//! ## Design Philosophy
//!
//! - **Compile-time dimensions**: Problems and optimizers agree on `D` statically
//! - **Immutable problems**: Optimizers only ever borrow a problem immutably
//! - **Explicit randomness**: Sampling takes a caller-supplied `rand::Rng`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]

pub mod bounds;
pub mod error;
pub mod problem;
pub mod problems;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bounds::BoxBounds;
    pub use crate::error::{OptimError, OptimResult};
    pub use crate::problem::{Bounds, Problem};
    pub use crate::problems::{Quadratic, Rosenbrock, Sphere};
    pub use crate::types::{InverseHessian, Point};
}

pub use bounds::BoxBounds;
pub use error::{OptimError, OptimResult};
pub use problem::{Bounds, Problem};
pub use types::{InverseHessian, Point};
