//! Reference objectives with analytic derivatives.
//!
//! These are the standard smooth test functions used to exercise the
//! optimizers:
//!
//! | Problem | Dimension | Minimum | Convex |
//! |---------|-----------|---------|--------|
//! | [`Sphere`] | any | `0` at the origin | Yes |
//! | [`Quadratic`] | any | `0` at the center | Yes |
//! | [`Rosenbrock`] | 2 | `0` at `(1, 1)` | No |

mod quadratic;
mod rosenbrock;
mod sphere;

pub use quadratic::Quadratic;
pub use rosenbrock::Rosenbrock;
pub use sphere::Sphere;
