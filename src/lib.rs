pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::SolverConfig;
pub use crate::core::driver::{format_root, SqrtDriver};
pub use crate::core::newton::{sqrt_newton, try_sqrt_newton, NewtonSqrt};
pub use crate::domain::model::{Convergence, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use crate::domain::ports::RootSolver;
pub use crate::utils::error::{Result, SqrtError};
