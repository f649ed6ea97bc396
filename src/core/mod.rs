pub mod driver;
pub mod newton;

pub use crate::domain::model::Convergence;
pub use crate::domain::ports::RootSolver;
pub use crate::utils::error::Result;
