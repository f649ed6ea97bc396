use crate::core::{Convergence, Result, RootSolver};

/// Value solved when neither the command line nor the config names one.
pub const DEFAULT_VALUE: f64 = 2.0;

pub struct SqrtDriver<S: RootSolver> {
    solver: S,
}

impl<S: RootSolver> SqrtDriver<S> {
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    pub fn run(&self, value: f64) -> Result<Convergence> {
        tracing::info!("Solving sqrt({})", value);
        let convergence = self.solver.solve(value)?;
        tracing::info!(
            "Converged to {} after {} iterations (residual {:e})",
            convergence.root,
            convergence.iterations,
            convergence.residual
        );
        Ok(convergence)
    }
}

/// Six fixed decimals, as printed by C's `%lf`.
pub fn format_root(root: f64) -> String {
    format!("{:.6}", root)
}
