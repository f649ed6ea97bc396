use crate::domain::model::Convergence;
use crate::utils::error::Result;

pub trait RootSolver: Send + Sync {
    fn solve(&self, m: f64) -> Result<Convergence>;

    /// Sentinel form: the root on success, `-1.0` on any error.
    fn solve_or_sentinel(&self, m: f64) -> f64 {
        self.solve(m)
            .map(|c| c.root)
            .unwrap_or(crate::domain::model::INVALID_DOMAIN_SENTINEL)
    }
}
