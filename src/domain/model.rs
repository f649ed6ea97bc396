use serde::{Deserialize, Serialize};

/// Absolute bound on `|m - x²|` used to decide convergence.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Upper bound on Newton updates before giving up.
///
/// Seeded at `m`, the iterate roughly halves per step until it nears `√m`, so
/// the largest doubles need a little over 512 updates.
pub const DEFAULT_MAX_ITERATIONS: usize = 1100;

/// Returned by the sentinel API for every failure. Any negative result is an error.
pub const INVALID_DOMAIN_SENTINEL: f64 = -1.0;

/// Outcome of a converged run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Convergence {
    pub root: f64,
    /// Number of updates applied; zero when the seed already satisfied the tolerance.
    pub iterations: usize,
    /// `|m - root²|` at the point the loop stopped.
    pub residual: f64,
}
