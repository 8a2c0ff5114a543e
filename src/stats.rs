use serde::Serialize;

use crate::phase::Phase;

/// Accumulated counters for a single `solve` call, in the spirit of the
/// teacher's `get_statistics()` ODE solver snapshots.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SolverStatistics {
    pub packets: u32,
    pub iterations: u64,
    pub regenerations: u32,
    pub regenerations_aborted: u32,
    pub phase_switches: u32,
    pub precision_raises: u32,
    pub final_phase: Phase,
}

/// What a `solve` call hands back, alongside the roots and radii left in
/// `SolverState`.
#[derive(Clone, Debug)]
pub struct SolverOutcome {
    pub statistics: SolverStatistics,
    /// Set when the precision-raise policy hit its ceiling before
    /// `should_stop` succeeded — the returned roots are still the best
    /// approximations reached, just not guaranteed to meet `prec_out`.
    pub precision_exhausted: bool,
    pub final_phase: Phase,
}
