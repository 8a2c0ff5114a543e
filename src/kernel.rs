use crate::aberth::aberth_sum;
use crate::newton::newton_eval;
use crate::phase::Phase;
use crate::scalar::{ComplexField, RealField};
use crate::state::SolverState;

/// Runs up to `maxit` Gauss-Seidel sweeps of the Ehrlich-Aberth iteration
/// over all n roots, generic over the numeric kind. A sweep visits every
/// still-active root in index order, applying the Newton correction
/// deflated by the Aberth sum over the other current approximations, and
/// stops early once every root has gone inactive.
///
/// Returns the number of sweeps actually performed and the number of roots
/// considered converged (`again[i] == false`) at the end of the packet.
///
/// Float and Dpe phases run for at most `maxit - 1` sweeps; the Mp phase
/// runs the full `maxit`. This one-sweep asymmetry is carried over
/// unchanged from the reference algorithm rather than "fixed", since
/// correcting it would shift convergence behavior other parts of the
/// driver (in particular the packet-count phase-switch threshold) are
/// tuned against.
pub fn iterate_packet<K: ComplexField>(
    a: &[K],
    b: &[K],
    roots: &mut [K],
    radii: &mut [K::Real],
    again: &mut [bool],
    maxit: usize,
    is_mp: bool,
    prec_out: u32,
) -> (usize, usize) {
    let n = roots.len();
    let budget = if is_mp { maxit } else { maxit.saturating_sub(1) };
    let mp_target = K::Real::pow2(-(prec_out as i32));

    // Every packet starts by reactivating all roots (Float/Dpe), or by
    // re-checking each radius against the target (Mp) — a root frozen by a
    // single no-progress Newton step still gets another chance next packet.
    for i in 0..n {
        again[i] = if is_mp { radii[i].gt(&mp_target) } else { true };
    }

    let mut sweeps = 0;
    for _ in 0..budget {
        if again.iter().all(|flag| !flag) {
            break;
        }
        sweeps += 1;
        for i in 0..n {
            if !again[i] {
                continue;
            }
            let (corr, newton_again) = newton_eval(a, b, &roots[i], &radii[i]);
            if !newton_again && corr.is_zero() {
                // z coincides with an interpolation point: the equation is
                // unevaluable here, freeze the root rather than step it.
                again[i] = false;
                continue;
            }

            let defl = aberth_sum(roots, i);
            let denom = K::one().sub(&corr.mul(&defl));
            let step = if denom.is_zero() { corr } else { corr.div(&denom) };
            roots[i] = roots[i].sub(&step);
            // Inclusion radius growth: a conservative bound on how far this
            // packet's corrections could have moved the root, never shrunk
            // within a packet (only a fresh regeneration tightens it).
            radii[i] = radii[i].add(&step.modulus());

            again[i] = newton_again;
        }
    }

    let computed = again.iter().filter(|flag| !**flag).count();
    (sweeps, computed)
}

pub fn iterate_float(state: &mut SolverState, maxit: usize) -> (usize, usize) {
    let (sweeps, computed) = iterate_packet(
        &state.coeffs_f.a,
        &state.coeffs_f.b,
        &mut state.froot,
        &mut state.frad,
        &mut state.again,
        maxit,
        false,
        state.prec_out,
    );
    state.stats.iterations += sweeps as u64;
    tracing::debug!(phase = ?Phase::Float, sweeps, computed, "packet complete");
    (sweeps, computed)
}

pub fn iterate_dpe(state: &mut SolverState, maxit: usize) -> (usize, usize) {
    let (sweeps, computed) = iterate_packet(
        &state.coeffs_d.a,
        &state.coeffs_d.b,
        &mut state.droot,
        &mut state.drad,
        &mut state.again,
        maxit,
        false,
        state.prec_out,
    );
    state.stats.iterations += sweeps as u64;
    tracing::debug!(phase = ?Phase::Dpe, sweeps, computed, "packet complete");
    (sweeps, computed)
}

pub fn iterate_mp(state: &mut SolverState, maxit: usize) -> (usize, usize) {
    let (sweeps, computed) = iterate_packet(
        &state.coeffs_m.a,
        &state.coeffs_m.b,
        &mut state.mroot,
        &mut state.drad,
        &mut state.again,
        maxit,
        true,
        state.prec_out,
    );
    state.stats.iterations += sweeps as u64;
    tracing::debug!(phase = ?Phase::Mp, sweeps, computed, "packet complete");
    (sweeps, computed)
}

/// Dispatches to the kernel matching `state.phase`.
pub fn iterate(state: &mut SolverState, maxit: usize) -> (usize, usize) {
    match state.phase {
        Phase::Float => iterate_float(state, maxit),
        Phase::Dpe => iterate_dpe(state, maxit),
        Phase::Mp => iterate_mp(state, maxit),
    }
}
