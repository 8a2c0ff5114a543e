use crate::kernel;
use crate::phase::Phase;
use crate::precision::PrecisionPolicy;
use crate::regen;
use crate::scalar::{mp, ComplexField, DpeReal, MpComplex, RealField};
use crate::start;
use crate::state::SolverState;
use crate::stats::SolverOutcome;

/// Sweeps run per packet before the driver re-checks whether to raise
/// precision, switch phase, or regenerate coefficients.
const ITERATIONS_PER_PACKET: usize = 10;

/// Packets spent in Float or Dpe without full convergence before the
/// driver gives up waiting and escalates straight to Mp.
const MAX_PACKETS_BEFORE_ESCALATION: u32 = 3;

impl SolverState {
    /// Runs the Ehrlich-Aberth iteration to completion: repeated packets in
    /// the current phase, escalating to Mp and then raising precision as
    /// needed, until every root's radius is within `prec_out` of the target
    /// or the precision-raise policy is exhausted.
    pub fn solve(&mut self) -> SolverOutcome {
        self.initialize_radii();
        self.cluster.reset(self.n);
        self.reseed();
        self.recompute_radii();

        loop {
            let (_, computed) = kernel::iterate(self, ITERATIONS_PER_PACKET);

            if self.phase != Phase::Mp {
                self.stats.packets += 1;
            }

            if self.should_stop() {
                break;
            }

            if self.phase != Phase::Mp
                && (computed == self.n || self.stats.packets > MAX_PACKETS_BEFORE_ESCALATION)
            {
                self.switch_phase_to_mp();
                self.regenerate();
            } else if self.phase == Phase::Mp {
                let (next_mpwp, exhausted) = PrecisionPolicy::raise(self.mpwp, self.prec_out);
                self.mpwp = next_mpwp;
                mp::set_working_precision(next_mpwp);
                self.stats.precision_raises += 1;
                self.regenerate();

                if exhausted {
                    tracing::warn!(
                        mpwp = self.mpwp,
                        "precision-raise policy exhausted before converging"
                    );
                    self.stats.final_phase = self.phase;
                    return SolverOutcome {
                        statistics: self.stats.clone(),
                        precision_exhausted: true,
                        final_phase: self.phase,
                    };
                }
            }
        }

        self.stats.final_phase = self.phase;
        SolverOutcome {
            statistics: self.stats.clone(),
            precision_exhausted: false,
            final_phase: self.phase,
        }
    }

    fn initialize_radii(&mut self) {
        match self.phase {
            Phase::Float => {
                for r in self.frad.iter_mut() {
                    *r = f64::sentinel_large();
                }
            }
            Phase::Dpe | Phase::Mp => {
                for r in self.drad.iter_mut() {
                    *r = DpeReal::sentinel_large();
                }
            }
        }
    }

    fn should_stop(&self) -> bool {
        match self.phase {
            Phase::Float => {
                let target = 10f64.powi(-(self.prec_out as i32));
                self.frad.iter().all(|r| *r <= target)
            }
            Phase::Dpe | Phase::Mp => {
                let target = DpeReal::pow2(-(self.prec_out as i32));
                self.drad.iter().all(|r| !r.gt(&target))
            }
        }
    }

    fn reseed(&mut self) {
        match self.phase {
            Phase::Float => self.froot = start::seed(&self.coeffs_f.a, &self.coeffs_f.b, self.n),
            Phase::Dpe => self.droot = start::seed(&self.coeffs_d.a, &self.coeffs_d.b, self.n),
            Phase::Mp => self.mroot = start::seed(&self.coeffs_m.a, &self.coeffs_m.b, self.n),
        }
    }

    fn recompute_radii(&mut self) {
        match self.phase {
            Phase::Float => {
                self.frad = start::set_radii(&self.coeffs_f.a, &self.coeffs_f.b, &self.froot)
            }
            Phase::Dpe => {
                self.drad = start::set_radii(&self.coeffs_d.a, &self.coeffs_d.b, &self.droot)
            }
            Phase::Mp => {
                self.drad = start::set_radii(&self.coeffs_m.a, &self.coeffs_m.b, &self.mroot)
            }
        }
    }

    /// Promotes the live kind's coefficients and roots into the Mp kind.
    /// Mp radii are kept in the same dynamic-exponent representation the
    /// Dpe phase uses, so a switch from Dpe carries its radii over as-is.
    fn switch_phase_to_mp(&mut self) {
        mp::set_working_precision(self.mpwp);
        match self.phase {
            Phase::Float => {
                for i in 0..self.n {
                    self.coeffs_m.a[i] =
                        MpComplex::from_f64(self.coeffs_f.a[i].re, self.coeffs_f.a[i].im);
                    self.coeffs_m.b[i] =
                        MpComplex::from_f64(self.coeffs_f.b[i].re, self.coeffs_f.b[i].im);
                    self.mroot[i] = MpComplex::from_f64(self.froot[i].re, self.froot[i].im);
                    self.drad[i] = DpeReal::from_f64(self.frad[i]);
                }
            }
            Phase::Dpe => {
                for i in 0..self.n {
                    self.coeffs_m.a[i] = MpComplex::from_dpe(&self.coeffs_d.a[i]);
                    self.coeffs_m.b[i] = MpComplex::from_dpe(&self.coeffs_d.b[i]);
                    self.mroot[i] = MpComplex::from_dpe(&self.droot[i]);
                }
            }
            Phase::Mp => {}
        }
        self.phase = Phase::Mp;
        for flag in self.again.iter_mut() {
            *flag = true;
        }
        self.stats.phase_switches += 1;
        tracing::info!(mpwp = self.mpwp, "switching to mp phase");
    }

    /// Regenerates the live kind's coefficients from its current roots. On
    /// success, re-seeds and recomputes radii (the roots moved underneath
    /// a new `a`); on failure, the previous coefficients are left in place.
    fn regenerate(&mut self) -> bool {
        let ok = match self.phase {
            Phase::Float => regen::regenerate(&mut self.coeffs_f.a, &mut self.coeffs_f.b, &self.froot),
            Phase::Dpe => regen::regenerate(&mut self.coeffs_d.a, &mut self.coeffs_d.b, &self.droot),
            Phase::Mp => regen::regenerate(&mut self.coeffs_m.a, &mut self.coeffs_m.b, &self.mroot),
        };
        if ok {
            self.stats.regenerations += 1;
            self.reseed();
            self.recompute_radii();
        } else {
            self.stats.regenerations_aborted += 1;
        }
        ok
    }
}
