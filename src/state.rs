use crate::cluster::ClusterState;
use crate::coefficients::CoefficientArrays;
use crate::errors::SecularError;
use crate::phase::Phase;
use crate::scalar::{mp, ComplexField, DpeComplex, DpeReal, FloatComplex, MpComplex};
use crate::stats::SolverStatistics;

/// Configuration input: the degree and kind are both implied by which
/// variant is supplied, matching §6's "initial coefficient arrays in the
/// kind matching `initial_phase`".
pub enum InitialCoefficients {
    Float {
        a: Vec<FloatComplex>,
        b: Vec<FloatComplex>,
    },
    Dpe {
        a: Vec<DpeComplex>,
        b: Vec<DpeComplex>,
    },
    Mp {
        a: Vec<MpComplex>,
        b: Vec<MpComplex>,
        working_precision: u32,
    },
}

impl InitialCoefficients {
    fn lengths(&self) -> (usize, usize) {
        match self {
            InitialCoefficients::Float { a, b } => (a.len(), b.len()),
            InitialCoefficients::Dpe { a, b } => (a.len(), b.len()),
            InitialCoefficients::Mp { a, b, .. } => (a.len(), b.len()),
        }
    }

    fn phase(&self) -> Phase {
        match self {
            InitialCoefficients::Float { .. } => Phase::Float,
            InitialCoefficients::Dpe { .. } => Phase::Dpe,
            InitialCoefficients::Mp { .. } => Phase::Mp,
        }
    }
}

/// All state owned by a single solve: n, current phase, per-root
/// approximations and radii in every kind, activity flags, and the target
/// precisions. Exclusively owned by the driver; the iteration kernel and
/// regeneration engine borrow it mutably but never retain the borrow beyond
/// a single call.
pub struct SolverState {
    pub n: usize,
    pub prec_out: u32,
    pub phase: Phase,
    pub mpwp: u32,

    pub coeffs_f: CoefficientArrays<FloatComplex>,
    pub coeffs_d: CoefficientArrays<DpeComplex>,
    pub coeffs_m: CoefficientArrays<MpComplex>,

    pub froot: Vec<FloatComplex>,
    pub droot: Vec<DpeComplex>,
    pub mroot: Vec<MpComplex>,

    /// Radii for the float phase.
    pub frad: Vec<f64>,
    /// Radii shared by the dpe and mp phases — the reference keeps mp radii
    /// in the dynamic-exponent representation too, since a correction that
    /// shrinks a radius in mp still needs to be compared against a target
    /// that may be far smaller than any native double.
    pub drad: Vec<DpeReal>,

    pub again: Vec<bool>,
    pub cluster: ClusterState,
    pub stats: SolverStatistics,
}

impl SolverState {
    pub fn new(prec_out: u32, initial: InitialCoefficients) -> Result<Self, SecularError> {
        if prec_out == 0 {
            return Err(SecularError::InvalidPrecisionTarget(prec_out));
        }
        let (a_len, b_len) = initial.lengths();
        if a_len != b_len {
            return Err(SecularError::MismatchedLengths { a_len, b_len });
        }
        let n = a_len;
        if n == 0 {
            return Err(SecularError::InvalidDegree(n));
        }

        let phase = initial.phase();
        let mut mpwp = mp::working_precision();

        let (coeffs_f, coeffs_d, coeffs_m) = match initial {
            InitialCoefficients::Float { a, b } => (
                CoefficientArrays { a, b },
                CoefficientArrays::zeros(n),
                CoefficientArrays::zeros(n),
            ),
            InitialCoefficients::Dpe { a, b } => (
                CoefficientArrays::zeros(n),
                CoefficientArrays { a, b },
                CoefficientArrays::zeros(n),
            ),
            InitialCoefficients::Mp {
                a,
                b,
                working_precision,
            } => {
                mpwp = working_precision;
                mp::set_working_precision(working_precision);
                (
                    CoefficientArrays::zeros(n),
                    CoefficientArrays::zeros(n),
                    CoefficientArrays { a, b },
                )
            }
        };

        Ok(SolverState {
            n,
            prec_out,
            phase,
            mpwp,
            coeffs_f,
            coeffs_d,
            coeffs_m,
            froot: vec![FloatComplex::zero(); n],
            droot: vec![DpeComplex::zero(); n],
            mroot: vec![MpComplex::zero(); n],
            frad: vec![0.0; n],
            drad: vec![DpeReal::zero(); n],
            again: vec![true; n],
            cluster: ClusterState::default(),
            stats: SolverStatistics::default(),
        })
    }

    /// Final root approximations as `(re, im)` pairs, converted out of
    /// whatever kind is currently live. Lossy for the dpe and mp kinds when
    /// a root's magnitude sits outside the native double range.
    pub fn roots_approx(&self) -> Vec<(f64, f64)> {
        match self.phase {
            Phase::Float => self.froot.iter().map(|z| (z.re, z.im)).collect(),
            Phase::Dpe => self.droot.iter().map(DpeComplex::to_f64_approx).collect(),
            Phase::Mp => self.mroot.iter().map(MpComplex::to_f64_approx).collect(),
        }
    }
}
