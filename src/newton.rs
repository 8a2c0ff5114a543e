use crate::scalar::{ComplexField, RealField};

/// The secular equation itself, evaluated generically over any numeric kind:
///
///   S(z)  = sum_i a_i/(z - b_i) - 1
///   S'(z) = -sum_i a_i/(z - b_i)^2
///   corr  = S(z) / S'(z)
///
/// `again` is cleared when the correction is no longer meaningful relative
/// to the root's current inclusion radius `r` (a standard Newton stopping
/// criterion: once a step can't move `z` by more than a small fraction of
/// the bound already known to contain it, further sweeps aren't worth
/// running), or when `z` coincides exactly with one of the interpolation
/// points `b_i`, in which case the equation cannot be evaluated and the
/// root is frozen.
pub fn newton_eval<K: ComplexField>(a: &[K], b: &[K], z: &K, r: &K::Real) -> (K, bool) {
    let mut s = K::zero();
    let mut sp = K::zero();
    for (ai, bi) in a.iter().zip(b.iter()) {
        let diff = z.sub(bi);
        if diff.is_zero() {
            return (K::zero(), false);
        }
        let inv = diff.inv();
        let term = ai.mul(&inv);
        s = s.add(&term);
        sp = sp.sub(&term.mul(&inv));
    }
    s = s.sub(&K::one());
    if sp.is_zero() {
        return (K::zero(), false);
    }
    let corr = s.div(&sp);
    let again = corr.modulus().gt(&convergence_floor::<K>(r));
    (corr, again)
}

/// A fraction of `r` below which a correction no longer moves the root far
/// enough, relative to what's already known to contain it, to be worth
/// another sweep. `2^-53` matches a native double's mantissa width, so a
/// Float/Dpe root stops exactly when a step would no longer be representable
/// against its own radius; Mp inherits the same ratio regardless of working
/// precision, since its stopping is governed by the separate radius-vs-target
/// check the caller applies once per packet.
fn convergence_floor<K: ComplexField>(r: &K::Real) -> K::Real {
    r.div(&K::Real::pow2(53))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::FloatComplex;
    use num_complex::Complex;

    #[test]
    fn newton_step_points_toward_a_root() {
        // S(x) = 1/(x-0) + 1/(x-2) - 1, root near x = 1 - sqrt(2) or 1 + sqrt(2)
        let a = vec![FloatComplex::new(1.0, 0.0), FloatComplex::new(1.0, 0.0)];
        let b = vec![FloatComplex::new(0.0, 0.0), FloatComplex::new(2.0, 0.0)];
        let z = Complex::new(3.0, 0.0);
        let r = 10.0_f64;
        let (corr, again) = newton_eval(&a, &b, &z, &r);
        assert!(again);
        let stepped = z.sub(&corr);
        let target = 1.0 + std::f64::consts::SQRT_2;
        assert!((stepped.re - target).abs() < (z.re - target).abs());
    }

    #[test]
    fn freezes_at_a_coincident_interpolation_point() {
        let a = vec![FloatComplex::new(1.0, 0.0)];
        let b = vec![FloatComplex::new(5.0, 0.0)];
        let z = Complex::new(5.0, 0.0);
        let r = 1.0_f64;
        let (_, again) = newton_eval(&a, &b, &z, &r);
        assert!(!again);
    }
}
