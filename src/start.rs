use crate::scalar::{ComplexField, RealField};

/// Classical Aberth starting estimate: place the n initial approximations on
/// a circle enclosing every root, spaced evenly in angle. This is the
/// concrete instantiation of the distilled spec's external `secular_Xstart`
/// collaborator.
///
/// The radius is `max_i |b_i| + sum_j |a_j|`: any root x with `|x|` beyond
/// that bound has `|x - b_i| >= |x| - |b_i| >= sum_j |a_j|` for every i,
/// which keeps `sum_i |a_i/(x-b_i)|` under 1 and so S(x) away from zero — a
/// circle strictly outside all roots, not just tracking the largest
/// coefficient, which matters for degenerate cases like a single dominant
/// b_i sitting exactly on the unextended circle.
pub fn seed<K: ComplexField>(a: &[K], b: &[K], n: usize) -> Vec<K> {
    if n == 0 {
        return Vec::new();
    }
    let max_b = b
        .iter()
        .map(|c| c.modulus().to_f64_approx().abs())
        .fold(0.0_f64, f64::max);
    let sum_a: f64 = a.iter().map(|c| c.modulus().to_f64_approx().abs()).sum();
    let scale = (max_b + sum_a).max(1.0);
    // Offset by half a step so a vertex never lands exactly on the positive
    // real axis, avoiding an exact coincidence with a real-axis b_i.
    (0..n)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * (i as f64 + 0.5) / (n as f64);
            K::from_f64(scale * theta.cos(), scale * theta.sin())
        })
        .collect()
}

/// A Cauchy-style inclusion bound `r_i = sum_{j != i} |a_j| / |z_i - b_j|`,
/// used to (re)populate radii after seeding and after a successful
/// regeneration (the distilled spec's external `secular_set_radii`).
///
/// Clamped to be no smaller than machine epsilon scaled by `|z_i|` (floored
/// at 1.0, so a root seeded at the origin still gets a meaningful clamp):
/// a vacuous sum (n == 1) or a sum over `b_j` that all happen to coincide
/// with `roots[i]` would otherwise leave the radius at exactly zero, which
/// reads as immediate convergence to `should_stop` no matter how far `z_i`
/// actually sits from the true root.
pub fn set_radii<K: ComplexField>(a: &[K], b: &[K], roots: &[K]) -> Vec<K::Real> {
    let n = roots.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let mut acc = K::Real::zero();
        for j in 0..n {
            if j == i {
                continue;
            }
            let diff = roots[i].sub(&b[j]);
            if diff.is_zero() {
                continue;
            }
            let term = a[j].modulus().div(&diff.modulus());
            acc = acc.add(&term);
        }
        let z_mod = roots[i].modulus().to_f64_approx().abs().max(1.0);
        let floor = K::Real::from_f64(z_mod * f64::EPSILON);
        if !acc.gt(&floor) {
            acc = floor;
        }
        out.push(acc);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::FloatComplex;

    #[test]
    fn seed_spreads_points_around_a_circle() {
        let a = vec![FloatComplex::new(1.0, 0.0), FloatComplex::new(1.0, 0.0)];
        let b = vec![FloatComplex::new(0.0, 0.0), FloatComplex::new(2.0, 0.0)];
        let roots = seed(&a, &b, 2);
        assert_eq!(roots.len(), 2);
        assert_ne!(roots[0], roots[1]);
    }

    #[test]
    fn set_radii_is_nonnegative() {
        let a = vec![FloatComplex::new(1.0, 0.0), FloatComplex::new(1.0, 0.0)];
        let b = vec![FloatComplex::new(0.0, 0.0), FloatComplex::new(2.0, 0.0)];
        let roots = vec![FloatComplex::new(-0.5, 0.0), FloatComplex::new(2.5, 0.0)];
        let radii = set_radii(&a, &b, &roots);
        for r in radii {
            assert!(r >= 0.0);
        }
    }
}
