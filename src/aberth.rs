use crate::scalar::ComplexField;

/// The Aberth deflation sum `sum_{j != i} 1/(z_i - z_j)`. Coincident
/// approximations (`z_i == z_j` for `j != i`) contribute nothing rather than
/// diverging — they are a transient artifact of clustered roots, not a
/// condition worth propagating as NaN.
pub fn aberth_sum<K: ComplexField>(roots: &[K], i: usize) -> K {
    let mut sum = K::zero();
    for (j, zj) in roots.iter().enumerate() {
        if j == i {
            continue;
        }
        let diff = roots[i].sub(zj);
        if diff.is_zero() {
            continue;
        }
        sum = sum.add(&diff.inv());
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::FloatComplex;

    #[test]
    fn skips_self_and_coincident_roots() {
        let roots = vec![
            FloatComplex::new(0.0, 0.0),
            FloatComplex::new(0.0, 0.0),
            FloatComplex::new(1.0, 0.0),
        ];
        let sum = aberth_sum(&roots, 0);
        // self (j=0) skipped, j=1 coincides with root 0 so also skipped,
        // only j=2 contributes: 1/(0-1) = -1
        assert!((sum.re + 1.0).abs() < 1e-12);
        assert!(sum.im.abs() < 1e-12);
    }
}
