use crate::scalar::ComplexField;

/// Rebuilds `a` in place after `b` has been overwritten with fresh root
/// approximations, per the distilled spec's regeneration formula:
///
///   a_i = ( (sum_j old_a_j / (b_i - old_b_j)) - 1 ) * prod_j (b_i - old_b_j) / prod_{j!=i} (b_i - b_j)
///
/// `new_b` is the caller's choice of new `b_i` (the current root estimates).
/// On success, `a` and `b` are updated and this returns `true`. If any
/// `b_i - old_b_j` is exactly zero the whole operation is aborted: both `a`
/// and `b` are restored to their pre-call values and this returns `false`,
/// leaving coefficient state byte-identical to before the call.
pub fn regenerate<K: ComplexField>(a: &mut [K], b: &mut [K], new_b: &[K]) -> bool {
    let n = a.len();
    debug_assert_eq!(b.len(), n);
    debug_assert_eq!(new_b.len(), n);
    if n == 0 {
        return true;
    }

    let old_a: Vec<K> = a.to_vec();
    let old_b: Vec<K> = b.to_vec();

    for i in 0..n {
        b[i] = new_b[i].clone();
    }

    for i in 0..n {
        let mut sec_ev = K::zero();
        let mut prod_b = K::one();
        for j in 0..n {
            let btmp = b[i].sub(&old_b[j]);
            if btmp.is_zero() {
                a.clone_from_slice(&old_a);
                b.clone_from_slice(&old_b);
                tracing::warn!(index = i, "cannot regenerate coefficients, reusing old ones");
                return false;
            }
            let ctmp = btmp.inv().mul(&old_a[j]);
            sec_ev = sec_ev.add(&ctmp);
            prod_b = prod_b.mul(&btmp);
            if i != j {
                let denom = b[i].sub(&b[j]);
                prod_b = prod_b.div(&denom);
            }
        }
        sec_ev = sec_ev.sub(&K::one());
        a[i] = sec_ev.mul(&prod_b);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::FloatComplex;

    #[test]
    fn regenerate_is_idempotent_without_intervening_iteration() {
        let mut a = vec![FloatComplex::new(1.0, 0.0), FloatComplex::new(1.0, 0.0)];
        let mut b = vec![FloatComplex::new(0.0, 0.0), FloatComplex::new(2.0, 0.0)];
        let new_b = vec![FloatComplex::new(0.1, 0.0), FloatComplex::new(1.9, 0.0)];

        assert!(regenerate(&mut a, &mut b, &new_b));
        let a_after_first = a.clone();
        let b_after_first = b.clone();

        assert!(regenerate(&mut a, &mut b, &new_b));
        assert_eq!(a, a_after_first);
        assert_eq!(b, b_after_first);
    }

    #[test]
    fn aborts_and_restores_on_singularity() {
        let mut a = vec![FloatComplex::new(1.0, 0.0), FloatComplex::new(1.0, 0.0)];
        let mut b = vec![FloatComplex::new(0.0, 0.0), FloatComplex::new(2.0, 0.0)];
        let a_before = a.clone();
        let b_before = b.clone();

        // new_b[0] coincides exactly with old b[0], forcing b_i - old_b_j == 0.
        let new_b = vec![FloatComplex::new(0.0, 0.0), FloatComplex::new(3.0, 0.0)];
        let ok = regenerate(&mut a, &mut b, &new_b);

        assert!(!ok);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }
}
