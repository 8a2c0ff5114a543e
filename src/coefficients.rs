use crate::scalar::ComplexField;

/// The (a, b) pair of a secular equation `S(x) = sum a_i/(x - b_i) - 1`, held
/// in a single numeric kind. `SolverState` keeps one of these per kind, since
/// the distilled spec requires all three to coexist (only one is "live").
#[derive(Clone, Debug)]
pub struct CoefficientArrays<K> {
    pub a: Vec<K>,
    pub b: Vec<K>,
}

impl<K: ComplexField> CoefficientArrays<K> {
    pub fn zeros(n: usize) -> Self {
        Self {
            a: vec![K::zero(); n],
            b: vec![K::zero(); n],
        }
    }
}
