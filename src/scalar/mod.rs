//! Capability traits that let the iteration kernel, Newton evaluator, Aberth
//! accumulator and regeneration engine be written once and instantiated over
//! three numeric kinds: native double, dynamic-exponent double (`dpe`), and
//! arbitrary precision (`mp`).

pub mod dpe;
pub mod float;
pub mod mp;

use std::fmt::Debug;

/// The real-valued counterpart of a [`ComplexField`], used for inclusion radii.
pub trait RealField: Clone + Debug {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
    /// A sentinel used to initialize radii before the first iteration packet.
    fn sentinel_large() -> Self;
    /// `2^exp`, exactly representable in every kind (including far outside
    /// the native double exponent range for the dpe kind).
    fn pow2(exp: i32) -> Self;
    fn from_f64(v: f64) -> Self;
    /// Lossy conversion used only for heuristics (seeding, convergence floors).
    fn to_f64_approx(&self) -> f64;
    fn add(&self, other: &Self) -> Self;
    fn div(&self, other: &Self) -> Self;
    fn gt(&self, other: &Self) -> bool;
    fn le(&self, other: &Self) -> bool {
        !self.gt(other)
    }
}

/// A complex scalar kind: native double, dpe, or mp.
///
/// Implementors own whatever representation they like (mp values own a
/// heap-allocated mantissa at the ambient working precision); `assign` is the
/// in-place update hook mp can specialize to avoid reallocating, though the
/// default just clones.
pub trait ComplexField: Clone + Debug {
    type Real: RealField;

    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;
    fn from_f64(re: f64, im: f64) -> Self;

    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
    fn div(&self, other: &Self) -> Self;
    fn inv(&self) -> Self;
    fn modulus(&self) -> Self::Real;

    fn assign(&mut self, other: &Self) {
        *self = other.clone();
    }
}

pub use dpe::{DpeComplex, DpeReal};
pub use float::FloatComplex;
pub use mp::MpComplex;
