use num_complex::Complex;

use super::{ComplexField, RealField};

/// The native double-precision complex kind.
pub type FloatComplex = Complex<f64>;

impl RealField for f64 {
    fn zero() -> Self {
        0.0
    }
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
    fn sentinel_large() -> Self {
        f64::MAX
    }
    fn pow2(exp: i32) -> Self {
        2f64.powi(exp)
    }
    fn from_f64(v: f64) -> Self {
        v
    }
    fn to_f64_approx(&self) -> f64 {
        *self
    }
    fn add(&self, other: &Self) -> Self {
        self + other
    }
    fn div(&self, other: &Self) -> Self {
        self / other
    }
    fn gt(&self, other: &Self) -> bool {
        self > other
    }
}

impl ComplexField for FloatComplex {
    type Real = f64;

    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }
    fn one() -> Self {
        Complex::new(1.0, 0.0)
    }
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
    fn from_f64(re: f64, im: f64) -> Self {
        Complex::new(re, im)
    }
    fn add(&self, other: &Self) -> Self {
        self + other
    }
    fn sub(&self, other: &Self) -> Self {
        self - other
    }
    fn mul(&self, other: &Self) -> Self {
        self * other
    }
    fn div(&self, other: &Self) -> Self {
        self / other
    }
    fn inv(&self) -> Self {
        Complex::inv(self)
    }
    fn modulus(&self) -> f64 {
        self.norm()
    }
}
