//! Dynamic-exponent double precision ("dpe"): a mantissa in native `f64`
//! paired with an `i64` exponent, extending the representable range far
//! beyond a native double while keeping mantissa arithmetic cheap.
//!
//! The normalized form keeps `max(|re|, |im|)` (or `|mantissa|` for the real
//! kind) in `[0.5, 1.0)`, mirroring the convention used by dynamic-exponent
//! representations in arbitrary-precision libraries.

use super::{ComplexField, RealField};

const ALIGN_CUTOFF: i64 = 100;

fn normalize_real(mut m: f64, mut e: i64) -> (f64, i64) {
    if m == 0.0 {
        return (0.0, 0);
    }
    let sign = m.is_sign_negative();
    let mut a = m.abs();
    while a >= 1.0 {
        a /= 2.0;
        e += 1;
    }
    while a < 0.5 {
        a *= 2.0;
        e -= 1;
    }
    m = if sign { -a } else { a };
    (m, e)
}

fn normalize_complex(mut re: f64, mut im: f64, mut e: i64) -> (f64, f64, i64) {
    if re == 0.0 && im == 0.0 {
        return (0.0, 0.0, 0);
    }
    loop {
        let m = re.abs().max(im.abs());
        if m >= 1.0 {
            re /= 2.0;
            im /= 2.0;
            e += 1;
        } else if m < 0.5 {
            re *= 2.0;
            im *= 2.0;
            e -= 1;
        } else {
            break;
        }
    }
    (re, im, e)
}

/// A dynamic-exponent non-negative real, used for inclusion radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DpeReal {
    pub mantissa: f64,
    pub exponent: i64,
}

impl DpeReal {
    pub fn new(mantissa: f64, exponent: i64) -> Self {
        let (m, e) = normalize_real(mantissa, exponent);
        Self {
            mantissa: m,
            exponent: e,
        }
    }
}

impl RealField for DpeReal {
    fn zero() -> Self {
        DpeReal {
            mantissa: 0.0,
            exponent: 0,
        }
    }
    fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }
    fn sentinel_large() -> Self {
        DpeReal::new(1.0, 1 << 30)
    }
    fn pow2(exp: i32) -> Self {
        DpeReal::new(1.0, exp as i64)
    }
    fn from_f64(v: f64) -> Self {
        DpeReal::new(v, 0)
    }
    fn to_f64_approx(&self) -> f64 {
        if self.exponent.unsigned_abs() > 1000 {
            if self.exponent > 0 {
                f64::INFINITY.copysign(self.mantissa)
            } else {
                0.0
            }
        } else {
            self.mantissa * 2f64.powi(self.exponent as i32)
        }
    }
    fn add(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let (big, small) = if self.exponent >= other.exponent {
            (self, other)
        } else {
            (other, self)
        };
        let diff = big.exponent - small.exponent;
        if diff > ALIGN_CUTOFF {
            return big.clone();
        }
        let shifted_small = small.mantissa / 2f64.powi(diff as i32);
        DpeReal::new(big.mantissa + shifted_small, big.exponent)
    }
    fn div(&self, other: &Self) -> Self {
        if self.is_zero() {
            return DpeReal::zero();
        }
        DpeReal::new(self.mantissa / other.mantissa, self.exponent - other.exponent)
    }
    fn gt(&self, other: &Self) -> bool {
        if self.is_zero() {
            return false;
        }
        if other.is_zero() {
            return true;
        }
        if self.exponent != other.exponent {
            self.exponent > other.exponent
        } else {
            self.mantissa > other.mantissa
        }
    }
}

/// A dynamic-exponent complex number: `(re, im) * 2^exponent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DpeComplex {
    pub re: f64,
    pub im: f64,
    pub exponent: i64,
}

impl DpeComplex {
    pub fn new(re: f64, im: f64, exponent: i64) -> Self {
        let (re, im, e) = normalize_complex(re, im, exponent);
        Self {
            re,
            im,
            exponent: e,
        }
    }

    fn neg(&self) -> Self {
        DpeComplex {
            re: -self.re,
            im: -self.im,
            exponent: self.exponent,
        }
    }

    /// Lossy conversion to native doubles, saturating to infinity when the
    /// exponent is far outside the double range.
    pub fn to_f64_approx(&self) -> (f64, f64) {
        if self.exponent.unsigned_abs() > 1000 {
            let re = if self.re == 0.0 { 0.0 } else { f64::INFINITY.copysign(self.re) };
            let im = if self.im == 0.0 { 0.0 } else { f64::INFINITY.copysign(self.im) };
            return (re, im);
        }
        let scale = 2f64.powi(self.exponent as i32);
        (self.re * scale, self.im * scale)
    }
}

impl ComplexField for DpeComplex {
    type Real = DpeReal;

    fn zero() -> Self {
        DpeComplex {
            re: 0.0,
            im: 0.0,
            exponent: 0,
        }
    }
    fn one() -> Self {
        DpeComplex::new(1.0, 0.0, 0)
    }
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
    fn from_f64(re: f64, im: f64) -> Self {
        DpeComplex::new(re, im, 0)
    }
    fn add(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let (big, small) = if self.exponent >= other.exponent {
            (self, other)
        } else {
            (other, self)
        };
        let diff = big.exponent - small.exponent;
        if diff > ALIGN_CUTOFF {
            return big.clone();
        }
        let scale = 2f64.powi(-(diff as i32));
        DpeComplex::new(
            big.re + small.re * scale,
            big.im + small.im * scale,
            big.exponent,
        )
    }
    fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }
    fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return DpeComplex::zero();
        }
        let re = self.re * other.re - self.im * other.im;
        let im = self.re * other.im + self.im * other.re;
        DpeComplex::new(re, im, self.exponent + other.exponent)
    }
    fn div(&self, other: &Self) -> Self {
        // self / other = self * conj(other) / |other|^2, done in mantissa
        // space with exponents tracked separately to avoid overflow.
        let denom_mantissa = other.re * other.re + other.im * other.im;
        let denom_exp = 2 * other.exponent;
        let num_re = self.re * other.re + self.im * other.im;
        let num_im = self.im * other.re - self.re * other.im;
        let num_exp = self.exponent + other.exponent;
        DpeComplex::new(
            num_re / denom_mantissa,
            num_im / denom_mantissa,
            num_exp - denom_exp,
        )
    }
    fn inv(&self) -> Self {
        Self::one().div(self)
    }
    fn modulus(&self) -> DpeReal {
        DpeReal::new(self.re.hypot(self.im), self.exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_plain_values() {
        let z = DpeComplex::from_f64(3.0, 4.0);
        let m = ComplexField::modulus(&z);
        assert!((m.to_f64_approx() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn handles_exponents_far_outside_double_range() {
        // 2^2000, a value that overflows a native f64.
        let huge = DpeReal::new(1.0, 2000);
        assert!(huge.to_f64_approx().is_infinite());
        let doubled = huge.add(&huge);
        assert!(doubled.gt(&huge));
    }

    #[test]
    fn inv_round_trips() {
        let z = DpeComplex::from_f64(2.0, -1.0);
        let inv = ComplexField::inv(&z);
        let back = ComplexField::mul(&z, &inv);
        assert!((back.re - 1.0).abs() < 1e-9);
        assert!(back.im.abs() < 1e-9);
    }

    #[test]
    fn div_by_self_is_one() {
        let z = DpeComplex::from_f64(7.0, 3.0);
        let ratio = ComplexField::div(&z, &z);
        assert!((ratio.re - 1.0).abs() < 1e-9);
        assert!(ratio.im.abs() < 1e-9);
    }

    #[test]
    fn addition_aligns_exponents() {
        let a = DpeReal::new(1.0, 10);
        let b = DpeReal::new(1.0, -400);
        // b is negligible next to a at this magnitude gap.
        let sum = a.add(&b);
        assert_eq!(sum.exponent, a.exponent);
    }
}
