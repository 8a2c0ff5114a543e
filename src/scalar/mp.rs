//! Arbitrary-precision complex kind, backed by `rug`'s GMP/MPFR/MPC
//! bindings. The working precision is global to a solve (see §5 of the
//! design notes): it lives in a thread-local cell that the driver updates
//! whenever it raises `mpwp`, and every constructor that doesn't derive its
//! precision from an existing value reads it from there.

use std::cell::Cell;

use rug::ops::Pow;
use rug::Complex;
use rug::Float;

use super::dpe::DpeComplex;
use super::{ComplexField, DpeReal, RealField};

const DEFAULT_MP_PRECISION: u32 = 128;

thread_local! {
    static MP_PRECISION: Cell<u32> = Cell::new(DEFAULT_MP_PRECISION);
}

/// Sets the working precision (in bits) used by all `MpComplex` values
/// constructed from this point on. Called by the driver before iterating in
/// the mp phase and again every time it raises precision.
pub fn set_working_precision(bits: u32) {
    MP_PRECISION.with(|p| p.set(bits.max(2)));
}

pub fn working_precision() -> u32 {
    MP_PRECISION.with(|p| p.get())
}

#[derive(Clone, Debug)]
pub struct MpComplex(pub Complex);

impl MpComplex {
    pub fn from_dpe(d: &DpeComplex) -> Self {
        let prec = working_precision();
        let re = shift_by_exponent(d.re, d.exponent, prec);
        let im = shift_by_exponent(d.im, d.exponent, prec);
        MpComplex(Complex::with_val(prec, (re, im)))
    }

    /// Lossy conversion to native doubles, for reporting final root
    /// approximations out of the mp kind.
    pub fn to_f64_approx(&self) -> (f64, f64) {
        (self.0.real().to_f64(), self.0.imag().to_f64())
    }
}

fn shift_by_exponent(mantissa: f64, exponent: i64, prec: u32) -> Float {
    let base = Float::with_val(prec, mantissa);
    if exponent == 0 {
        base
    } else if exponent > 0 {
        base << clamp_shift(exponent)
    } else {
        base >> clamp_shift(-exponent)
    }
}

fn clamp_shift(e: i64) -> u32 {
    e.min(i32::MAX as i64) as u32
}

fn dpe_from_float(f: &Float) -> DpeReal {
    if f.is_zero() {
        return DpeReal::zero();
    }
    let exp = f.get_exp().unwrap_or(0) as i64;
    let shift = clamp_shift(exp.abs());
    let significand = if exp >= 0 {
        (f.clone() >> shift).to_f64()
    } else {
        (f.clone() << shift).to_f64()
    };
    DpeReal::new(significand, exp)
}

impl ComplexField for MpComplex {
    type Real = DpeReal;

    fn zero() -> Self {
        MpComplex(Complex::new(working_precision()))
    }
    fn one() -> Self {
        MpComplex(Complex::with_val(working_precision(), 1.0))
    }
    fn is_zero(&self) -> bool {
        self.0.real().is_zero() && self.0.imag().is_zero()
    }
    fn from_f64(re: f64, im: f64) -> Self {
        MpComplex(Complex::with_val(working_precision(), (re, im)))
    }
    fn add(&self, other: &Self) -> Self {
        MpComplex(Complex::with_val(working_precision(), &self.0 + &other.0))
    }
    fn sub(&self, other: &Self) -> Self {
        MpComplex(Complex::with_val(working_precision(), &self.0 - &other.0))
    }
    fn mul(&self, other: &Self) -> Self {
        MpComplex(Complex::with_val(working_precision(), &self.0 * &other.0))
    }
    fn div(&self, other: &Self) -> Self {
        MpComplex(Complex::with_val(working_precision(), &self.0 / &other.0))
    }
    fn inv(&self) -> Self {
        let prec = working_precision();
        let one = Complex::with_val(prec, 1.0);
        MpComplex(Complex::with_val(prec, one / &self.0))
    }
    fn modulus(&self) -> DpeReal {
        let prec = working_precision();
        let re = self.0.real();
        let im = self.0.imag();
        let norm_sq = Float::with_val(prec, re.clone().pow(2u32) + im.clone().pow(2u32));
        dpe_from_float(&norm_sq.sqrt())
    }
}
