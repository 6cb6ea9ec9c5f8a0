// src/fixed/types/fixed.rs

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Signed 16-bit fixed-point value with FRAC fractional bits.
///
/// Arithmetic follows plain hardware adders: addition and subtraction wrap
/// on overflow, multiplication truncates. Nothing saturates.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fixed<const FRAC: u32>(i16);

/// Q1.14: the sample format of the transform.
pub type Q14 = Fixed<14>;

impl<const FRAC: u32> Fixed<FRAC> {
    pub const ZERO: Self = Self(0);

    /// 1.0 in this format. Only representable while FRAC < 15.
    pub const ONE: Self = Self(1 << FRAC);

    /// Creates a Fixed from the raw integer value (without shift).
    #[inline]
    pub const fn from_bits(bits: i16) -> Self {
        Self(bits)
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i16 {
        self.0
    }

    /// Converts an f64 to Fixed, rounding to nearest.
    /// Values outside the 16-bit range clamp to the nearest bound.
    pub fn from_f64(value: f64) -> Self {
        let scaling_factor = (1u64 << FRAC) as f64;
        Self(round(value * scaling_factor) as i16)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << FRAC) as f64
    }

    /// Scales the value by 0.5 (arithmetic shift right by 1).
    #[inline]
    pub const fn scale_half(self) -> Self {
        Self(self.0 >> 1)
    }

    /// (self + rhs) / 2, computed without intermediate overflow.
    #[inline]
    pub const fn halving_add(self, rhs: Self) -> Self {
        Self(((self.0 as i32 + rhs.0 as i32) >> 1) as i16)
    }

    /// (self - rhs) / 2, computed without intermediate overflow.
    #[inline]
    pub const fn halving_sub(self, rhs: Self) -> Self {
        Self(((self.0 as i32 - rhs.0 as i32) >> 1) as i16)
    }
}

fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

impl<const FRAC: u32> Add for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl<const FRAC: u32> AddAssign for Fixed<FRAC> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const FRAC: u32> Sub for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl<const FRAC: u32> SubAssign for Fixed<FRAC> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const FRAC: u32> Neg for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

// Fixed<F1> * Fixed<F2> -> Fixed<F1>: the 32-bit product drops F2 fractional bits.
impl<const F1: u32, const F2: u32> Mul<Fixed<F2>> for Fixed<F1> {
    type Output = Fixed<F1>;

    #[inline]
    fn mul(self, rhs: Fixed<F2>) -> Self::Output {
        let product = (self.0 as i32).wrapping_mul(rhs.0 as i32);
        Fixed((product >> F2) as i16)
    }
}

impl<const FRAC: u32> fmt::Display for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl<const FRAC: u32> fmt::Debug for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Decimal value plus raw bits, e.g. "0.500000 (raw: 0x2000)"
        write!(f, "{:.6} (raw: {:#06x})", self.to_f64(), self.0 as u16)
    }
}
