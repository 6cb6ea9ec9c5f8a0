use super::fixed::Fixed;
use core::fmt;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use num_complex::{Complex, Complex64};

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ComplexFixed<const FRAC: u32> {
    pub re: Fixed<FRAC>,
    pub im: Fixed<FRAC>,
}

/// Complex Q1.14 sample, the unit of data the transform moves around.
pub type ComplexQ14 = ComplexFixed<14>;

impl<const FRAC: u32> ComplexFixed<FRAC> {
    pub const ZERO: Self = Self::from_bits(0, 0);

    pub const fn new(re: Fixed<FRAC>, im: Fixed<FRAC>) -> Self {
        Self { re, im }
    }

    /// Builds a sample from raw two's-complement components.
    pub const fn from_bits(re: i16, im: i16) -> Self {
        Self {
            re: Fixed::from_bits(re),
            im: Fixed::from_bits(im),
        }
    }

    pub fn from_f64(re: f64, im: f64) -> Self {
        Self::new(Fixed::from_f64(re), Fixed::from_f64(im))
    }

    /// Returns the complex conjugate (a - bi)
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Scales both real and imaginary parts by 0.5 (right shift by 1).
    #[inline]
    pub const fn scale_half(self) -> Self {
        Self::new(self.re.scale_half(), self.im.scale_half())
    }

    /// (self + rhs) >> 1 per component, summed at 32 bits.
    #[inline]
    pub const fn halving_add(self, rhs: Self) -> Self {
        Self::new(self.re.halving_add(rhs.re), self.im.halving_add(rhs.im))
    }

    /// (self - rhs) >> 1 per component, subtracted at 32 bits.
    #[inline]
    pub const fn halving_sub(self, rhs: Self) -> Self {
        Self::new(self.re.halving_sub(rhs.re), self.im.halving_sub(rhs.im))
    }

    /// re² + im² in raw integer units. Cannot overflow: the worst case is 2^31.
    #[inline]
    pub fn norm_sqr(self) -> u32 {
        let re = self.re.to_bits() as i32;
        let im = self.im.to_bits() as i32;
        (re * re) as u32 + (im * im) as u32
    }

    pub fn to_complex64(self) -> Complex64 {
        Complex64::new(self.re.to_f64(), self.im.to_f64())
    }
}

impl<const FRAC: u32> From<ComplexFixed<FRAC>> for Complex<i16> {
    fn from(value: ComplexFixed<FRAC>) -> Self {
        Complex::new(value.re.to_bits(), value.im.to_bits())
    }
}

impl<const FRAC: u32> From<Complex<i16>> for ComplexFixed<FRAC> {
    fn from(value: Complex<i16>) -> Self {
        Self::from_bits(value.re, value.im)
    }
}

// Addition and subtraction are 16-bit and wrap, like the adders they model.
impl<const FRAC: u32> Add for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<const FRAC: u32> AddAssign for ComplexFixed<FRAC> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl<const FRAC: u32> Sub for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<const FRAC: u32> SubAssign for ComplexFixed<FRAC> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

// Multiplication: ComplexFixed<F1> * ComplexFixed<F2> -> ComplexFixed<F1>
//
// Both cross sums are accumulated at 32 bits before a single arithmetic shift
// by F2, which keeps bits [F2+15:F2] of the accumulator. Nothing rounds or
// saturates.
impl<const F1: u32, const F2: u32> Mul<ComplexFixed<F2>> for ComplexFixed<F1> {
    type Output = ComplexFixed<F1>;

    #[inline]
    fn mul(self, rhs: ComplexFixed<F2>) -> Self::Output {
        let (ar, ai) = (self.re.to_bits() as i32, self.im.to_bits() as i32);
        let (br, bi) = (rhs.re.to_bits() as i32, rhs.im.to_bits() as i32);

        // (ac - bd)
        let re = ar.wrapping_mul(br).wrapping_sub(ai.wrapping_mul(bi));
        // (ad + bc)
        let im = ar.wrapping_mul(bi).wrapping_add(ai.wrapping_mul(br));

        ComplexFixed::from_bits((re >> F2) as i16, (im >> F2) as i16)
    }
}

impl<const FRAC: u32> fmt::Debug for ComplexFixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type C = ComplexQ14;

    #[test]
    fn test_addition_with_negative() {
        // (0.5 + 0.25i) + (-0.25 - 0.5i) = (0.25 - 0.25i)
        let a = C::from_f64(0.5, 0.25);
        let b = C::from_f64(-0.25, -0.5);
        assert_eq!(a + b, C::from_f64(0.25, -0.25));
    }

    #[test]
    fn test_add_assign_wraps() {
        let mut a = C::from_bits(0x4000, -0x4000);
        a += C::from_bits(0x4000, -0x4001);
        assert_eq!(a, C::from_bits(i16::MIN, i16::MAX));
    }

    #[test]
    fn test_subtraction_resulting_negative() {
        let a = C::from_f64(0.25, 0.5);
        let b = C::from_f64(0.75, 1.25);
        assert_eq!(a - b, C::from_f64(-0.5, -0.75));

        let mut c = a;
        c -= b;
        assert_eq!(c, a - b);
    }

    #[test]
    fn test_halving_add_sub() {
        let a = C::from_bits(0x4000, 0x4000);
        let b = C::from_bits(0x4000, -0x4000);
        assert_eq!(a.halving_add(b), C::from_bits(0x4000, 0));
        assert_eq!(a.halving_sub(b), C::from_bits(0, 0x4000));
    }

    #[test]
    fn test_multiplication_by_one() {
        let a = C::from_bits(12345, -6789);
        let one = C::from_bits(0x4000, 0);
        assert_eq!(a * one, a);
    }

    #[test]
    fn test_multiplication_by_minus_j() {
        // (0.5 + 0.25i) * (-i) = 0.25 - 0.5i
        let a = C::from_f64(0.5, 0.25);
        let minus_j = C::from_bits(0, -0x4000);
        assert_eq!(a * minus_j, C::from_f64(0.25, -0.5));
    }

    #[test]
    fn test_multiplication_sums_before_shift() {
        // Each partial product alone would truncate to 0, their sum does not.
        let a = C::from_bits(1, 1);
        let b = C::from_bits(0x2000, 0x2000);
        // re = 0x2000 - 0x2000 = 0, im = 0x4000 >> 14 = 1
        assert_eq!(a * b, C::from_bits(0, 1));
    }

    #[test]
    fn test_multiplication_truncates_toward_negative_infinity() {
        let a = C::from_bits(-1, 0);
        let half = C::from_bits(0x2000, 0);
        assert_eq!(a * half, C::from_bits(-1, 0));
    }

    #[test]
    fn test_multiplication_extreme_operands_wrap() {
        // (-2 - 2i)² = 8i. The imaginary accumulator reaches 2^31, wraps to
        // i32::MIN, and bits [29:14] of that are zero.
        let a = C::from_bits(i16::MIN, i16::MIN);
        assert_eq!(a * a, C::ZERO);
    }

    #[test]
    fn test_conj() {
        let a = C::from_f64(0.5, 0.25);
        assert_eq!(a.conj(), C::from_f64(0.5, -0.25));
        assert_eq!(C::from_f64(0.5, 0.0).conj(), C::from_f64(0.5, 0.0));
    }

    #[test]
    fn test_scale_half_negative() {
        let a = C::from_bits(-4, -7);
        assert_eq!(a.scale_half(), C::from_bits(-2, -4));
    }

    #[test]
    fn test_norm_sqr() {
        assert_eq!(C::from_bits(3, 4).norm_sqr(), 25);
        assert_eq!(C::from_bits(i16::MIN, i16::MIN).norm_sqr(), 1 << 31);
    }

    #[test]
    fn test_num_complex_conversions() {
        let a = C::from_bits(0x4000, -0x2000);
        let raw: Complex<i16> = a.into();
        assert_eq!(raw, Complex::new(0x4000, -0x2000));
        assert_eq!(C::from(raw), a);

        let z = a.to_complex64();
        assert_eq!(z, Complex64::new(1.0, -0.5));
    }
}
