// src/fixed/twiddle.rs

use super::types::{ComplexQ14, Q14};
use crate::common::FFT_SIZE;
use core::f64::consts::PI;

/// `e^(-j2πk/32)` for k = 0..31 at Q1.14: cosine in the real slot, negative
/// sine in the imaginary slot. Existing verification vectors depend on these
/// exact bits.
pub const TWIDDLES: [ComplexQ14; FFT_SIZE] = [
    ComplexQ14::from_bits(0x4000, 0x0000),
    ComplexQ14::from_bits(0x3EC5, -0x0C7C),
    ComplexQ14::from_bits(0x3B21, -0x187E),
    ComplexQ14::from_bits(0x3537, -0x238E),
    ComplexQ14::from_bits(0x2D41, -0x2D41),
    ComplexQ14::from_bits(0x238E, -0x3537),
    ComplexQ14::from_bits(0x187E, -0x3B21),
    ComplexQ14::from_bits(0x0C7C, -0x3EC5),
    ComplexQ14::from_bits(0x0000, -0x4000),
    ComplexQ14::from_bits(-0x0C7C, -0x3EC5),
    ComplexQ14::from_bits(-0x187E, -0x3B21),
    ComplexQ14::from_bits(-0x238E, -0x3537),
    ComplexQ14::from_bits(-0x2D41, -0x2D41),
    ComplexQ14::from_bits(-0x3537, -0x238E),
    ComplexQ14::from_bits(-0x3B21, -0x187E),
    ComplexQ14::from_bits(-0x3EC5, -0x0C7C),
    ComplexQ14::from_bits(-0x4000, 0x0000),
    ComplexQ14::from_bits(-0x3EC5, 0x0C7C),
    ComplexQ14::from_bits(-0x3B21, 0x187E),
    ComplexQ14::from_bits(-0x3537, 0x238E),
    ComplexQ14::from_bits(-0x2D41, 0x2D41),
    ComplexQ14::from_bits(-0x238E, 0x3537),
    ComplexQ14::from_bits(-0x187E, 0x3B21),
    ComplexQ14::from_bits(-0x0C7C, 0x3EC5),
    ComplexQ14::from_bits(0x0000, 0x4000),
    ComplexQ14::from_bits(0x0C7C, 0x3EC5),
    ComplexQ14::from_bits(0x187E, 0x3B21),
    ComplexQ14::from_bits(0x238E, 0x3537),
    ComplexQ14::from_bits(0x2D41, 0x2D41),
    ComplexQ14::from_bits(0x3537, 0x238E),
    ComplexQ14::from_bits(0x3B21, 0x187E),
    ComplexQ14::from_bits(0x3EC5, 0x0C7C),
];

/// Twiddle factor `W_32^index`. The index wraps modulo 32.
#[inline]
pub const fn twiddle(index: usize) -> ComplexQ14 {
    TWIDDLES[index % FFT_SIZE]
}

/// Recomputes the twiddle table from its defining formula.
pub fn precompute_twiddles(twiddles: &mut [ComplexQ14; FFT_SIZE]) {
    for (k, w) in twiddles.iter_mut().enumerate() {
        let angle = -2.0 * PI * (k as f64) / (FFT_SIZE as f64);
        let (sin, cos) = sin_cos(angle);
        *w = ComplexQ14::new(Q14::from_f64(cos), Q14::from_f64(sin));
    }
}

fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return angle.sin_cos();

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}
