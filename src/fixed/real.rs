use super::buffer::Block;
use super::complex::Fft32;
use super::types::{ComplexQ14, Q14};
use crate::common::FFT_SIZE;
use crate::config::FftConfig;

/// Number of distinct bins of a real-input 32-point transform (DC..=Nyquist).
pub const HALF_BINS: usize = FFT_SIZE / 2 + 1;

/// Bins 0..=16 of a real-input transform. Bins 17..31 are the conjugates of
/// bins 15..1 and carry no extra information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfSpectrum(pub [ComplexQ14; HALF_BINS]);

impl HalfSpectrum {
    pub fn bins(&self) -> &[ComplexQ14; HALF_BINS] {
        &self.0
    }

    /// Magnitude squared per bin: the feature vector handed to a classifier.
    pub fn power(&self) -> [u32; HALF_BINS] {
        self.0.map(ComplexQ14::norm_sqr)
    }
}

/// Forward transform of 32 real samples (audio frames).
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFft32 {
    inner: Fft32,
}

impl RealFft32 {
    pub fn new(config: FftConfig) -> Self {
        Self {
            inner: Fft32::new(config),
        }
    }

    pub fn process(&self, input: &[Q14; FFT_SIZE]) -> HalfSpectrum {
        let block: Block = input.map(|re| ComplexQ14::new(re, Q14::ZERO));
        let spectrum = self.inner.transform(&block);
        HalfSpectrum(core::array::from_fn(|k| spectrum[k]))
    }
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
