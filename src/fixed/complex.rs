use super::buffer::{Block, PingPong};
use super::core::{load_bit_reversed, radix_2_dit_fft32_core};
use super::spectrum::Spectrum;
use super::types::ComplexQ14;
use crate::common::{FftError, FftProcess, FFT_SIZE};
use crate::config::FftConfig;

/// One-shot 32-point transform.
///
/// Pure function of its input: no session, no handshake. It runs the same
/// butterfly kernel as [`super::StreamingFft`] and serves as its golden model.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fft32 {
    config: FftConfig,
}

impl Fft32 {
    pub fn new(config: FftConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> FftConfig {
        self.config
    }

    /// Transforms 32 naturally ordered samples into 32 naturally ordered bins.
    pub fn transform(&self, input: &Block) -> Spectrum {
        let mut buffers = PingPong::new();
        load_bit_reversed(input, buffers.current_mut());
        radix_2_dit_fft32_core(&mut buffers, self.config.overflow);
        Spectrum(*buffers.current())
    }
}

impl FftProcess<ComplexQ14> for Fft32 {
    /// Executes the transform in place. `buffer` must hold exactly 32 samples.
    fn process(&self, buffer: &mut [ComplexQ14]) -> Result<(), FftError> {
        let actual = buffer.len();
        let block: &mut Block = buffer.try_into().map_err(|_| FftError::SizeMismatch {
            expected: FFT_SIZE,
            actual,
        })?;
        *block = self.transform(block).0;
        Ok(())
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
