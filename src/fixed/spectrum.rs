// src/fixed/spectrum.rs

use super::buffer::Block;
use super::types::ComplexQ14;
use crate::common::FFT_SIZE;
use core::fmt;
use core::ops::Index;

/// The 32 naturally ordered bins of one transform.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Spectrum(pub Block);

impl Spectrum {
    pub fn bins(&self) -> &Block {
        &self.0
    }

    /// Magnitude squared of every bin, in raw Q1.14-squared units.
    pub fn power(&self) -> [u32; FFT_SIZE] {
        self.0.map(ComplexQ14::norm_sqr)
    }

    /// Index of the strongest bin. Ties go to the lowest index.
    pub fn peak_bin(&self, skip_dc: bool) -> usize {
        let power = self.power();
        let start = usize::from(skip_dc);
        let mut best = start;
        for i in start..FFT_SIZE {
            if power[i] > power[best] {
                best = i;
            }
        }
        best
    }
}

impl Index<usize> for Spectrum {
    type Output = ComplexQ14;

    fn index(&self, index: usize) -> &ComplexQ14 {
        &self.0[index]
    }
}

impl From<Block> for Spectrum {
    fn from(bins: Block) -> Self {
        Self(bins)
    }
}

// Same line format the plotting script parses.
impl fmt::Display for Spectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Capturing FFT output (frequency domain):")?;
        for (i, bin) in self.0.iter().enumerate() {
            writeln!(
                f,
                "Bin[{}]: Real={:04x} Imag={:04x} ",
                i,
                bin.re.to_bits() as u16,
                bin.im.to_bits() as u16
            )?;
        }
        // The plotting script reads up to the first blank line.
        writeln!(f)
    }
}

impl fmt::Debug for Spectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
