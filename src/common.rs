// src/common.rs

use crate::fixed::EngineState;
use thiserror::Error;

/// Number of points in every transform this crate computes.
pub const FFT_SIZE: usize = 32;

/// Number of butterfly stages (log2 of [`FFT_SIZE`]).
pub const STAGES: usize = 5;

/// Butterflies per stage.
pub const BUTTERFLIES_PER_STAGE: usize = FFT_SIZE / 2;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    #[error("data buffer holds {actual} samples, transform size is {expected}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("sample offered while the engine is {state} and not ready")]
    NotReady { state: EngineState },
    #[error("engine is {state}; a session is already in flight")]
    Busy { state: EngineState },
}

pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T]) -> Result<(), FftError>;
}
