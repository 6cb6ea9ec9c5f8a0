#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! Streaming fixed-point 32-point radix-2 DIT FFT.
//!
//! Two models of the same transform live here: [`fixed::StreamingFft`], a
//! cycle-stepped engine with a load / compute / drain handshake, and
//! [`fixed::Fft32`], a one-shot function over a whole block. Both share the
//! butterfly kernel and produce bit-identical bins for the same
//! [`FftConfig`].

pub mod common;
pub mod config;
pub mod fixed;

pub use common::{FftError, FftProcess, FFT_SIZE};
pub use config::{BackpressurePolicy, FftConfig, OverflowPolicy};
pub use fixed::{
    Bin, ComplexQ14, EngineState, Fft32, HalfSpectrum, Q14, RealFft32, Spectrum, StreamStats,
    StreamingFft, Tick,
};
