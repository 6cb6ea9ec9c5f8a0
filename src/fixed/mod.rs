pub mod types;
pub mod buffer;
pub mod core;
pub mod twiddle;
pub mod complex;
pub mod real;
pub mod spectrum;
pub mod stream;

pub use complex::Fft32;
pub use real::{HalfSpectrum, RealFft32};
pub use spectrum::Spectrum;
pub use stream::{Bin, EngineState, Session, StreamStats, StreamingFft, Tick};
pub use types::{ComplexFixed, ComplexQ14, Fixed, Q14};
