mod fixed;
mod fixed_complex;

pub use fixed::{Fixed, Q14};
pub use fixed_complex::{ComplexFixed, ComplexQ14};
