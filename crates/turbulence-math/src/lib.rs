//! Numerical primitives for the PIC turbulence setup.

pub mod sampling;
pub mod stats;
