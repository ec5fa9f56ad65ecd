//! Parameter derivation and particle seeding for PIC pair-plasma turbulence.
//!
//! `derivation`: primary inputs to normalized simulation parameters
//! `seeding`, `injector`: initial particle positions, velocities, weights

pub mod derivation;
mod diagnostics;
pub mod injector;
pub mod seeding;
