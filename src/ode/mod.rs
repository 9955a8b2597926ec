//! Ordinary differential equation integrators.

pub mod euler;
