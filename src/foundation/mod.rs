//! Shared primitives: geometry and frame types, colors, errors and random sources.

pub mod color;
pub mod core;
pub mod error;
pub mod rng;
