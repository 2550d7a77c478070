//! Time-based animation primitives used by the ambient layer.

pub mod ease;
pub mod keyframes;
