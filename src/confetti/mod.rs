//! Confetti bursts: particle creation and per-frame physics.

pub mod burst;
pub mod particle;
pub mod physics;
