//! Procedural ambient layer: orbs, stars, clouds, motes, embers and falling hearts.
//!
//! Batches are generated once per mount and never touch the confetti surface.

pub mod generate;
pub mod model;
pub mod motion;
