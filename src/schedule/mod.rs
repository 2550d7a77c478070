//! Cooperative scheduling: a host task queue, the confetti frame loop and the music fade.

pub mod clock;
pub mod engine;
pub mod fade;
