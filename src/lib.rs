//! greetfx renders the animated layers of a greeting scene: a physics-driven confetti burst on
//! a cancellable frame loop, and a procedural ambient layer of orbs, stars, clouds, motes,
//! embers and falling hearts.
//!
//! The entry point is [`Scene`]:
//!
//! - build it from a [`SceneConfig`] and a [`DrawSurface`] ([`CpuSurface`] or
//!   [`RecordingSurface`])
//! - [`Scene::mount`] generates the ambient layer
//! - [`Scene::set_trigger`] starts a burst on the rising edge
//! - the host fires scheduled tasks back through [`Scene::dispatch`], or
//!   [`Scene::pump`] drains a [`ManualClock`] offline
#![forbid(unsafe_code)]

pub mod ambient;
pub mod animation;
pub mod confetti;
pub mod foundation;
pub mod render;
pub mod scene;
pub mod schedule;

pub use crate::ambient::generate::AmbientLayer;
pub use crate::ambient::model::{AmbientEntity, AmbientKind};
pub use crate::ambient::motion::Sprite;
pub use crate::confetti::burst::{BurstFactory, BurstParams, spawn_burst};
pub use crate::confetti::particle::{Particle, ParticleShape};
pub use crate::confetti::physics::{PhysicsParams, integrate, step_all};
pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Affine, BezPath, Fps, Point, Rect, SurfaceSize, Vec2};
pub use crate::foundation::error::{GreetfxError, GreetfxResult};
pub use crate::foundation::rng::{EntropyRng, RandomSource, Rng64};
pub use crate::render::FrameRGBA;
pub use crate::render::cpu::CpuSurface;
pub use crate::render::recording::{DrawCall, RecordingSurface};
pub use crate::render::surface::{DrawContext, DrawSurface};
pub use crate::scene::{Dispatch, PumpReport, Scene, SceneConfig};
pub use crate::schedule::clock::{ManualClock, TaskId, TaskQueue};
pub use crate::schedule::engine::{ConfettiEngine, EngineState, FrameOutcome, RetriggerPolicy};
pub use crate::schedule::fade::{FadeEvent, FadeParams, VolumeFade};
