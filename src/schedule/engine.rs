//! Cancellable frame loop driving one confetti burst at a time.

use std::time::Duration;

use crate::{
    confetti::{
        burst::{BurstFactory, burst_origin},
        particle::{Particle, active_count},
        physics::{PhysicsParams, step_all},
    },
    foundation::{
        core::{Fps, SurfaceSize},
        rng::RandomSource,
    },
    render::{shapes::render_particles, surface::DrawSurface},
    schedule::clock::{TaskId, TaskQueue},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    #[default]
    Idle,
    Running,
}

/// What a rising trigger edge does while a burst is still running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetriggerPolicy {
    /// Cancel the running burst and start a fresh one.
    #[default]
    Hard,
    /// Append a new burst to the running one, sharing its frame chain.
    Additive,
}

impl std::str::FromStr for RetriggerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hard" => Ok(Self::Hard),
            "additive" => Ok(Self::Additive),
            other => Err(format!("unknown retrigger policy '{other}'")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EngineSettings {
    pub factory: BurstFactory,
    pub physics: PhysicsParams,
    pub fps: Fps,
    /// Burst origin sits this far below the surface center.
    pub origin_offset_y: f64,
    pub retrigger: RetriggerPolicy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            factory: BurstFactory::default(),
            physics: PhysicsParams::default(),
            fps: Fps::default(),
            origin_offset_y: 50.0,
            retrigger: RetriggerPolicy::default(),
        }
    }
}

/// Outcome of one fired frame task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Particles remain; the next frame is scheduled.
    Continued { active: usize },
    /// The last particle faded; the surface was cleared and the engine is idle.
    Finished,
    /// No drawing context; nothing changed and the frame was rescheduled.
    Skipped,
}

/// Owns the confetti surface and the particle buffer of the current burst.
///
/// At most one frame task is pending at a time. A fired task whose id is not the pending one
/// is ignored, so nothing is mutated or drawn after [`ConfettiEngine::cancel`].
pub struct ConfettiEngine<S: DrawSurface> {
    surface: S,
    settings: EngineSettings,
    particles: Vec<Particle>,
    state: EngineState,
    trigger: bool,
    pending: Option<TaskId>,
    frames: u64,
}

impl<S: DrawSurface> ConfettiEngine<S> {
    pub fn new(surface: S, settings: EngineSettings) -> Self {
        Self {
            surface,
            settings,
            particles: Vec::new(),
            state: EngineState::Idle,
            trigger: false,
            pending: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn active_count(&self) -> usize {
        active_count(&self.particles)
    }

    pub fn pending_task(&self) -> Option<TaskId> {
        self.pending
    }

    /// Frames rendered since the engine was created.
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    fn frame_interval(&self) -> Duration {
        self.settings.fps.frame_interval()
    }

    /// Feed the current trigger value. Returns `true` when a burst was spawned.
    ///
    /// Only a false→true edge does anything; if no drawing context is available at that
    /// moment the edge is consumed without spawning.
    pub fn set_trigger(
        &mut self,
        open: bool,
        queue: &mut dyn TaskQueue,
        rng: &mut dyn RandomSource,
    ) -> bool {
        let rising = open && !self.trigger;
        self.trigger = open;
        if !rising {
            return false;
        }
        self.start_burst(queue, rng)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(state = ?self.state))]
    fn start_burst(&mut self, queue: &mut dyn TaskQueue, rng: &mut dyn RandomSource) -> bool {
        if self.surface.context().is_none() {
            tracing::debug!("no drawing context, burst skipped");
            return false;
        }

        let origin = burst_origin(self.surface.size(), self.settings.origin_offset_y);
        let batch = self.settings.factory.spawn(origin, rng);

        match (self.state, self.settings.retrigger) {
            (EngineState::Running, RetriggerPolicy::Additive) => {
                self.particles.extend(batch);
            }
            (EngineState::Running, RetriggerPolicy::Hard) => {
                self.cancel_pending(queue);
                self.particles = batch;
            }
            (EngineState::Idle, _) => {
                self.particles = batch;
            }
        }

        if self.pending.is_none() {
            self.pending = Some(queue.schedule(self.frame_interval()));
        }
        self.state = EngineState::Running;
        tracing::debug!(
            x = origin.x,
            y = origin.y,
            particles = self.particles.len(),
            "burst started"
        );
        true
    }

    /// Run the frame for `id`. Returns `None` when `id` is not this engine's pending task.
    pub fn on_task(
        &mut self,
        id: TaskId,
        queue: &mut dyn TaskQueue,
        rng: &mut dyn RandomSource,
    ) -> Option<FrameOutcome> {
        if self.pending != Some(id) {
            return None;
        }
        self.pending = None;
        Some(self.run_frame(queue, rng))
    }

    fn run_frame(&mut self, queue: &mut dyn TaskQueue, rng: &mut dyn RandomSource) -> FrameOutcome {
        let Some(ctx) = self.surface.context() else {
            tracing::trace!("no drawing context, frame skipped");
            self.pending = Some(queue.schedule(self.settings.fps.frame_interval()));
            return FrameOutcome::Skipped;
        };

        let active = step_all(&mut self.particles, &self.settings.physics, rng);
        ctx.clear();
        render_particles(ctx, &self.particles);
        ctx.present();
        self.frames += 1;

        if active > 0 {
            self.pending = Some(queue.schedule(self.settings.fps.frame_interval()));
            return FrameOutcome::Continued { active };
        }

        ctx.clear();
        self.particles.clear();
        self.state = EngineState::Idle;
        tracing::debug!(frames = self.frames, "burst finished");
        FrameOutcome::Finished
    }

    /// Update the surface dimensions. Particle positions are left as they are.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.surface.resize(size);
    }

    fn cancel_pending(&mut self, queue: &mut dyn TaskQueue) {
        if let Some(id) = self.pending.take() {
            queue.cancel(id);
        }
    }

    /// Cancel the pending frame, drop the burst and clear the surface.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn cancel(&mut self, queue: &mut dyn TaskQueue) {
        self.cancel_pending(queue);
        self.particles.clear();
        self.state = EngineState::Idle;
        self.trigger = false;
        if let Some(ctx) = self.surface.context() {
            ctx.clear();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/engine.rs"]
mod tests;
