//! Lifecycle glue: one mounted greeting scene with its ambient layer, confetti engine and
//! music fade.
//!
//! The host owns the task queue and calls back into [`Scene::dispatch`] whenever a task fires.
//! Tests and the offline renderer use [`Scene::pump`] on a [`ManualClock`] instead.

pub mod config;

use std::time::Duration;

use crate::{
    ambient::{generate::AmbientLayer, motion::Sprite},
    confetti::burst::BurstFactory,
    foundation::{
        core::SurfaceSize,
        error::GreetfxResult,
        rng::{RandomSource, source_for_seed},
    },
    render::surface::DrawSurface,
    schedule::{
        clock::{ManualClock, TaskId, TaskQueue},
        engine::{ConfettiEngine, EngineSettings, FrameOutcome},
        fade::{FadeEvent, VolumeFade},
    },
};

pub use config::SceneConfig;

/// What a fired task turned out to be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dispatch {
    Frame(FrameOutcome),
    /// A music fade tick, with the event to apply (if any).
    Fade(Option<FadeEvent>),
    /// Cancelled or unknown; nothing happened.
    Stale,
}

/// Tasks fired by one [`Scene::pump`] call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PumpReport {
    pub tasks: usize,
    pub frames: usize,
    pub fade_events: Vec<FadeEvent>,
}

pub struct Scene<S: DrawSurface> {
    config: SceneConfig,
    rng: Box<dyn RandomSource>,
    ambient: Option<AmbientLayer>,
    mounted_at: Option<Duration>,
    trigger: bool,
    engine: ConfettiEngine<S>,
    music: VolumeFade,
}

impl<S: DrawSurface> Scene<S> {
    /// Validate `config` and build an unmounted scene drawing confetti onto `surface`.
    pub fn new(config: SceneConfig, surface: S) -> GreetfxResult<Self> {
        let rng = source_for_seed(config.seed);
        Self::with_rng(config, surface, rng)
    }

    pub fn with_rng(
        config: SceneConfig,
        surface: S,
        rng: Box<dyn RandomSource>,
    ) -> GreetfxResult<Self> {
        config.validate()?;
        let settings = EngineSettings {
            factory: BurstFactory::new(config.burst, config.palette.clone()),
            physics: config.physics,
            fps: config.fps,
            origin_offset_y: config.origin_offset_y,
            retrigger: config.retrigger,
        };
        Ok(Self {
            engine: ConfettiEngine::new(surface, settings),
            music: VolumeFade::new(config.music),
            config,
            rng,
            ambient: None,
            mounted_at: None,
            trigger: false,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted_at.is_some()
    }

    pub fn ambient(&self) -> Option<&AmbientLayer> {
        self.ambient.as_ref()
    }

    pub fn engine(&self) -> &ConfettiEngine<S> {
        &self.engine
    }

    pub fn music(&self) -> &VolumeFade {
        &self.music
    }

    /// Generate the ambient layer. A no-op while already mounted.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn mount(&mut self, queue: &dyn TaskQueue) {
        if self.is_mounted() {
            return;
        }
        let layer = AmbientLayer::generate(&mut *self.rng);
        tracing::debug!(entities = layer.len(), "scene mounted");
        self.ambient = Some(layer);
        self.mounted_at = Some(queue.now());
    }

    /// Cancel every pending task, clear the confetti surface and drop the ambient layer.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn unmount(&mut self, queue: &mut dyn TaskQueue) {
        if !self.is_mounted() {
            return;
        }
        self.engine.cancel(queue);
        self.music.stop(queue);
        self.ambient = None;
        self.mounted_at = None;
        self.trigger = false;
        tracing::debug!("scene unmounted");
    }

    /// Feed the open/closed state. A rising edge starts a burst and the music fade in; a
    /// falling edge only fades the music out. Returns the immediate music event, if any.
    pub fn set_trigger(&mut self, open: bool, queue: &mut dyn TaskQueue) -> Option<FadeEvent> {
        if !self.is_mounted() {
            tracing::debug!(open, "trigger ignored while unmounted");
            return None;
        }
        if open == self.trigger {
            return None;
        }
        self.trigger = open;
        self.engine.set_trigger(open, queue, &mut *self.rng);
        if open {
            Some(self.music.fade_in(queue))
        } else {
            self.music.fade_out(queue);
            None
        }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.engine.resize(size);
    }

    /// Route a fired task to whichever part of the scene scheduled it.
    pub fn dispatch(&mut self, id: TaskId, queue: &mut dyn TaskQueue) -> Dispatch {
        if let Some(outcome) = self.engine.on_task(id, queue, &mut *self.rng) {
            return Dispatch::Frame(outcome);
        }
        if self.music.owns_task(id) {
            return Dispatch::Fade(self.music.on_task(id, queue));
        }
        Dispatch::Stale
    }

    /// Fire up to `max_tasks` tasks from `clock`, stopping early once it is idle.
    pub fn pump(&mut self, clock: &mut ManualClock, max_tasks: usize) -> PumpReport {
        let mut report = PumpReport::default();
        while report.tasks < max_tasks {
            let Some(id) = clock.pop_next() else {
                break;
            };
            report.tasks += 1;
            match self.dispatch(id, clock) {
                Dispatch::Frame(_) => report.frames += 1,
                Dispatch::Fade(Some(ev)) => report.fade_events.push(ev),
                Dispatch::Fade(None) | Dispatch::Stale => {}
            }
        }
        report
    }

    /// Seconds since mount according to `queue`, or `None` when unmounted.
    pub fn elapsed_s(&self, queue: &dyn TaskQueue) -> Option<f64> {
        let at = self.mounted_at?;
        Some(queue.now().saturating_sub(at).as_secs_f64())
    }

    /// Ambient sprites at the current time of `queue`; empty when unmounted.
    pub fn ambient_sprites(&self, queue: &dyn TaskQueue) -> Vec<Sprite> {
        match (self.ambient.as_ref(), self.elapsed_s(queue)) {
            (Some(layer), Some(t)) => layer.sprites_at(t, self.engine.surface().size()),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/scene.rs"]
mod tests;
