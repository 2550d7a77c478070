//! Background-music volume ramps, ticked on the same [`TaskQueue`] as the confetti frames.
//!
//! Only volume and play state are modelled here; the host owns the actual audio backend and
//! applies each [`FadeEvent`].

use std::time::Duration;

use crate::{
    foundation::error::{GreetfxError, GreetfxResult},
    schedule::clock::{TaskId, TaskQueue},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FadeParams {
    pub target_volume: f32,
    pub fade_in_step: f32,
    pub fade_in_interval_ms: u64,
    pub fade_out_step: f32,
    pub fade_out_interval_ms: u64,
}

impl Default for FadeParams {
    fn default() -> Self {
        Self {
            target_volume: 0.15,
            fade_in_step: 0.01,
            fade_in_interval_ms: 100,
            fade_out_step: 0.02,
            fade_out_interval_ms: 50,
        }
    }
}

impl FadeParams {
    pub fn validate(&self) -> GreetfxResult<()> {
        if !(0.0..=1.0).contains(&self.target_volume) {
            return Err(GreetfxError::validation(
                "music target_volume must be in [0, 1]",
            ));
        }
        if self.fade_in_step.is_nan() || self.fade_in_step <= 0.0 {
            return Err(GreetfxError::validation("music fade_in_step must be > 0"));
        }
        if self.fade_out_step.is_nan() || self.fade_out_step <= 0.0 {
            return Err(GreetfxError::validation("music fade_out_step must be > 0"));
        }
        if self.fade_in_interval_ms == 0 || self.fade_out_interval_ms == 0 {
            return Err(GreetfxError::validation("music fade intervals must be > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FadePhase {
    #[default]
    Paused,
    FadingIn,
    Playing,
    FadingOut,
}

/// Instruction for the host's audio backend.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeEvent {
    /// Rewind to the start and begin playback at volume 0.
    Restart,
    Volume(f32),
    Paused,
}

#[derive(Clone, Debug, Default)]
pub struct VolumeFade {
    params: FadeParams,
    volume: f32,
    phase: FadePhase,
    pending: Option<TaskId>,
}

impl VolumeFade {
    pub fn new(params: FadeParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    pub fn owns_task(&self, id: TaskId) -> bool {
        self.pending == Some(id)
    }

    fn cancel_pending(&mut self, queue: &mut dyn TaskQueue) {
        if let Some(id) = self.pending.take() {
            queue.cancel(id);
        }
    }

    fn schedule(&mut self, queue: &mut dyn TaskQueue, interval_ms: u64) {
        self.pending = Some(queue.schedule(Duration::from_millis(interval_ms)));
    }

    /// Restart from silence and ramp up to the target volume.
    pub fn fade_in(&mut self, queue: &mut dyn TaskQueue) -> FadeEvent {
        self.cancel_pending(queue);
        self.volume = 0.0;
        self.phase = FadePhase::FadingIn;
        self.schedule(queue, self.params.fade_in_interval_ms);
        tracing::debug!(target = self.params.target_volume, "music fade in");
        FadeEvent::Restart
    }

    /// Ramp down from the current volume, then pause.
    pub fn fade_out(&mut self, queue: &mut dyn TaskQueue) {
        self.cancel_pending(queue);
        self.phase = FadePhase::FadingOut;
        self.schedule(queue, self.params.fade_out_interval_ms);
        tracing::debug!(from = self.volume, "music fade out");
    }

    /// Cancel any ramp without emitting events.
    pub fn stop(&mut self, queue: &mut dyn TaskQueue) {
        self.cancel_pending(queue);
        self.volume = 0.0;
        self.phase = FadePhase::Paused;
    }

    /// Advance the ramp owning `id`. `None` for foreign ids and for the tick that ends a fade in.
    pub fn on_task(&mut self, id: TaskId, queue: &mut dyn TaskQueue) -> Option<FadeEvent> {
        if self.pending != Some(id) {
            return None;
        }
        self.pending = None;

        match self.phase {
            FadePhase::FadingIn => {
                if self.volume < self.params.target_volume {
                    self.volume =
                        (self.volume + self.params.fade_in_step).min(self.params.target_volume);
                    self.schedule(queue, self.params.fade_in_interval_ms);
                    Some(FadeEvent::Volume(self.volume))
                } else {
                    self.phase = FadePhase::Playing;
                    None
                }
            }
            FadePhase::FadingOut => {
                if self.volume > 0.0 {
                    self.volume = (self.volume - self.params.fade_out_step).max(0.0);
                    self.schedule(queue, self.params.fade_out_interval_ms);
                    Some(FadeEvent::Volume(self.volume))
                } else {
                    self.phase = FadePhase::Paused;
                    Some(FadeEvent::Paused)
                }
            }
            FadePhase::Paused | FadePhase::Playing => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/fade.rs"]
mod tests;
