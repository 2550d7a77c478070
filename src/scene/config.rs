use std::{fs::File, io::BufReader, path::Path};

use crate::{
    confetti::{burst::BurstParams, particle::PALETTE, physics::PhysicsParams},
    foundation::{
        color::Color,
        core::Fps,
        error::{GreetfxError, GreetfxResult},
    },
    schedule::{engine::RetriggerPolicy, fade::FadeParams},
};

/// Environment variable that pins the random seed.
pub const ENV_SEED: &str = "GREETFX_SEED";
/// Environment variable that selects the [`RetriggerPolicy`] (`hard` or `additive`).
pub const ENV_RETRIGGER: &str = "GREETFX_RETRIGGER";

/// JSON-facing scene configuration. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Fixed seed for reproducible bursts and ambient layers; entropy when unset.
    pub seed: Option<u64>,
    pub fps: Fps,
    pub burst: BurstParams,
    pub physics: PhysicsParams,
    pub retrigger: RetriggerPolicy,
    /// Burst origin offset below the surface center, in pixels.
    pub origin_offset_y: f64,
    pub palette: Vec<Color>,
    pub music: FadeParams,
    /// Page color behind every layer in offline renders.
    pub background: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fps: Fps::default(),
            burst: BurstParams::default(),
            physics: PhysicsParams::default(),
            retrigger: RetriggerPolicy::default(),
            origin_offset_y: 50.0,
            palette: PALETTE.to_vec(),
            music: FadeParams::default(),
            background: Color::rgb(0xff, 0xc2, 0xd1),
        }
    }
}

impl SceneConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> GreetfxResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| GreetfxError::serde(format!("parse scene config JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> GreetfxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GreetfxError::config(format!("open scene config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> GreetfxResult<()> {
        if self.palette.is_empty() {
            return Err(GreetfxError::validation("palette must not be empty"));
        }
        if !self.origin_offset_y.is_finite() {
            return Err(GreetfxError::validation("origin_offset_y must be finite"));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        self.burst.validate()?;
        self.physics.validate()?;
        self.music.validate()?;
        Ok(())
    }

    /// Apply `GREETFX_SEED` and `GREETFX_RETRIGGER` from the process environment.
    pub fn with_env_overrides(self) -> GreetfxResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup. Unset variables leave fields alone;
    /// malformed ones are config errors.
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> GreetfxResult<Self> {
        if let Some(v) = lookup(ENV_SEED) {
            let seed = v
                .trim()
                .parse::<u64>()
                .map_err(|e| GreetfxError::config(format!("{ENV_SEED}='{v}': {e}")))?;
            self.seed = Some(seed);
        }
        if let Some(v) = lookup(ENV_RETRIGGER) {
            self.retrigger = v
                .parse::<RetriggerPolicy>()
                .map_err(|e| GreetfxError::config(format!("{ENV_RETRIGGER}: {e}")))?;
        }
        Ok(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
