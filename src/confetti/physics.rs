use crate::{
    confetti::particle::Particle,
    foundation::{
        error::{GreetfxError, GreetfxResult},
        rng::RandomSource,
    },
};

/// Per-frame constants for [`integrate`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    pub drag_x: f64,
    pub gravity: f64,
    pub damping_y: f64,
    /// Minimum opacity lost per frame.
    pub fade_base: f64,
    /// Upper bound of the random extra fade per frame.
    pub fade_jitter: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            drag_x: 0.98,
            gravity: 0.15,
            damping_y: 0.98,
            fade_base: 0.003,
            fade_jitter: 0.002,
        }
    }
}

impl PhysicsParams {
    pub fn validate(&self) -> GreetfxResult<()> {
        if self.fade_base.is_nan() || self.fade_base <= 0.0 {
            return Err(GreetfxError::validation("physics fade_base must be > 0"));
        }
        if self.fade_jitter.is_nan() || self.fade_jitter < 0.0 {
            return Err(GreetfxError::validation("physics fade_jitter must be >= 0"));
        }
        Ok(())
    }

    /// Upper bound on frames until a fresh particle goes inactive.
    pub fn max_lifetime_frames(&self) -> u64 {
        (1.0 / self.fade_base).ceil() as u64
    }
}

/// Advance one active particle by one frame. Inactive particles are left untouched.
pub fn integrate(p: &mut Particle, params: &PhysicsParams, rng: &mut dyn RandomSource) {
    if !p.is_active() {
        return;
    }
    p.pos += p.vel;
    p.vel.x *= params.drag_x;
    p.vel.y += params.gravity;
    p.vel.y *= params.damping_y;
    p.rotation += p.rotation_speed;
    p.opacity -= params.fade_base + rng.range(0.0, params.fade_jitter);
}

/// Integrate the whole batch and return how many particles are still active.
pub fn step_all(
    particles: &mut [Particle],
    params: &PhysicsParams,
    rng: &mut dyn RandomSource,
) -> usize {
    let mut active = 0;
    for p in particles.iter_mut() {
        integrate(p, params, rng);
        if p.is_active() {
            active += 1;
        }
    }
    active
}

#[cfg(test)]
#[path = "../../tests/unit/confetti/physics.rs"]
mod tests;
