use std::f64::consts::TAU;

use crate::{
    confetti::particle::{PALETTE, Particle, ParticleShape},
    foundation::{
        color::Color,
        core::{Point, SurfaceSize, Vec2},
        error::{GreetfxError, GreetfxResult},
        rng::{RandomSource, pick},
    },
};

/// Kinematic and visual ranges for one burst.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BurstParams {
    pub count: usize,
    pub speed_min: f64,
    pub speed_max: f64,
    /// Per-axis multiplier range that breaks circular symmetry.
    pub spread_min: f64,
    pub spread_max: f64,
    /// Subtracted from the vertical component before spreading.
    pub upward_bias: f64,
    pub size_min: f64,
    pub size_max: f64,
    /// Rotation speed is drawn from `[-max_spin, max_spin)`.
    pub max_spin: f64,
    /// First draw above this picks a heart.
    pub heart_threshold: f64,
    /// Otherwise a second draw above this picks a circle, else a square.
    pub circle_threshold: f64,
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            count: 150,
            speed_min: 3.0,
            speed_max: 15.0,
            spread_min: 0.5,
            spread_max: 1.5,
            upward_bias: 5.0,
            size_min: 4.0,
            size_max: 12.0,
            max_spin: 2.5,
            heart_threshold: 0.8,
            circle_threshold: 0.5,
        }
    }
}

impl BurstParams {
    pub fn validate(&self) -> GreetfxResult<()> {
        if self.count == 0 {
            return Err(GreetfxError::validation("burst count must be > 0"));
        }
        if self.speed_min.is_nan() || self.speed_min > self.speed_max {
            return Err(GreetfxError::validation("burst speed_min must be <= speed_max"));
        }
        if self.spread_min.is_nan() || self.spread_min > self.spread_max {
            return Err(GreetfxError::validation(
                "burst spread_min must be <= spread_max",
            ));
        }
        if !(self.size_min > 0.0 && self.size_min <= self.size_max) {
            return Err(GreetfxError::validation(
                "burst sizes must satisfy 0 < size_min <= size_max",
            ));
        }
        Ok(())
    }
}

/// Spawn point for a burst on a surface of `size`: its center, pushed down by `offset_y`.
pub fn burst_origin(size: SurfaceSize, offset_y: f64) -> Point {
    size.center() + Vec2::new(0.0, offset_y)
}

/// Creates particle batches from a palette and [`BurstParams`].
#[derive(Clone, Debug)]
pub struct BurstFactory {
    params: BurstParams,
    palette: Vec<Color>,
}

impl Default for BurstFactory {
    fn default() -> Self {
        Self::new(BurstParams::default(), PALETTE.to_vec())
    }
}

impl BurstFactory {
    /// An empty palette falls back to the default one.
    pub fn new(params: BurstParams, palette: Vec<Color>) -> Self {
        let palette = if palette.is_empty() {
            PALETTE.to_vec()
        } else {
            palette
        };
        Self { params, palette }
    }

    pub fn params(&self) -> &BurstParams {
        &self.params
    }

    pub fn spawn(&self, origin: Point, rng: &mut dyn RandomSource) -> Vec<Particle> {
        (0..self.params.count)
            .map(|_| self.spawn_one(origin, rng))
            .collect()
    }

    fn spawn_one(&self, origin: Point, rng: &mut dyn RandomSource) -> Particle {
        let p = &self.params;
        let angle = rng.next_f64() * TAU;
        let speed = rng.range(p.speed_min, p.speed_max);
        let vx = angle.cos() * speed * rng.range(p.spread_min, p.spread_max);
        let vy = (angle.sin() * speed - p.upward_bias) * rng.range(p.spread_min, p.spread_max);
        let color = *pick(rng, &self.palette);
        let size = rng.range(p.size_min, p.size_max);
        let rotation = rng.range(0.0, 360.0);
        let rotation_speed = rng.range(-p.max_spin, p.max_spin);
        let shape = if rng.next_f64() > p.heart_threshold {
            ParticleShape::Heart
        } else if rng.next_f64() > p.circle_threshold {
            ParticleShape::Circle
        } else {
            ParticleShape::Square
        };

        Particle {
            pos: origin,
            vel: Vec2::new(vx, vy),
            color,
            size,
            rotation,
            rotation_speed,
            opacity: 1.0,
            shape,
        }
    }
}

/// Spawn `count` particles at `origin` with the default ranges and palette.
pub fn spawn_burst(origin: Point, count: usize, rng: &mut dyn RandomSource) -> Vec<Particle> {
    let params = BurstParams {
        count,
        ..BurstParams::default()
    };
    BurstFactory::new(params, PALETTE.to_vec()).spawn(origin, rng)
}

#[cfg(test)]
#[path = "../../tests/unit/confetti/burst.rs"]
mod tests;
