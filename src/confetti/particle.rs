use crate::foundation::{
    color::Color,
    core::{Point, Vec2},
};

/// Default confetti palette.
pub const PALETTE: [Color; 7] = [
    Color::rgb(0xff, 0x00, 0x00),
    Color::rgb(0xff, 0x4d, 0x6d),
    Color::rgb(0xff, 0xb7, 0x03),
    Color::rgb(0xff, 0xff, 0xff),
    Color::rgb(0xff, 0x99, 0xac),
    Color::rgb(0x83, 0x38, 0xec),
    Color::rgb(0x3a, 0x86, 0xff),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleShape {
    Square,
    Circle,
    Heart,
}

/// One confetti piece, in surface pixel space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    pub pos: Point,
    /// Pixels per frame.
    pub vel: Vec2,
    pub color: Color,
    pub size: f64,
    /// Degrees.
    pub rotation: f64,
    /// Degrees per frame.
    pub rotation_speed: f64,
    /// Starts at 1.0 and only decreases.
    pub opacity: f64,
    pub shape: ParticleShape,
}

impl Particle {
    pub fn is_active(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Number of particles still active in `particles`.
pub fn active_count(particles: &[Particle]) -> usize {
    particles.iter().filter(|p| p.is_active()).count()
}
