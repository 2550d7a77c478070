//! Confetti shape geometry and drawing.

use kurbo::Shape as _;

use crate::{
    confetti::particle::{Particle, ParticleShape},
    foundation::core::{Affine, BezPath, Point, Rect},
    render::surface::DrawContext,
};

/// Hearts are drawn larger than their nominal particle size.
pub const HEART_SCALE: f64 = 1.5;

const TOLERANCE: f64 = 0.1;

/// Heart outline of scale `s` in local coordinates: top notch at `(0, 0.3 s)`, lobes reaching
/// `x = ±s/2`, tip at `(0, s)`.
pub fn heart_path(s: f64) -> BezPath {
    let notch = s * 0.3;
    let half = s / 2.0;
    let mut p = BezPath::new();
    p.move_to((0.0, notch));
    p.curve_to((0.0, 0.0), (-half, 0.0), (-half, notch));
    p.curve_to((-half, half), (0.0, s), (0.0, s));
    p.curve_to((0.0, s), (half, half), (half, notch));
    p.curve_to((half, 0.0), (0.0, 0.0), (0.0, notch));
    p.close_path();
    p
}

/// Local path and local-to-surface transform for one particle.
pub fn particle_geometry(p: &Particle) -> (BezPath, Affine) {
    let at = Affine::translate(p.pos.to_vec2());
    let spin = Affine::rotate(p.rotation.to_radians());
    match p.shape {
        ParticleShape::Square => {
            let h = p.size / 2.0;
            (Rect::new(-h, -h, h, h).to_path(TOLERANCE), at * spin)
        }
        ParticleShape::Circle => (
            kurbo::Circle::new(Point::ZERO, p.size / 2.0).to_path(TOLERANCE),
            at,
        ),
        ParticleShape::Heart => (heart_path(p.size * HEART_SCALE), at * spin),
    }
}

/// Draw one particle with its opacity as global alpha. Returns `false` for inactive
/// particles, which are not drawn.
pub fn draw_particle(ctx: &mut dyn DrawContext, p: &Particle) -> bool {
    if !p.is_active() {
        return false;
    }
    let (path, transform) = particle_geometry(p);
    ctx.fill_path(&path, transform, p.color, p.opacity.min(1.0) as f32);
    true
}

/// Draw every active particle in buffer order and return how many were drawn.
pub fn render_particles(ctx: &mut dyn DrawContext, particles: &[Particle]) -> usize {
    particles
        .iter()
        .filter(|p| draw_particle(ctx, p))
        .count()
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
