use kurbo::Shape as _;

use crate::{
    ambient::{generate::AmbientLayer, model::AmbientKind, motion::Sprite},
    foundation::core::{Affine, SurfaceSize, Vec2},
    render::{shapes::heart_path, surface::DrawContext},
};

fn draw_sprite(ctx: &mut dyn DrawContext, s: &Sprite) -> bool {
    if s.opacity <= 0.0 || s.width <= 0.0 || s.height <= 0.0 {
        return false;
    }
    let alpha = s.opacity.min(1.0) as f32;
    match s.kind {
        AmbientKind::Heart => {
            // heart_path hangs below its origin; shift it so the sprite center is the middle
            let at = Affine::translate(s.center.to_vec2() - Vec2::new(0.0, s.height / 2.0));
            ctx.fill_path(&heart_path(s.width), at, s.color, alpha);
        }
        _ => {
            let ellipse = kurbo::Ellipse::new(s.center, (s.width / 2.0, s.height / 2.0), 0.0);
            ctx.fill_path(&ellipse.to_path(0.1), Affine::IDENTITY, s.color, alpha);
        }
    }
    true
}

/// Draw sprites in slice order; returns how many were visible.
pub fn draw_sprites(ctx: &mut dyn DrawContext, sprites: &[Sprite]) -> usize {
    sprites.iter().filter(|s| draw_sprite(ctx, s)).count()
}

/// Clear, draw the whole layer at `elapsed_s` and present.
#[tracing::instrument(level = "trace", skip(ctx, layer))]
pub fn draw_layer(
    ctx: &mut dyn DrawContext,
    layer: &AmbientLayer,
    elapsed_s: f64,
    viewport: SurfaceSize,
) -> usize {
    ctx.clear();
    let drawn = draw_sprites(ctx, &layer.sprites_at(elapsed_s, viewport));
    ctx.present();
    drawn
}

#[cfg(test)]
#[path = "../../tests/unit/render/ambient.rs"]
mod tests;
