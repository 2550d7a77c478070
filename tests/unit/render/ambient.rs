use super::*;
use crate::foundation::color::Color;
use crate::foundation::core::Point;
use crate::foundation::rng::Rng64;
use crate::render::recording::{DrawCall, RecordingSurface};
use crate::render::surface::DrawSurface;

fn sprite(kind: AmbientKind, opacity: f64) -> Sprite {
    Sprite {
        kind,
        center: Point::new(40.0, 40.0),
        width: 20.0,
        height: 10.0,
        opacity,
        color: Color::WHITE,
    }
}

#[test]
fn invisible_sprites_are_skipped() {
    let mut surface = RecordingSurface::new(SurfaceSize::new(100, 100));
    let drawn = draw_sprites(
        surface.context().unwrap(),
        &[sprite(AmbientKind::Orb, 0.3), sprite(AmbientKind::Mote, 0.0)],
    );
    assert_eq!(drawn, 1);
    match &surface.calls()[0] {
        DrawCall::Fill { bounds, alpha, .. } => {
            assert!((bounds.width() - 20.0).abs() < 0.2);
            assert!((bounds.height() - 10.0).abs() < 0.2);
            assert!((alpha - 0.3).abs() < 1e-6);
        }
        other => panic!("unexpected call {other:?}"),
    }
}

#[test]
fn hearts_are_centered_on_the_sprite() {
    let mut surface = RecordingSurface::new(SurfaceSize::new(100, 100));
    let heart = Sprite {
        height: 20.0,
        ..sprite(AmbientKind::Heart, 0.5)
    };
    draw_sprites(surface.context().unwrap(), &[heart]);
    let DrawCall::Fill { bounds, .. } = &surface.calls()[0] else {
        panic!("expected a fill");
    };
    assert!((bounds.center().x - 40.0).abs() < 1e-6);
    assert!((bounds.y1 - 50.0).abs() < 1e-6);
}

#[test]
fn draw_layer_brackets_with_clear_and_present() {
    let layer = AmbientLayer::generate(&mut Rng64::new(2));
    let mut surface = RecordingSurface::new(SurfaceSize::new(320, 240));
    let view = surface.size();
    let drawn = draw_layer(surface.context().unwrap(), &layer, 12.0, view);
    let calls = surface.calls();
    assert_eq!(calls.first(), Some(&DrawCall::Clear));
    assert_eq!(calls.last(), Some(&DrawCall::Present));
    assert_eq!(surface.fill_count(), drawn);
    assert!(drawn > 0 && drawn <= layer.len());
}
