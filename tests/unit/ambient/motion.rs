use super::*;
use crate::ambient::model::{HeartGlyph, OrbTint};
use crate::foundation::rng::Rng64;

const VIEW: SurfaceSize = SurfaceSize {
    width: 1000,
    height: 800,
};

fn timing(duration_s: f64) -> Timing {
    Timing {
        duration_s,
        delay_s: 0.0,
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn orb_breathes_between_rest_and_peak() {
    let orb = AmbientEntity::Orb(Orb {
        id: 0,
        top: 50.0,
        left: 25.0,
        size: 100.0,
        tint: OrbTint::Pink,
        timing: timing(10.0),
    });
    let rest = orb.sprite_at(0.0, VIEW);
    assert_eq!(rest.center, Point::new(250.0, 400.0));
    assert!(close(rest.width, 100.0));
    assert!(close(rest.opacity, 0.15));

    let peak = orb.sprite_at(5.0, VIEW);
    assert!(close(peak.width, 120.0));
    assert!(close(peak.opacity, 0.4));
    assert_eq!(peak.color, OrbTint::Pink.color());
}

#[test]
fn cloud_floats_back_and_forth() {
    let cloud = AmbientEntity::Cloud(Cloud {
        id: 0,
        bottom: 0.0,
        left: 0.0,
        width: 400.0,
        height: 200.0,
        timing: timing(30.0),
    });
    let start = cloud.sprite_at(0.0, VIEW);
    let end = cloud.sprite_at(29.999_999, VIEW);
    let back = cloud.sprite_at(59.999_999, VIEW);
    assert!(close(start.center.x, 200.0 - 30.0));
    assert!((end.center.x - (200.0 + 30.0)).abs() < 1e-3);
    assert!((back.center.x - start.center.x).abs() < 1e-3);
    assert!(close(start.center.y, 800.0 - 100.0));
    assert!(close(start.opacity, 0.16));
}

#[test]
fn mote_fades_in_holds_and_drifts_up() {
    let mote = AmbientEntity::Mote(Mote {
        id: 0,
        top: 50.0,
        left: 50.0,
        size: 2.0,
        target_opacity: 0.5,
        timing: timing(10.0),
    });
    assert!(close(mote.sprite_at(0.0, VIEW).opacity, 0.0));
    assert!(close(mote.sprite_at(1.0, VIEW).opacity, 0.25));
    assert!(close(mote.sprite_at(5.0, VIEW).opacity, 0.5));
    let mid = mote.sprite_at(5.0, VIEW);
    assert!(close(mid.center.y, 400.0 - 50.0 + 1.0));
    assert!(close(mid.center.x, 500.0 + 12.5 + 1.0));
}

#[test]
fn ember_rises_above_the_viewport() {
    let ember = AmbientEntity::Ember(Ember {
        id: 0,
        left: 10.0,
        size: 4.0,
        sway: 40.0,
        timing: timing(20.0),
    });
    let start = ember.sprite_at(0.0, VIEW);
    assert!(start.center.y > f64::from(VIEW.height));
    assert!(close(start.opacity, 0.0));

    let half = ember.sprite_at(10.0, VIEW);
    assert!(close(half.center.x, 100.0 + 40.0 + 2.0));
    assert!(close(half.opacity, 0.6));

    let late = ember.sprite_at(19.999_99, VIEW);
    assert!(late.center.y < 0.0);
    assert!(late.center.x < 100.0);
}

#[test]
fn heart_falls_top_to_bottom() {
    let heart = AmbientEntity::Heart(Heart {
        id: 0,
        left: 50.0,
        size_rem: 1.0,
        opacity: 0.4,
        glyph: HeartGlyph::Solid,
        timing: timing(10.0),
    });
    let start = heart.sprite_at(0.0, VIEW);
    let later = heart.sprite_at(9.9, VIEW);
    assert!(start.center.y < 0.0);
    assert!(later.center.y > f64::from(VIEW.height));
    assert!(close(start.width, 16.0));
    assert!(close(later.opacity, 0.4));
}

#[test]
fn star_twinkles_within_pulse_band() {
    let star = AmbientEntity::Star(Star {
        id: 0,
        top: 0.0,
        left: 0.0,
        size: 4.0,
        timing: timing(4.0),
    });
    assert!(close(star.sprite_at(0.0, VIEW).opacity, 0.6));
    assert!(close(star.sprite_at(2.0, VIEW).opacity, 0.5));
    assert_eq!(star.sprite_at(0.0, VIEW).center, Point::new(2.0, 2.0));
}

#[test]
fn layer_sprites_cover_every_entity_and_stay_finite() {
    let layer = AmbientLayer::generate(&mut Rng64::new(4));
    for t in [0.0, 1.5, 33.0, 600.0] {
        let sprites = layer.sprites_at(t, VIEW);
        assert_eq!(sprites.len(), layer.len());
        assert_eq!(sprites[0].kind, AmbientKind::Cloud);
        assert_eq!(sprites.last().unwrap().kind, AmbientKind::Heart);
        for s in &sprites {
            assert!(s.center.x.is_finite() && s.center.y.is_finite());
            assert!((0.0..=1.0).contains(&s.opacity));
        }
    }
}

#[test]
fn poses_are_periodic() {
    let layer = AmbientLayer::generate(&mut Rng64::new(9));
    for e in layer.batch(AmbientKind::Mote) {
        let d = e.timing().duration_s;
        let a = e.sprite_at(3.0, VIEW);
        let b = e.sprite_at(3.0 + d, VIEW);
        assert!((a.center.y - b.center.y).abs() < 1e-6);
        assert!((a.opacity - b.opacity).abs() < 1e-6);
    }
}
