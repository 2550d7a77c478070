//! Continuous, self-looping motion of ambient entities.
//!
//! Entities never change after generation; their on-screen pose is a pure function of elapsed
//! wall-clock time, the entity's [`Timing`] and the viewport size.

use std::sync::LazyLock;

use crate::{
    ambient::generate::AmbientLayer,
    ambient::model::{AmbientEntity, AmbientKind, Cloud, Ember, Heart, Mote, Orb, Star, Timing},
    animation::ease::Ease,
    animation::keyframes::{Cycle, Direction, Keyframe, Keyframes},
    foundation::color::Color,
    foundation::core::{Point, SurfaceSize, Vec2},
};

/// Pose of one ambient entity at a point in time, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Sprite {
    pub kind: AmbientKind,
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    pub color: Color,
}

const CLOUD_OPACITY: f64 = 0.16;
const CLOUD_DRIFT_PX: f64 = 30.0;
const MOTE_COLOR: Color = Color::rgb(0xff, 0xfa, 0xdd);
const EMBER_COLOR: Color = Color::rgb(0xfd, 0xba, 0x74);
const HEART_COLOR: Color = Color::rgb(0xff, 0x4d, 0x6d);

// (scale, opacity)
static BREATHE: LazyLock<Keyframes<Vec2>> = LazyLock::new(|| {
    Keyframes::from_sorted(vec![
        Keyframe::new(0.0, Vec2::new(1.0, 0.15), Ease::EASE_IN_OUT),
        Keyframe::new(0.5, Vec2::new(1.2, 0.4), Ease::EASE_IN_OUT),
        Keyframe::new(1.0, Vec2::new(1.0, 0.15), Ease::EASE_IN_OUT),
    ])
});

static TWINKLE: LazyLock<Keyframes<f64>> = LazyLock::new(|| {
    Keyframes::from_sorted(vec![
        Keyframe::new(0.0, 0.6, Ease::PULSE),
        Keyframe::new(0.5, 0.5, Ease::PULSE),
        Keyframe::new(1.0, 0.6, Ease::PULSE),
    ])
});

static FLOAT: LazyLock<Keyframes<f64>> = LazyLock::new(|| {
    Keyframes::from_sorted(vec![
        Keyframe::new(0.0, -CLOUD_DRIFT_PX, Ease::EASE_IN_OUT),
        Keyframe::new(1.0, CLOUD_DRIFT_PX, Ease::EASE_IN_OUT),
    ])
});

static DRIFT_OFFSET: LazyLock<Keyframes<Vec2>> = LazyLock::new(|| {
    Keyframes::from_sorted(vec![
        Keyframe::new(0.0, Vec2::ZERO, Ease::Linear),
        Keyframe::new(1.0, Vec2::new(25.0, -100.0), Ease::Linear),
    ])
});

// Fraction of the mote's target opacity.
static DRIFT_FADE: LazyLock<Keyframes<f64>> = LazyLock::new(|| {
    Keyframes::from_sorted(vec![
        Keyframe::new(0.0, 0.0, Ease::Linear),
        Keyframe::new(0.2, 1.0, Ease::Linear),
        Keyframe::new(0.8, 1.0, Ease::Linear),
        Keyframe::new(1.0, 0.0, Ease::Linear),
    ])
});

// x in units of sway, y in units of viewport height.
static RISE_OFFSET: LazyLock<Keyframes<Vec2>> = LazyLock::new(|| {
    Keyframes::from_sorted(vec![
        Keyframe::new(0.0, Vec2::ZERO, Ease::EASE_OUT),
        Keyframe::new(0.5, Vec2::new(1.0, -0.5), Ease::EASE_OUT),
        Keyframe::new(1.0, Vec2::new(-1.0, -1.1), Ease::EASE_OUT),
    ])
});

static RISE_FADE: LazyLock<Keyframes<f64>> = LazyLock::new(|| {
    Keyframes::from_sorted(vec![
        Keyframe::new(0.0, 0.0, Ease::EASE_OUT),
        Keyframe::new(0.15, 0.6, Ease::EASE_OUT),
        Keyframe::new(0.85, 0.6, Ease::EASE_OUT),
        Keyframe::new(1.0, 0.0, Ease::EASE_OUT),
    ])
});

fn cycle(t: Timing, direction: Direction) -> Cycle {
    Cycle {
        duration_s: t.duration_s,
        delay_s: t.delay_s,
        direction,
    }
}

impl AmbientEntity {
    /// Pose at `elapsed_s` seconds after mount.
    pub fn sprite_at(&self, elapsed_s: f64, viewport: SurfaceSize) -> Sprite {
        match self {
            Self::Orb(o) => orb_sprite(o, elapsed_s, viewport),
            Self::Star(s) => star_sprite(s, elapsed_s, viewport),
            Self::Cloud(c) => cloud_sprite(c, elapsed_s, viewport),
            Self::Mote(m) => mote_sprite(m, elapsed_s, viewport),
            Self::Ember(e) => ember_sprite(e, elapsed_s, viewport),
            Self::Heart(h) => heart_sprite(h, elapsed_s, viewport),
        }
    }
}

fn orb_sprite(o: &Orb, elapsed_s: f64, viewport: SurfaceSize) -> Sprite {
    let p = cycle(o.timing, Direction::Normal).progress(elapsed_s);
    let v = BREATHE.sample(p);
    let size = o.size * v.x;
    Sprite {
        kind: AmbientKind::Orb,
        center: viewport.percent_to_px(o.left, o.top),
        width: size,
        height: size,
        opacity: v.y,
        color: o.tint.color(),
    }
}

fn star_sprite(s: &Star, elapsed_s: f64, viewport: SurfaceSize) -> Sprite {
    let p = cycle(s.timing, Direction::Normal).progress(elapsed_s);
    let top_left = viewport.percent_to_px(s.left, s.top);
    Sprite {
        kind: AmbientKind::Star,
        center: top_left + Vec2::new(s.size / 2.0, s.size / 2.0),
        width: s.size,
        height: s.size,
        opacity: TWINKLE.sample(p),
        color: Color::WHITE,
    }
}

fn cloud_sprite(c: &Cloud, elapsed_s: f64, viewport: SurfaceSize) -> Sprite {
    let p = cycle(c.timing, Direction::Alternate).progress(elapsed_s);
    let h = f64::from(viewport.height);
    let left_px = f64::from(viewport.width) * c.left / 100.0;
    let bottom_px = h * c.bottom / 100.0;
    Sprite {
        kind: AmbientKind::Cloud,
        center: Point::new(
            left_px + c.width / 2.0 + FLOAT.sample(p),
            h - bottom_px - c.height / 2.0,
        ),
        width: c.width,
        height: c.height,
        opacity: CLOUD_OPACITY,
        color: Color::WHITE,
    }
}

fn mote_sprite(m: &Mote, elapsed_s: f64, viewport: SurfaceSize) -> Sprite {
    let p = cycle(m.timing, Direction::Normal).progress(elapsed_s);
    let top_left = viewport.percent_to_px(m.left, m.top) + DRIFT_OFFSET.sample(p);
    Sprite {
        kind: AmbientKind::Mote,
        center: top_left + Vec2::new(m.size / 2.0, m.size / 2.0),
        width: m.size,
        height: m.size,
        opacity: m.target_opacity * DRIFT_FADE.sample(p),
        color: MOTE_COLOR,
    }
}

fn ember_sprite(e: &Ember, elapsed_s: f64, viewport: SurfaceSize) -> Sprite {
    let p = cycle(e.timing, Direction::Normal).progress(elapsed_s);
    let h = f64::from(viewport.height);
    let left_px = f64::from(viewport.width) * e.left / 100.0;
    let top_px = h - h * Ember::BOTTOM / 100.0 - e.size;
    let k = RISE_OFFSET.sample(p);
    Sprite {
        kind: AmbientKind::Ember,
        center: Point::new(
            left_px + k.x * e.sway + e.size / 2.0,
            top_px + k.y * h + e.size / 2.0,
        ),
        width: e.size,
        height: e.size,
        opacity: RISE_FADE.sample(p),
        color: EMBER_COLOR,
    }
}

fn heart_sprite(hh: &Heart, elapsed_s: f64, viewport: SurfaceSize) -> Sprite {
    let p = cycle(hh.timing, Direction::Normal).progress(elapsed_s);
    let size = hh.size_px();
    let top_pct = Heart::TOP + (100.0 - 2.0 * Heart::TOP) * p;
    let top_left = viewport.percent_to_px(hh.left, top_pct);
    Sprite {
        kind: AmbientKind::Heart,
        center: top_left + Vec2::new(size / 2.0, size / 2.0),
        width: size,
        height: size,
        opacity: hh.opacity,
        color: HEART_COLOR,
    }
}

impl AmbientLayer {
    /// Every entity's pose, back to front.
    pub fn sprites_at(&self, elapsed_s: f64, viewport: SurfaceSize) -> Vec<Sprite> {
        const PAINT_ORDER: [AmbientKind; 6] = [
            AmbientKind::Cloud,
            AmbientKind::Orb,
            AmbientKind::Star,
            AmbientKind::Mote,
            AmbientKind::Ember,
            AmbientKind::Heart,
        ];

        PAINT_ORDER
            .iter()
            .flat_map(|&kind| self.batch(kind).iter())
            .map(|e| e.sprite_at(elapsed_s, viewport))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ambient/motion.rs"]
mod tests;
