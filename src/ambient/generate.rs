use crate::{
    ambient::model::{
        AmbientEntity, AmbientKind, Cloud, Ember, Heart, HeartGlyph, Mote, Orb, OrbTint, Star,
        Timing,
    },
    foundation::rng::{RandomSource, pick},
};

/// Generation ranges, as `(lo, hi)` uniform bounds.
pub mod ranges {
    pub const PERCENT: (f64, f64) = (0.0, 100.0);

    pub const ORB_SIZE: (f64, f64) = (50.0, 200.0);
    pub const ORB_DURATION: (f64, f64) = (6.0, 16.0);
    pub const ORB_DELAY_WINDOW: f64 = 20.0;

    pub const STAR_SIZE: (f64, f64) = (2.0, 6.0);
    pub const STAR_DURATION: (f64, f64) = (2.0, 5.0);
    pub const STAR_DELAY_WINDOW: f64 = 5.0;

    pub const CLOUD_BOTTOM: (f64, f64) = (-20.0, 40.0);
    pub const CLOUD_LEFT: (f64, f64) = (-20.0, 80.0);
    pub const CLOUD_WIDTH: (f64, f64) = (300.0, 700.0);
    pub const CLOUD_HEIGHT: (f64, f64) = (150.0, 300.0);
    pub const CLOUD_DURATION: (f64, f64) = (30.0, 60.0);
    pub const CLOUD_DELAY_WINDOW: f64 = 30.0;

    pub const MOTE_SIZE: (f64, f64) = (1.0, 4.0);
    pub const MOTE_OPACITY: (f64, f64) = (0.3, 0.8);
    pub const MOTE_DURATION: (f64, f64) = (12.0, 30.0);
    pub const MOTE_DELAY_WINDOW: f64 = 20.0;

    pub const EMBER_SIZE: (f64, f64) = (2.0, 6.0);
    pub const EMBER_SWAY: (f64, f64) = (20.0, 50.0);
    pub const EMBER_DURATION: (f64, f64) = (15.0, 30.0);
    pub const EMBER_DELAY_WINDOW: f64 = 20.0;

    pub const HEART_SIZE_REM: (f64, f64) = (0.5, 2.0);
    pub const HEART_OPACITY: (f64, f64) = (0.2, 0.6);
    pub const HEART_DURATION: (f64, f64) = (8.0, 18.0);
    pub const HEART_DELAY_WINDOW: f64 = 20.0;
}

fn draw(rng: &mut dyn RandomSource, (lo, hi): (f64, f64)) -> f64 {
    rng.range(lo, hi)
}

fn timing(rng: &mut dyn RandomSource, duration: (f64, f64), delay_window: f64) -> Timing {
    let duration_s = draw(rng, duration);
    // + 0.0 folds -0.0 into 0.0
    let delay_s = -(rng.next_f64() * delay_window) + 0.0;
    Timing {
        duration_s,
        delay_s,
    }
}

/// Build `count` entities of `kind`, with ids `0..count` in order.
pub fn generate(kind: AmbientKind, count: usize, rng: &mut dyn RandomSource) -> Vec<AmbientEntity> {
    use ranges::*;

    (0..count)
        .map(|i| {
            let id = u32::try_from(i).unwrap_or(u32::MAX);
            match kind {
                AmbientKind::Orb => AmbientEntity::Orb(Orb {
                    id,
                    top: draw(rng, PERCENT),
                    left: draw(rng, PERCENT),
                    size: draw(rng, ORB_SIZE),
                    tint: *pick(rng, &OrbTint::ALL),
                    timing: timing(rng, ORB_DURATION, ORB_DELAY_WINDOW),
                }),
                AmbientKind::Star => AmbientEntity::Star(Star {
                    id,
                    top: draw(rng, PERCENT),
                    left: draw(rng, PERCENT),
                    size: draw(rng, STAR_SIZE),
                    timing: timing(rng, STAR_DURATION, STAR_DELAY_WINDOW),
                }),
                AmbientKind::Cloud => {
                    let bottom = draw(rng, CLOUD_BOTTOM);
                    let left = draw(rng, CLOUD_LEFT);
                    let width = draw(rng, CLOUD_WIDTH);
                    let height = draw(rng, CLOUD_HEIGHT);
                    AmbientEntity::Cloud(Cloud {
                        id,
                        bottom,
                        left,
                        width,
                        height,
                        timing: timing(rng, CLOUD_DURATION, CLOUD_DELAY_WINDOW),
                    })
                }
                AmbientKind::Mote => AmbientEntity::Mote(Mote {
                    id,
                    top: draw(rng, PERCENT),
                    left: draw(rng, PERCENT),
                    size: draw(rng, MOTE_SIZE),
                    target_opacity: draw(rng, MOTE_OPACITY),
                    timing: timing(rng, MOTE_DURATION, MOTE_DELAY_WINDOW),
                }),
                AmbientKind::Ember => {
                    let left = draw(rng, PERCENT);
                    let size = draw(rng, EMBER_SIZE);
                    let timing = timing(rng, EMBER_DURATION, EMBER_DELAY_WINDOW);
                    AmbientEntity::Ember(Ember {
                        id,
                        left,
                        size,
                        sway: draw(rng, EMBER_SWAY),
                        timing,
                    })
                }
                AmbientKind::Heart => {
                    let left = draw(rng, PERCENT);
                    let timing = timing(rng, HEART_DURATION, HEART_DELAY_WINDOW);
                    let size_rem = draw(rng, HEART_SIZE_REM);
                    let opacity = draw(rng, HEART_OPACITY);
                    let glyph = if rng.next_f64() > 0.5 {
                        HeartGlyph::Solid
                    } else {
                        HeartGlyph::Suit
                    };
                    AmbientEntity::Heart(Heart {
                        id,
                        left,
                        size_rem,
                        opacity,
                        glyph,
                        timing,
                    })
                }
            }
        })
        .collect()
}

/// One kind's generated batch.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Batch {
    pub kind: AmbientKind,
    pub entities: Vec<AmbientEntity>,
}

/// Every ambient batch of a mounted scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AmbientLayer {
    batches: Vec<Batch>, // in AmbientKind::ALL order
}

impl AmbientLayer {
    /// Generate all kinds at their default counts.
    #[tracing::instrument(skip(rng))]
    pub fn generate(rng: &mut dyn RandomSource) -> Self {
        let batches = AmbientKind::ALL
            .iter()
            .map(|&kind| Batch {
                kind,
                entities: generate(kind, kind.default_count(), rng),
            })
            .collect::<Vec<_>>();
        tracing::debug!(
            entities = batches.iter().map(|b| b.entities.len()).sum::<usize>(),
            "ambient layer generated"
        );
        Self { batches }
    }

    pub fn batch(&self, kind: AmbientKind) -> &[AmbientEntity] {
        self.batches
            .iter()
            .find(|b| b.kind == kind)
            .map(|b| b.entities.as_slice())
            .unwrap_or(&[])
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn len(&self) -> usize {
        self.batches.iter().map(|b| b.entities.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ambient/generate.rs"]
mod tests;
