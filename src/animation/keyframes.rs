use crate::{
    animation::ease::Ease,
    foundation::core::Vec2,
    foundation::error::{GreetfxError, GreetfxResult},
};

/// Interpolation contract for animation value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// One keyframe of a looping track.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Position within the cycle, in `[0, 1]`.
    pub offset: f64,
    /// Value at `offset`.
    pub value: T,
    /// Easing function applied toward the next keyframe.
    pub ease: Ease,
}

impl<T> Keyframe<T> {
    pub fn new(offset: f64, value: T, ease: Ease) -> Self {
        Self { offset, value, ease }
    }
}

/// Keyframes over a normalized cycle, sampled by progress in `[0, 1]`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    keys: Vec<Keyframe<T>>, // sorted by offset, never empty
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn new(keys: Vec<Keyframe<T>>) -> GreetfxResult<Self> {
        if keys.is_empty() {
            return Err(GreetfxError::animation("Keyframes must have at least one key"));
        }
        if keys
            .iter()
            .any(|k| !k.offset.is_finite() || !(0.0..=1.0).contains(&k.offset))
        {
            return Err(GreetfxError::animation(
                "Keyframes offsets must lie within [0, 1]",
            ));
        }
        if !keys.windows(2).all(|w| w[0].offset <= w[1].offset) {
            return Err(GreetfxError::animation(
                "Keyframes keys must be sorted by offset",
            ));
        }
        Ok(Self { keys })
    }

    /// Build from keys already known to be valid (built-in motion tracks).
    pub(crate) fn from_sorted(keys: Vec<Keyframe<T>>) -> Self {
        debug_assert!(!keys.is_empty());
        debug_assert!(keys.windows(2).all(|w| w[0].offset <= w[1].offset));
        Self { keys }
    }

    /// Track that always yields `value`.
    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![Keyframe::new(0.0, value, Ease::Linear)],
        }
    }

    pub fn keys(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    pub fn sample(&self, progress: f64) -> T {
        let p = progress.clamp(0.0, 1.0);
        let idx = self.keys.partition_point(|k| k.offset <= p);

        if idx == 0 {
            return self.keys[0].value.clone();
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value.clone();
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.offset - a.offset;
        if span <= 0.0 {
            return a.value.clone();
        }

        let t = (p - a.offset) / span;
        T::lerp(&a.value, &b.value, a.ease.apply(t))
    }
}

/// Playback direction of an infinitely repeating cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    #[default]
    Normal,
    /// Odd iterations run backwards.
    Alternate,
}

/// Infinite repetition of a keyframe cycle over wall-clock time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cycle {
    pub duration_s: f64,
    /// Start offset; negative values start the cycle part-way through.
    pub delay_s: f64,
    pub direction: Direction,
}

impl Cycle {
    /// Normalized progress within the current iteration at `elapsed_s`.
    ///
    /// Before a positive delay has elapsed the cycle rests at 0.
    pub fn progress(self, elapsed_s: f64) -> f64 {
        if self.duration_s.is_nan() || self.duration_s <= 0.0 {
            return 0.0;
        }
        let local = elapsed_s - self.delay_s;
        if local <= 0.0 {
            return 0.0;
        }
        let iterations = local / self.duration_s;
        let iteration = iterations.floor();
        let frac = iterations - iteration;
        match self.direction {
            Direction::Normal => frac,
            Direction::Alternate if (iteration as u64) % 2 == 1 => 1.0 - frac,
            Direction::Alternate => frac,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
