use crate::foundation::color::Color;

/// The decorative entity kinds of the ambient layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbientKind {
    Orb,
    Star,
    Cloud,
    Mote,
    Ember,
    Heart,
}

impl AmbientKind {
    pub const ALL: [Self; 6] = [
        Self::Orb,
        Self::Star,
        Self::Cloud,
        Self::Mote,
        Self::Ember,
        Self::Heart,
    ];

    /// Batch size generated at mount.
    pub fn default_count(self) -> usize {
        match self {
            Self::Orb => 20,
            Self::Star => 30,
            Self::Cloud => 6,
            Self::Mote => 50,
            Self::Ember => 35,
            Self::Heart => 40,
        }
    }
}

/// Cycle timing shared by every entity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    pub duration_s: f64,
    /// Always `<= 0`: the cycle starts part-way through.
    pub delay_s: f64,
}

/// Bokeh orb tint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbTint {
    Red,
    Pink,
    Yellow,
    White,
}

impl OrbTint {
    pub const ALL: [Self; 4] = [Self::Red, Self::Pink, Self::Yellow, Self::White];

    pub fn color(self) -> Color {
        match self {
            Self::Red => Color::rgb(0xf8, 0x71, 0x71),
            Self::Pink => Color::rgb(0xf9, 0xa8, 0xd4),
            Self::Yellow => Color::rgb(0xfe, 0xf0, 0x8a),
            Self::White => Color::WHITE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeartGlyph {
    Solid,
    Suit,
}

/// Breathing bokeh orb, centered on (`left`, `top`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Orb {
    pub id: u32,
    pub top: f64,
    pub left: f64,
    pub size: f64,
    pub tint: OrbTint,
    pub timing: Timing,
}

/// Twinkling star.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Star {
    pub id: u32,
    pub top: f64,
    pub left: f64,
    pub size: f64,
    pub timing: Timing,
}

/// Fog bank anchored by its bottom-left corner; may start off-canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cloud {
    pub id: u32,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub timing: Timing,
}

/// Drifting dust mote.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mote {
    pub id: u32,
    pub top: f64,
    pub left: f64,
    pub size: f64,
    pub target_opacity: f64,
    pub timing: Timing,
}

/// Rising ember; starts below the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ember {
    pub id: u32,
    pub left: f64,
    pub size: f64,
    /// Horizontal sway amplitude in px.
    pub sway: f64,
    pub timing: Timing,
}

impl Ember {
    pub const BOTTOM: f64 = -10.0;
}

/// Falling heart glyph; starts above the top edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Heart {
    pub id: u32,
    pub left: f64,
    pub size_rem: f64,
    pub opacity: f64,
    pub glyph: HeartGlyph,
    pub timing: Timing,
}

impl Heart {
    pub const TOP: f64 = -10.0;
    pub const PX_PER_REM: f64 = 16.0;

    pub fn size_px(&self) -> f64 {
        self.size_rem * Self::PX_PER_REM
    }
}

/// One generated ambient entity. Immutable once generated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AmbientEntity {
    Orb(Orb),
    Star(Star),
    Cloud(Cloud),
    Mote(Mote),
    Ember(Ember),
    Heart(Heart),
}

impl AmbientEntity {
    pub fn kind(&self) -> AmbientKind {
        match self {
            Self::Orb(_) => AmbientKind::Orb,
            Self::Star(_) => AmbientKind::Star,
            Self::Cloud(_) => AmbientKind::Cloud,
            Self::Mote(_) => AmbientKind::Mote,
            Self::Ember(_) => AmbientKind::Ember,
            Self::Heart(_) => AmbientKind::Heart,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Self::Orb(e) => e.id,
            Self::Star(e) => e.id,
            Self::Cloud(e) => e.id,
            Self::Mote(e) => e.id,
            Self::Ember(e) => e.id,
            Self::Heart(e) => e.id,
        }
    }

    pub fn timing(&self) -> Timing {
        match self {
            Self::Orb(e) => e.timing,
            Self::Star(e) => e.timing,
            Self::Cloud(e) => e.timing,
            Self::Mote(e) => e.timing,
            Self::Ember(e) => e.timing,
            Self::Heart(e) => e.timing,
        }
    }
}
