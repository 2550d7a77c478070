//! In-memory [`DrawSurface`] that records draw calls instead of rasterizing them.

use kurbo::Shape as _;

use crate::{
    foundation::{
        color::Color,
        core::{Affine, BezPath, Rect, SurfaceSize},
    },
    render::surface::{DrawContext, DrawSurface},
};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Fill {
        /// Bounding box of the transformed path, in surface pixels.
        bounds: Rect,
        color: Color,
        alpha: f32,
    },
    Present,
}

#[derive(Clone, Debug, Default)]
struct Recorder {
    calls: Vec<DrawCall>,
}

impl DrawContext for Recorder {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Color, alpha: f32) {
        let bounds = (transform * path.clone()).bounding_box();
        self.calls.push(DrawCall::Fill {
            bounds,
            color,
            alpha,
        });
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}

/// Surface fake for scheduler and scene tests.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: SurfaceSize,
    available: bool,
    recorder: Recorder,
}

impl RecordingSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            available: true,
            recorder: Recorder::default(),
        }
    }

    /// While unavailable, [`DrawSurface::context`] returns `None`.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.recorder.calls
    }

    pub fn fill_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::Fill { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn context(&mut self) -> Option<&mut dyn DrawContext> {
        if !self.available {
            return None;
        }
        Some(&mut self.recorder)
    }
}
