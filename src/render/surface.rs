use crate::foundation::{
    color::Color,
    core::{Affine, BezPath, SurfaceSize},
};

/// Immediate-mode 2D drawing operations on an acquired surface.
pub trait DrawContext {
    /// Clear every pixel to transparent.
    fn clear(&mut self);

    /// Fill `path` (in local coordinates) mapped through `transform`, with `color` scaled by
    /// the global `alpha`.
    fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Color, alpha: f32);

    /// Make everything drawn since the last clear visible.
    fn present(&mut self);
}

/// A resizable drawing target that may fail to hand out a context.
pub trait DrawSurface {
    fn size(&self) -> SurfaceSize;

    /// Changing the size may drop the current pixels.
    fn resize(&mut self, size: SurfaceSize);

    /// `None` when no drawing context can be acquired right now.
    fn context(&mut self) -> Option<&mut dyn DrawContext>;
}
