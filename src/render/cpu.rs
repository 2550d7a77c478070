use crate::{
    foundation::{
        color::Color,
        core::{Affine, BezPath, Point, SurfaceSize},
        error::{GreetfxError, GreetfxResult},
    },
    render::{
        FrameRGBA,
        surface::{DrawContext, DrawSurface},
    },
};

/// Software-rasterized [`DrawSurface`] backed by `vello_cpu`.
///
/// Sizes that are empty or exceed `u16` leave the surface without a raster, so
/// [`DrawSurface::context`] returns `None` until a usable size arrives.
pub struct CpuSurface {
    size: SurfaceSize,
    raster: Option<CpuRaster>,
}

struct CpuRaster {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl CpuRaster {
    fn new(size: SurfaceSize) -> Option<Self> {
        if size.is_empty() {
            return None;
        }
        let width: u16 = size.width.try_into().ok()?;
        let height: u16 = size.height.try_into().ok()?;
        Some(Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }
}

impl CpuSurface {
    pub fn new(size: SurfaceSize) -> Self {
        let raster = CpuRaster::new(size);
        if raster.is_none() {
            tracing::debug!(width = size.width, height = size.height, "cpu surface has no raster");
        }
        Self { size, raster }
    }

    /// Copy out the last presented pixels (premultiplied).
    pub fn readback(&self) -> GreetfxResult<FrameRGBA> {
        let raster = self.raster.as_ref().ok_or_else(|| {
            GreetfxError::render(format!(
                "cpu surface {}x{} has no raster to read back",
                self.size.width, self.size.height
            ))
        })?;
        Ok(FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data: raster.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl DrawSurface for CpuSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        if size == self.size {
            return;
        }
        self.size = size;
        self.raster = CpuRaster::new(size);
    }

    fn context(&mut self) -> Option<&mut dyn DrawContext> {
        self.raster.as_mut().map(|r| r as &mut dyn DrawContext)
    }
}

impl DrawContext for CpuRaster {
    fn clear(&mut self) {
        self.ctx.reset();
        clear_pixmap(&mut self.pixmap, [0, 0, 0, 0]);
    }

    fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Color, alpha: f32) {
        let Some(paint) = solid_paint(color, alpha) else {
            return;
        };
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(paint);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn present(&mut self) {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        self.ctx.reset();
    }
}

/// Solid paint with `alpha` folded into the color's alpha; `None` when nothing would show.
fn solid_paint(color: Color, alpha: f32) -> Option<vello_cpu::peniko::Color> {
    if alpha.is_nan() || alpha <= 0.0 {
        return None;
    }
    let a = (f32::from(color.a) * alpha.min(1.0)).round() as u8;
    if a == 0 {
        return None;
    }
    Some(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, a,
    ))
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
