use super::*;
use crate::foundation::core::Rect;
use kurbo::Shape as _;

fn square(side: f64) -> BezPath {
    Rect::new(0.0, 0.0, side, side).to_path(0.1)
}

#[test]
fn filled_rect_reads_back_premultiplied() {
    let mut surface = CpuSurface::new(SurfaceSize::new(32, 32));
    let ctx = surface.context().expect("raster");
    ctx.clear();
    ctx.fill_path(
        &square(16.0),
        Affine::translate((8.0, 8.0)),
        Color::rgb(255, 0, 0),
        1.0,
    );
    ctx.present();

    let frame = surface.readback().unwrap();
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(16, 16), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 0]));
}

#[test]
fn global_alpha_scales_coverage() {
    let mut surface = CpuSurface::new(SurfaceSize::new(16, 16));
    let ctx = surface.context().expect("raster");
    ctx.clear();
    ctx.fill_path(&square(16.0), Affine::IDENTITY, Color::WHITE, 0.5);
    ctx.present();

    let px = surface.readback().unwrap().pixel(8, 8).unwrap();
    assert!((120..=136).contains(&px[3]), "alpha = {}", px[3]);
    assert_eq!(px[0], px[3]);
}

#[test]
fn clear_wipes_presented_pixels() {
    let mut surface = CpuSurface::new(SurfaceSize::new(8, 8));
    let ctx = surface.context().expect("raster");
    ctx.fill_path(&square(8.0), Affine::IDENTITY, Color::WHITE, 1.0);
    ctx.present();
    ctx.clear();
    ctx.present();
    let frame = surface.readback().unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn unusable_sizes_have_no_context() {
    let mut empty = CpuSurface::new(SurfaceSize::new(0, 10));
    assert!(empty.context().is_none());
    assert!(empty.readback().is_err());

    let mut huge = CpuSurface::new(SurfaceSize::new(70_000, 10));
    assert!(huge.context().is_none());

    empty.resize(SurfaceSize::new(4, 4));
    assert!(empty.context().is_some());
    assert_eq!(empty.size(), SurfaceSize::new(4, 4));
}

#[test]
fn folded_alpha_matches_opacity_layer() {
    let size = SurfaceSize::new(24, 24);
    let color = Color::rgb(255, 77, 109);
    let transform = Affine::translate((4.0, 4.0));

    let mut surface = CpuSurface::new(size);
    let ctx = surface.context().expect("raster");
    ctx.clear();
    ctx.fill_path(&square(16.0), transform, color, 0.5);
    ctx.present();
    let folded = surface.readback().unwrap();

    let mut layered = CpuRaster::new(size).expect("raster");
    layered.clear();
    layered.ctx.set_transform(affine_to_cpu(transform));
    layered
        .ctx
        .set_paint(vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, color.a));
    layered.ctx.push_opacity_layer(0.5);
    layered.ctx.fill_path(&bezpath_to_cpu(&square(16.0)));
    layered.ctx.pop_layer();
    layered.present();

    let expected = layered.pixmap.data_as_u8_slice();
    assert_eq!(folded.data.len(), expected.len());
    for (i, (&a, &b)) in folded.data.iter().zip(expected).enumerate() {
        assert!(a.abs_diff(b) <= 1, "byte {i}: folded {a}, layered {b}");
    }
    assert!(folded.pixel(12, 12).is_some_and(|px| px[3] > 0));
}

#[test]
fn alpha_that_rounds_to_zero_draws_nothing() {
    let mut surface = CpuSurface::new(SurfaceSize::new(8, 8));
    let ctx = surface.context().expect("raster");
    ctx.clear();
    ctx.fill_path(&square(8.0), Affine::IDENTITY, Color::WHITE, 0.001);
    ctx.fill_path(&square(8.0), Affine::IDENTITY, Color::WHITE, f32::NAN);
    ctx.present();
    assert!(surface.readback().unwrap().data.iter().all(|&b| b == 0));
}
