use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    assert_eq!(over(dst, [200, 200, 200, 200], 0.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let src = [255, 0, 0, 255];
    assert_eq!(over([0, 0, 0, 255], src, 1.0), src);
}

#[test]
fn over_transparent_dst_keeps_src() {
    let src = [100, 110, 120, 200];
    assert_eq!(over([0, 0, 0, 0], src, 1.0), src);
}

#[test]
fn layers_stack_onto_an_opaque_background() {
    let size = SurfaceSize::new(2, 2);
    let mut frame = background_frame(size, Color::rgb(0, 0, 0));
    let mut layer = FrameRGBA::filled(size, Rgba8Premul::transparent());
    layer.data[..4].copy_from_slice(&[128, 128, 128, 128]);
    composite_over(&mut frame, &layer, 1.0).unwrap();
    assert_eq!(frame.pixel(0, 0), Some([128, 128, 128, 255]));
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 255]));
}

#[test]
fn size_mismatch_is_an_error() {
    let mut a = background_frame(SurfaceSize::new(2, 2), Color::WHITE);
    let b = background_frame(SurfaceSize::new(3, 2), Color::WHITE);
    let err = composite_over(&mut a, &b, 1.0).unwrap_err();
    assert!(matches!(err, GreetfxError::Render(_)));
}
