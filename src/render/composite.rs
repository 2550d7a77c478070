//! Premultiplied RGBA8 compositing of read-back frames.

use crate::{
    foundation::{
        color::Color,
        core::{Rgba8Premul, SurfaceSize},
        error::{GreetfxError, GreetfxResult},
    },
    render::FrameRGBA,
};

pub type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel, with `src` scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Composite `src` over `dst` in place. Both frames must be premultiplied and equally sized.
pub fn composite_over(dst: &mut FrameRGBA, src: &FrameRGBA, opacity: f32) -> GreetfxResult<()> {
    if dst.width != src.width || dst.height != src.height {
        return Err(GreetfxError::render(format!(
            "composite size mismatch: {}x{} over {}x{}",
            src.width, src.height, dst.width, dst.height
        )));
    }
    if !dst.premultiplied || !src.premultiplied {
        return Err(GreetfxError::render("composite expects premultiplied frames"));
    }
    if dst.data.len() != src.data.len() || !dst.data.len().is_multiple_of(4) {
        return Err(GreetfxError::render(
            "composite expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.data.chunks_exact_mut(4).zip(src.data.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// An opaque frame of `background`, ready to receive layers.
pub fn background_frame(size: SurfaceSize, background: Color) -> FrameRGBA {
    FrameRGBA::filled(
        size,
        Rgba8Premul::from_straight_rgba(background.r, background.g, background.b, 255),
    )
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
