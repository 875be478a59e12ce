use image::{DynamicImage, RgbaImage};

use crate::{
    assets::source::source_to_rgba8,
    foundation::{
        core::FittedSize,
        error::{BubbleError, BubbleResult},
        math::mul_div255_u8,
    },
    render::{mask::ClipMask, resample::resample_nearest, sizing::fitted_size_for},
    shape::{
        config::ShapeConfig,
        outline::{Outline, build_outline},
    },
};

/// Render `source` into a bubble shape described by `config`.
///
/// Output is a fresh straight-alpha RGBA8 buffer of the fitted size; pixels
/// outside the outline are fully transparent. The source is never modified.
#[tracing::instrument(
    skip(source, config),
    fields(
        src_width = source.width(),
        src_height = source.height(),
        orientation = %config.orientation
    )
)]
pub fn composite(source: &DynamicImage, config: &ShapeConfig) -> BubbleResult<RgbaImage> {
    config.validate()?;
    let rgba = source_to_rgba8(source)?;
    let size = fitted_size_for(rgba.width(), rgba.height(), config)?;
    let outline = build_outline(size.width, size.height, config);
    composite_with_outline(&rgba, size, &outline)
}

/// Resample `source` to `size` and clip it through a prebuilt `outline`.
///
/// For callers that memoize outlines; `outline` must have been built for `size`.
pub fn composite_with_outline(
    source: &RgbaImage,
    size: FittedSize,
    outline: &Outline,
) -> BubbleResult<RgbaImage> {
    if source.width() == 0 || source.height() == 0 {
        return Err(BubbleError::input("source image has zero area"));
    }
    if size.is_empty() {
        return Err(BubbleError::input("target size has zero area"));
    }

    // Mask first: it rejects sizes the rasterizer cannot hold before any large allocation.
    let mask = ClipMask::rasterize(outline, size)?;
    let scaled = resample_nearest(source, size);

    let mut out = RgbaImage::new(size.width, size.height);
    clip_rgba8_straight(scaled.as_raw(), mask.as_slice(), &mut out)?;
    Ok(out)
}

/// Copy `src` pixels into `dst` weighted by `coverage`; `dst` must start transparent.
fn clip_rgba8_straight(src: &[u8], coverage: &[u8], dst: &mut [u8]) -> BubbleResult<()> {
    if src.len() != dst.len() || src.len() != coverage.len() * 4 {
        return Err(BubbleError::render(
            "clip expects rgba8 buffers matching the mask size",
        ));
    }
    for ((s, &c), d) in src
        .chunks_exact(4)
        .zip(coverage)
        .zip(dst.chunks_exact_mut(4))
    {
        let a = mul_div255_u8(u16::from(s[3]), u16::from(c));
        if a == 0 {
            continue;
        }
        d[..3].copy_from_slice(&s[..3]);
        d[3] = a;
    }
    Ok(())
}

/// Pack straight RGBA8 pixels as `0xAARRGGBB` words, row-major.
pub fn to_argb32(image: &RgbaImage) -> Vec<u32> {
    image
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
