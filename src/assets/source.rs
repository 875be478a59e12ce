use std::borrow::Cow;

use image::{ColorType, DynamicImage, RgbaImage};

use crate::foundation::error::{BubbleError, BubbleResult};

/// Whether a decoded layout can be translated to straight RGBA8 for compositing.
pub fn is_supported_color(color: ColorType) -> bool {
    matches!(
        color,
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8
    )
}

/// Translate a decoded source image to straight-alpha RGBA8.
///
/// RGBA8 sources are borrowed as-is. Opaque RGB8 and 8-bit grey sources are
/// expanded. Wider layouts (16-bit, float) are rejected rather than silently
/// quantized.
pub fn source_to_rgba8(image: &DynamicImage) -> BubbleResult<Cow<'_, RgbaImage>> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(BubbleError::input(format!(
            "source image has zero area ({width}x{height})"
        )));
    }

    match image {
        DynamicImage::ImageRgba8(rgba) => Ok(Cow::Borrowed(rgba)),
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) | DynamicImage::ImageLumaA8(_) => {
            Ok(Cow::Owned(image.to_rgba8()))
        }
        other => {
            let color = other.color();
            tracing::warn!(?color, "rejecting unsupported source pixel format");
            Err(BubbleError::input(format!(
                "unsupported source pixel format {color:?} (expected L8, La8, Rgb8 or Rgba8)"
            )))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
