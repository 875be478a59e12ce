use crate::{
    foundation::{
        core::FittedSize,
        error::{BubbleError, BubbleResult},
        math::scale_truncating,
    },
    shape::config::ShapeConfig,
};

/// Clamp the dominant axis of `original_width` x `original_height` into
/// `[min_dimension, max_dimension]`, deriving the other axis proportionally.
///
/// Width dominates only when strictly larger; squares take the height branch.
/// The derived axis is not clamped and may fall outside the bounds.
/// Returns `None` if the derived axis does not fit in `u32`.
pub fn fit(
    original_width: u32,
    original_height: u32,
    min_dimension: u32,
    max_dimension: u32,
) -> Option<FittedSize> {
    if original_width > original_height {
        let (width, height) =
            clamp_dominant(original_width, original_height, min_dimension, max_dimension)?;
        Some(FittedSize::new(width, height))
    } else {
        let (height, width) =
            clamp_dominant(original_height, original_width, min_dimension, max_dimension)?;
        Some(FittedSize::new(width, height))
    }
}

fn clamp_dominant(dominant: u32, other: u32, min: u32, max: u32) -> Option<(u32, u32)> {
    if dominant > max {
        Some((max, scale_truncating(other, max, dominant)?))
    } else if dominant < min && dominant > 0 {
        Some((min, scale_truncating(other, min, dominant)?))
    } else {
        Some((dominant, other))
    }
}

/// Fitted output size for a source of the given dimensions under `config`.
///
/// Fails on an empty source, when the derived axis overflows, or when
/// truncation collapses an axis to zero (extreme aspect ratios scaled down hard).
pub fn fitted_size_for(width: u32, height: u32, config: &ShapeConfig) -> BubbleResult<FittedSize> {
    if width == 0 || height == 0 {
        return Err(BubbleError::input(format!(
            "source image has zero area ({width}x{height})"
        )));
    }
    let size = fit(
        width,
        height,
        config.min_dimension_px(),
        config.max_dimension_px(),
    )
    .ok_or_else(|| {
        BubbleError::input(format!("fitted size of {width}x{height} overflows u32"))
    })?;
    if size.is_empty() {
        return Err(BubbleError::input(format!(
            "fitted size of {width}x{height} collapses to {}x{}",
            size.width, size.height
        )));
    }
    tracing::debug!(
        src_width = width,
        src_height = height,
        width = size.width,
        height = size.height,
        "fitted bubble size"
    );
    Ok(size)
}

#[cfg(test)]
#[path = "../../tests/unit/render/sizing.rs"]
mod tests;
