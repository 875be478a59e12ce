use image::{
    RgbaImage,
    imageops::{self, FilterType},
};

use crate::foundation::core::FittedSize;

/// Unfiltered (nearest-neighbour) rescale into a new buffer.
pub fn resample_nearest(source: &RgbaImage, size: FittedSize) -> RgbaImage {
    if source.dimensions() == (size.width, size.height) {
        return source.clone();
    }
    imageops::resize(source, size.width, size.height, FilterType::Nearest)
}

#[cfg(test)]
#[path = "../../tests/unit/render/resample.rs"]
mod tests;
