use image::{DynamicImage, RgbaImage};

use crate::{
    assets::source::source_to_rgba8,
    foundation::error::BubbleResult,
    render::{composite::composite_with_outline, sizing::fitted_size_for},
    shape::{
        cache::OutlineCache,
        config::{Orientation, ShapeConfig},
    },
};

/// Owner of the current composited bubble buffer.
///
/// Holds at most one output at a time. Replacing the source drops the old
/// output immediately, and [`BubbleImage::release`] may be called any number
/// of times.
#[derive(Debug)]
pub struct BubbleImage {
    config: ShapeConfig,
    outlines: OutlineCache,
    current: Option<RgbaImage>,
}

impl BubbleImage {
    pub fn new(config: ShapeConfig) -> BubbleResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            outlines: OutlineCache::new(),
            current: None,
        })
    }

    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Replace the whole shape configuration. The current output is kept until the next
    /// [`BubbleImage::set_image`].
    pub fn set_config(&mut self, config: ShapeConfig) -> BubbleResult<()> {
        config.validate()?;
        if config != self.config {
            self.config = config;
            self.outlines.invalidate();
        }
        Ok(())
    }

    /// Composite `source` and make it the current output.
    ///
    /// On failure the previous output stays in place.
    #[tracing::instrument(skip(self, source), fields(src_width = source.width(), src_height = source.height()))]
    pub fn set_image(&mut self, source: &DynamicImage) -> BubbleResult<&RgbaImage> {
        let rgba = source_to_rgba8(source)?;
        let size = fitted_size_for(rgba.width(), rgba.height(), &self.config)?;
        let outline = self
            .outlines
            .get_or_build(size.width, size.height, &self.config);
        let out = composite_with_outline(&rgba, size, outline)?;

        let replaced = self.current.take().is_some();
        tracing::debug!(
            width = size.width,
            height = size.height,
            replaced,
            "bubble image updated"
        );
        Ok(self.current.insert(out))
    }

    /// Change the pointer side. Takes effect on the next [`BubbleImage::set_image`].
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.config.orientation != orientation {
            self.config.orientation = orientation;
            self.outlines.invalidate();
        }
    }

    /// [`BubbleImage::set_orientation`] from a host integer code.
    pub fn set_orientation_code(&mut self, code: i32) -> BubbleResult<()> {
        self.set_orientation(Orientation::from_code(code)?);
        Ok(())
    }

    pub fn current(&self) -> Option<&RgbaImage> {
        self.current.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    /// Hand the current output to the caller, leaving this entity empty.
    pub fn take(&mut self) -> Option<RgbaImage> {
        self.current.take()
    }

    /// Drop the current output. Returns whether a buffer was actually freed.
    pub fn release(&mut self) -> bool {
        let released = self.current.take().is_some();
        if released {
            tracing::debug!("released bubble image buffer");
        }
        released
    }

    pub fn outline_cache(&self) -> &OutlineCache {
        &self.outlines
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/bubble_image.rs"]
mod tests;
