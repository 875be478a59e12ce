use crate::shape::{
    config::{Orientation, ShapeConfig},
    outline::{Outline, build_outline},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct OutlineKey {
    width: u32,
    height: u32,
    radius: u64,
    vertex_x: u64,
    vertex_y: u64,
    hemline_length: u64,
    orientation: Orientation,
}

impl OutlineKey {
    fn new(width: u32, height: u32, config: &ShapeConfig) -> Self {
        Self {
            width,
            height,
            radius: config.radius.to_bits(),
            vertex_x: config.vertex_x.to_bits(),
            vertex_y: config.vertex_y.to_bits(),
            hemline_length: config.hemline_length.to_bits(),
            orientation: config.orientation,
        }
    }
}

/// Single-slot memo of the last built outline.
///
/// Keyed on canvas size plus every shape parameter that affects geometry;
/// the dimension bounds are not part of the key because they only influence
/// the canvas size.
#[derive(Debug, Default)]
pub struct OutlineCache {
    slot: Option<(OutlineKey, Outline)>,
    hits: u64,
    misses: u64,
}

impl OutlineCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(&mut self, width: u32, height: u32, config: &ShapeConfig) -> &Outline {
        let key = OutlineKey::new(width, height, config);
        if self.slot.as_ref().is_some_and(|(k, _)| *k == key) {
            self.hits += 1;
            tracing::debug!(width, height, "outline cache hit");
        } else {
            self.misses += 1;
            self.slot = None;
            tracing::debug!(width, height, orientation = %config.orientation, "outline cache miss");
        }
        let (_, outline) = self
            .slot
            .get_or_insert_with(|| (key, build_outline(width, height, config)));
        outline
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/cache.rs"]
mod tests;
