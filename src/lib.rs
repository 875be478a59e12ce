//! Render images into speech-bubble shapes.
//!
//! A bubble is a rounded rectangle with a triangular pointer on its left or
//! right edge. Given a decoded source image and a [`ShapeConfig`], the crate
//! produces a new straight-alpha RGBA8 buffer where everything outside the
//! bubble is fully transparent.
//!
//! # Pipeline overview
//!
//! 1. **Fit**: clamp the source's dominant axis into `[min_dimension, max_dimension]`
//!    ([`fit`], [`fitted_size_for`])
//! 2. **Outline**: build the closed bubble path for that size ([`build_outline`])
//! 3. **Resample**: nearest-neighbour scale of the source ([`resample_nearest`])
//! 4. **Clip**: rasterize the outline into coverage ([`ClipMask`]) and copy the
//!    resampled pixels through it ([`composite`])
//!
//! Every step is a pure function returning fresh values. [`BubbleImage`] adds
//! ownership of a single current output plus outline memoization for hosts
//! that keep a long-lived view.
//!
//! # Getting started
//!
//! ```no_run
//! use bubble_image::{Orientation, ShapeConfig, composite};
//!
//! let source = image::open("photo.png")?;
//! let config = ShapeConfig::default().with_orientation(Orientation::Right);
//! let bubble = composite(&source, &config)?;
//! bubble.save("bubble.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod render;
mod shape;
mod view;

pub use assets::source::{is_supported_color, source_to_rgba8};
pub use foundation::core::{Arc, BezPath, FittedSize, Point, Vec2};
pub use foundation::error::{BubbleError, BubbleResult};
pub use render::composite::{composite, composite_with_outline, to_argb32};
pub use render::mask::ClipMask;
pub use render::resample::resample_nearest;
pub use render::sizing::{fit, fitted_size_for};
pub use shape::cache::OutlineCache;
pub use shape::config::{
    DEFAULT_HEMLINE_LENGTH, DEFAULT_MAX_DIMENSION, DEFAULT_MIN_DIMENSION, DEFAULT_RADIUS,
    DEFAULT_VERTEX_X, DEFAULT_VERTEX_Y, Orientation, ShapeConfig,
};
pub use shape::outline::{
    ARC_TOLERANCE, Outline, OutlineSeg, arc_end, arc_point, arc_start, build_outline,
};
pub use view::bubble_image::BubbleImage;
