use std::{fmt, str::FromStr};

use crate::foundation::error::{BubbleError, BubbleResult};

/// Default corner radius in pixels.
pub const DEFAULT_RADIUS: f64 = 12.0;
/// Default horizontal distance from the pointer tip to the bubble body.
pub const DEFAULT_VERTEX_X: f64 = 30.0;
/// Default vertical position of the pointer tip.
pub const DEFAULT_VERTEX_Y: f64 = 50.0;
/// Default base width of the pointer triangle.
pub const DEFAULT_HEMLINE_LENGTH: f64 = 27.0;
/// Default upper bound for the dominant image axis.
pub const DEFAULT_MAX_DIMENSION: f64 = 360.0;
/// Default lower bound for the dominant image axis.
pub const DEFAULT_MIN_DIMENSION: f64 = 180.0;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Which vertical edge carries the pointer triangle.
pub enum Orientation {
    /// Pointer on the left edge, tip at `x = 0`.
    #[default]
    Left,
    /// Pointer on the right edge, tip at `x = width`.
    Right,
}

impl Orientation {
    /// Integer code for [`Orientation::Right`] in host attribute tables.
    pub const RIGHT_CODE: i32 = 0;
    /// Integer code for [`Orientation::Left`] in host attribute tables.
    pub const LEFT_CODE: i32 = 1;

    /// Map a host integer code to an orientation.
    pub fn from_code(code: i32) -> BubbleResult<Self> {
        match code {
            Self::RIGHT_CODE => Ok(Self::Right),
            Self::LEFT_CODE => Ok(Self::Left),
            other => Err(BubbleError::configuration(format!(
                "orientation code {other} is illegal (expected {} or {})",
                Self::RIGHT_CODE,
                Self::LEFT_CODE
            ))),
        }
    }

    /// Host integer code of this orientation.
    pub fn code(self) -> i32 {
        match self {
            Self::Right => Self::RIGHT_CODE,
            Self::Left => Self::LEFT_CODE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = BubbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(BubbleError::configuration(format!(
                "unknown orientation '{s}' (expected 'left' or 'right')"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Shape parameters of a bubble.
///
/// All lengths are in output pixels. Missing JSON fields fall back to the
/// `DEFAULT_*` constants.
pub struct ShapeConfig {
    /// Corner radius of the rounded body.
    pub radius: f64,
    /// Distance from the pointer tip to the body edge.
    pub vertex_x: f64,
    /// Vertical position of the pointer tip, measured from the top.
    pub vertex_y: f64,
    /// Base width of the pointer triangle.
    pub hemline_length: f64,
    /// Upper clamp for the dominant image axis.
    pub max_dimension: f64,
    /// Lower clamp for the dominant image axis.
    pub min_dimension: f64,
    /// Edge carrying the pointer.
    pub orientation: Orientation,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            vertex_x: DEFAULT_VERTEX_X,
            vertex_y: DEFAULT_VERTEX_Y,
            hemline_length: DEFAULT_HEMLINE_LENGTH,
            max_dimension: DEFAULT_MAX_DIMENSION,
            min_dimension: DEFAULT_MIN_DIMENSION,
            orientation: Orientation::Left,
        }
    }
}

impl ShapeConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json_str(json: &str) -> BubbleResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BubbleError::configuration(format!("invalid shape config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Reject negative or non-finite lengths and inverted dimension bounds.
    ///
    /// Geometric degeneracy (overlapping corners, a pointer outside the body)
    /// is not checked here.
    pub fn validate(&self) -> BubbleResult<()> {
        for (name, value) in [
            ("radius", self.radius),
            ("vertex_x", self.vertex_x),
            ("vertex_y", self.vertex_y),
            ("hemline_length", self.hemline_length),
            ("max_dimension", self.max_dimension),
            ("min_dimension", self.min_dimension),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BubbleError::configuration(format!(
                    "{name} must be finite and >= 0 (got {value})"
                )));
            }
        }
        if self.max_dimension < self.min_dimension {
            return Err(BubbleError::configuration(format!(
                "max_dimension ({}) must be >= min_dimension ({})",
                self.max_dimension, self.min_dimension
            )));
        }
        Ok(())
    }

    // Float bounds truncate toward zero, like an integer cast.
    pub(crate) fn max_dimension_px(&self) -> u32 {
        self.max_dimension as u32
    }

    pub(crate) fn min_dimension_px(&self) -> u32 {
        self.min_dimension as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/config.rs"]
mod tests;
