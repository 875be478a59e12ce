//! Bubble outline construction.
//!
//! The outline is a closed path made of straight edges and quarter-circle
//! corner arcs, in canvas coordinates (origin top-left, x right, y down).
//! Angles follow the same convention: `0` points along +x and positive sweeps
//! turn clockwise on screen.
//!
//! Only the left-pointing shape is constructed directly; the right-pointing
//! shape is its mirror image across `x = width / 2`.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::{
    foundation::core::{Arc, BezPath, Point, Vec2},
    shape::config::{Orientation, ShapeConfig},
};

/// Flattening tolerance (pixels) used when arcs are converted to cubics.
pub const ARC_TOLERANCE: f64 = 0.1;

const JOIN_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
/// One drawing command of an [`Outline`].
pub enum OutlineSeg {
    /// Start of the contour.
    MoveTo(Point),
    /// Straight edge to a point.
    LineTo(Point),
    /// Circular corner, continuing from the current point.
    ArcTo(Arc),
    /// Close the contour.
    ClosePath,
}

impl OutlineSeg {
    /// Point the pen rests on after this command, if it moves the pen.
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(*p),
            Self::ArcTo(arc) => Some(arc_end(arc)),
            Self::ClosePath => None,
        }
    }

    fn mirrored(&self, width: f64) -> Self {
        match self {
            Self::MoveTo(p) => Self::MoveTo(mirror_point(*p, width)),
            Self::LineTo(p) => Self::LineTo(mirror_point(*p, width)),
            Self::ArcTo(arc) => Self::ArcTo(Arc {
                center: mirror_point(arc.center, width),
                radii: arc.radii,
                start_angle: (PI - arc.start_angle).rem_euclid(TAU),
                sweep_angle: -arc.sweep_angle,
                x_rotation: -arc.x_rotation,
            }),
            Self::ClosePath => Self::ClosePath,
        }
    }
}

/// Point on an axis-aligned arc's ellipse at `angle`.
pub fn arc_point(arc: &Arc, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(
        arc.center.x + arc.radii.x * cos,
        arc.center.y + arc.radii.y * sin,
    )
}

pub fn arc_start(arc: &Arc) -> Point {
    arc_point(arc, arc.start_angle)
}

pub fn arc_end(arc: &Arc) -> Point {
    arc_point(arc, arc.start_angle + arc.sweep_angle)
}

fn mirror_point(p: Point, width: f64) -> Point {
    Point::new(width - p.x, p.y)
}

/// Closed bubble silhouette. Rebuilt wholesale, never edited in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    segs: Vec<OutlineSeg>,
}

impl Outline {
    pub fn segments(&self) -> &[OutlineSeg] {
        &self.segs
    }

    pub fn start_point(&self) -> Option<Point> {
        match self.segs.first() {
            Some(OutlineSeg::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Last point drawn before the contour is closed.
    pub fn end_point(&self) -> Option<Point> {
        self.segs.iter().rev().find_map(OutlineSeg::end_point)
    }

    /// End point of every pen-moving command, in drawing order.
    pub fn vertices(&self) -> Vec<Point> {
        self.segs.iter().filter_map(OutlineSeg::end_point).collect()
    }

    pub fn is_closed(&self) -> bool {
        let (Some(start), Some(end)) = (self.start_point(), self.end_point()) else {
            return false;
        };
        matches!(self.segs.last(), Some(OutlineSeg::ClosePath))
            && (start - end).hypot() <= JOIN_EPSILON
    }

    /// Horizontal mirror image across `x = width / 2`.
    pub fn mirrored(&self, width: f64) -> Self {
        Self {
            segs: self.segs.iter().map(|s| s.mirrored(width)).collect(),
        }
    }

    /// Flatten into a kurbo path; arcs become cubic segments within `tolerance`.
    pub fn to_bezpath(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        for seg in &self.segs {
            match seg {
                OutlineSeg::MoveTo(p) => path.move_to(*p),
                OutlineSeg::LineTo(p) => path.line_to(*p),
                OutlineSeg::ArcTo(arc) => {
                    if arc.radii.x <= 0.0 || arc.radii.y <= 0.0 {
                        path.line_to(arc_end(arc));
                    } else {
                        path.extend(arc.append_iter(tolerance));
                    }
                }
                OutlineSeg::ClosePath => path.close_path(),
            }
        }
        path
    }
}

/// Build the bubble outline for a `width` x `height` canvas.
///
/// Pure and deterministic. Degenerate parameters (corner arcs that overlap,
/// a pointer reaching outside `[0, height]`) still yield a closed path.
/// The effective corner radius is capped at `max(width, height)`.
pub fn build_outline(width: u32, height: u32, config: &ShapeConfig) -> Outline {
    let left = left_outline(f64::from(width), f64::from(height), config);
    match config.orientation {
        Orientation::Left => left,
        Orientation::Right => left.mirrored(f64::from(width)),
    }
}

fn left_outline(w: f64, h: f64, config: &ShapeConfig) -> Outline {
    // Corners wider than the canvas already overlap; the cap keeps arc flattening bounded.
    let r = config.radius.min(w.max(h));
    let d = r * 2.0;
    let vx = config.vertex_x;
    let vy = config.vertex_y;
    let half_hemline = config.hemline_length / 2.0;

    let start = Point::new(vx, vy + half_hemline);
    let segs = vec![
        // pointer
        OutlineSeg::MoveTo(start),
        OutlineSeg::LineTo(Point::new(0.0, vy)),
        OutlineSeg::LineTo(Point::new(vx, vy - half_hemline)),
        OutlineSeg::LineTo(Point::new(vx, r)),
        // body, clockwise from the top-left corner
        OutlineSeg::ArcTo(corner_arc(vx, 0.0, d, PI)),
        OutlineSeg::LineTo(Point::new(w - r, 0.0)),
        OutlineSeg::ArcTo(corner_arc(w - d, 0.0, d, PI + FRAC_PI_2)),
        OutlineSeg::LineTo(Point::new(w, h - r)),
        OutlineSeg::ArcTo(corner_arc(w - d, h - d, d, 0.0)),
        OutlineSeg::LineTo(Point::new(vx + r, h)),
        OutlineSeg::ArcTo(corner_arc(vx, h - d, d, FRAC_PI_2)),
        OutlineSeg::LineTo(start),
        OutlineSeg::ClosePath,
    ];
    Outline { segs }
}

/// Clockwise quarter circle inscribed in the square at `(left, top)` with side `diameter`.
fn corner_arc(left: f64, top: f64, diameter: f64, start_angle: f64) -> Arc {
    let radius = diameter / 2.0;
    Arc {
        center: Point::new(left + radius, top + radius),
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle: FRAC_PI_2,
        x_rotation: 0.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/outline.rs"]
mod tests;
