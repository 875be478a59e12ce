use crate::{
    foundation::{
        core::{BezPath, FittedSize},
        error::{BubbleError, BubbleResult},
    },
    shape::outline::{ARC_TOLERANCE, Outline},
};

/// Rasterized outline coverage, one byte per pixel.
///
/// `0` is fully outside, `255` fully inside; edge pixels carry partial
/// anti-aliased coverage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipMask {
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

impl ClipMask {
    /// Fill `outline` in opaque white on a transparent surface and keep the alpha channel.
    pub fn rasterize(outline: &Outline, size: FittedSize) -> BubbleResult<Self> {
        if size.is_empty() {
            return Err(BubbleError::input("cannot rasterize a zero-area clip mask"));
        }
        let width_u16: u16 = size
            .width
            .try_into()
            .map_err(|_| BubbleError::render("clip mask width exceeds u16"))?;
        let height_u16: u16 = size
            .height
            .try_into()
            .map_err(|_| BubbleError::render("clip mask height exceeds u16"))?;

        let path = bezpath_to_cpu(&outline.to_bezpath(ARC_TOLERANCE));

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
        ctx.fill_path(&path);
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        ctx.render_to_pixmap(&mut pixmap);

        let coverage: Vec<u8> = pixmap
            .data_as_u8_slice()
            .chunks_exact(4)
            .map(|px| px[3])
            .collect();
        if coverage.len() as u64 != size.area() {
            return Err(BubbleError::render("clip mask buffer size mismatch"));
        }

        Ok(Self {
            width: size.width,
            height: size.height,
            coverage,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.coverage
    }

    /// Coverage at `(x, y)`; out-of-bounds reads as outside.
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage[y as usize * self.width as usize + x as usize]
    }

    pub fn is_fully_inside(&self, x: u32, y: u32) -> bool {
        self.coverage_at(x, y) == u8::MAX
    }
}

// vello_cpu pins its own kurbo; convert element by element.
fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;
