//! Geometry of the blob and the placement of what is drawn inside it.
//!
//! Coordinates are relative to the top of the view, horizontally centred: the blob rests
//! on the line `y = height` between `x = -width / 2` and `x = width / 2`.

use blink_views::{Output, Path, Point, Transform, Vector};
use lyon::geom::CubicBezierSegment;

use crate::config::{Config, Damping};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Blob {
    pub width: f32,
    pub height: f32,
    blob_damping: Damping,
    glyph_damping: Damping,
}

impl Blob {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.blob_width,
            height: config.blob_height,
            blob_damping: config.blob_damping,
            glyph_damping: config.glyph_damping,
        }
    }

    #[inline(always)]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline(always)]
    pub fn quarter_width(&self) -> f32 {
        self.width / 4.0
    }

    #[inline(always)]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// The point the outline is pulled toward.
    pub fn apex(&self, offset: Vector) -> Point {
        Point::new(offset.x * self.blob_damping.x, offset.y * self.blob_damping.y)
    }

    /// Two mirrored cubic segments from the left anchor, over the apex, to the right anchor.
    pub fn outline(&self, offset: Vector) -> Outline {
        let apex = self.apex(offset);
        let (half, quarter, base) = (self.half_width(), self.quarter_width(), self.height);

        let rising = CubicBezierSegment {
            from: Point::new(-half, base),
            ctrl1: Point::new(-quarter + apex.x, base),
            ctrl2: Point::new(-quarter + apex.x, apex.y),
            to: apex,
        };

        let falling = CubicBezierSegment {
            from: apex,
            ctrl1: Point::new(quarter + apex.x, apex.y),
            ctrl2: Point::new(quarter + apex.x, base),
            to: Point::new(half, base),
        };

        Outline {
            segments: [rising, falling],
            rgba: [0; 4],
        }
    }

    /// Where the glyphs sit; damped more heavily than the apex so they lag behind it.
    pub fn glyph_offset(&self, offset: Vector) -> Vector {
        Vector::new(
            offset.x * self.glyph_damping.x,
            offset.y * self.glyph_damping.y,
        )
    }

    /// Centre of the home bar; the back and rotate glyphs sit a quarter width either side.
    pub fn glyph_anchor(&self, offset: Vector) -> Point {
        let glyphs = self.glyph_offset(offset);
        Point::new(glyphs.x, glyphs.y + self.half_height())
    }

    pub fn crossfade(&self, offset: Vector) -> Crossfade {
        let glyphs = self.glyph_offset(offset);
        Crossfade::new((glyphs.x / self.quarter_width()).abs() * 100.0)
    }
}

/// The closed blob outline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Outline {
    pub segments: [CubicBezierSegment<f32>; 2],
    pub rgba: [u8; 4],
}

impl Outline {
    pub fn filled(self, rgba: [u8; 4]) -> Self {
        Self { rgba, ..self }
    }
}

impl Path for Outline {
    /// Drawn relative to (`x`, `y`); the outline has its own size.
    fn draw(&self, x: f32, y: f32, _w: f32, _h: f32, transform: &Transform, onto: &mut impl Output) {
        let at = Vector::new(x, y);
        let [rising, falling] = self.segments;

        let from = rising.from + at;
        onto.begin(from.x, from.y, self.rgba, transform);

        for segment in [rising, falling] {
            let (c1, c2, to) = (segment.ctrl1 + at, segment.ctrl2 + at, segment.to + at);
            onto.cubic_bezier_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
        }

        onto.close();
    }
}

/// Opacity, in percent, of the glyphs and of the resting home bar.
///
/// Driven by horizontal drag: the home bar fades out as the glyphs fade in. The
/// threshold is clamped to `0..=100` before either is derived from it, so the two
/// always add up to 100; past a quarter of the blob's width the glyphs saturate at
/// 100 and the home bar at 0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Crossfade {
    pub glyphs: f32,
    pub home_bar: f32,
}

impl Crossfade {
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 100.0)
        };

        Self {
            glyphs: threshold,
            home_bar: 100.0 - threshold,
        }
    }
}

/// Scales the alpha channel of `rgba` by `percent`.
pub fn fade(rgba: [u8; 4], percent: f32) -> [u8; 4] {
    let [r, g, b, a] = rgba;
    let alpha = (a as f32 * percent.clamp(0.0, 100.0) / 100.0).round();

    [r, g, b, alpha as u8]
}
