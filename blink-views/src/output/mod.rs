use crate::Transform;

pub mod gpu;
pub mod svg;

/// A sink for filled paths.
///
/// Paths are streamed as a `begin` followed by segments and an optional `close`. Every
/// `begin` starts a new sub-path; the color and transform given to it apply until the
/// next `begin`.
///
/// Paths streamed between [`begin_clip`][`Self::begin_clip`] and
/// [`end_clip`][`Self::end_clip`] are not filled; they restrict everything filled
/// afterwards until [`reset_clip`][`Self::reset_clip`].
pub trait Output: Sized {
    /// Begins a new sub-path at (`x`, `y`).
    fn begin(&mut self, x: f32, y: f32, rgba: [u8; 4], transform: &Transform);
    /// Adds a line segment to the current sub-path.
    fn line_to(&mut self, x: f32, y: f32);
    /// Adds a quadratic Bézier segment to the current sub-path.
    fn quadratic_bezier_to(&mut self, x1: f32, y1: f32, x: f32, y: f32);
    /// Adds a cubic Bézier segment to the current sub-path.
    fn cubic_bezier_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32);
    /// Closes the current sub-path.
    fn close(&mut self);

    /// Subsequent paths define the clip region.
    fn begin_clip(&mut self);
    /// Ends the clip region; subsequent paths are filled inside it.
    fn end_clip(&mut self);
    /// Removes the current clip region.
    fn reset_clip(&mut self);
}
