use crate::{Bounds, Output, Path, Transform, Vector};

/// Saved drawing state over an [`Output`].
///
/// Translations and clips made after a [`save`][`Self::save`] are undone by the matching
/// [`restore`][`Self::restore`]. A clip made inside an already clipped state is kept
/// until the outermost clipped state is restored.
pub struct Canvas<'a, O: Output> {
    onto: &'a mut O,
    transform: Transform,
    clipped: bool,
    saved: Vec<(Transform, bool)>,
}

impl<'a, O: Output> Canvas<'a, O> {
    pub fn new(onto: &'a mut O, transform: Transform) -> Self {
        Self {
            onto,
            transform,
            clipped: false,
            saved: Vec::new(),
        }
    }

    /// The transform applied to everything drawn now.
    #[inline(always)]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn save(&mut self) {
        self.saved.push((self.transform, self.clipped));
    }

    /// Returns to the most recently saved state. Unbalanced calls are ignored.
    pub fn restore(&mut self) {
        let Some((transform, clipped)) = self.saved.pop() else {
            return;
        };

        if self.clipped && !clipped {
            self.onto.reset_clip();
        }

        self.transform = transform;
        self.clipped = clipped;
    }

    /// Moves the origin; applies to what is drawn afterwards.
    pub fn translate(&mut self, x: f32, y: f32) {
        self.transform = self.transform.pre_translate(Vector::new(x, y));
    }

    /// Restricts what is drawn afterwards to the inside of `path`.
    pub fn clip(&mut self, path: &impl Path, frame: Bounds) {
        self.onto.begin_clip();
        self.draw(path, frame);
        self.onto.end_clip();

        self.clipped = true;
    }

    pub fn fill(&mut self, path: &impl Path, frame: Bounds) {
        self.draw(path, frame);
    }

    fn draw(&mut self, path: &impl Path, frame: Bounds) {
        path.draw(
            frame.min.x,
            frame.min.y,
            frame.width(),
            frame.height(),
            &self.transform,
            &mut *self.onto,
        );
    }
}
