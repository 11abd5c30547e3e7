use blink_views::{Bounds, Point, Size};

/// What releasing over a glyph asks the host to do.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Navigation {
    Back,
    Home,
    Recents,
}

impl Navigation {
    /// In left-to-right order.
    pub const ALL: [Navigation; 3] = [Navigation::Back, Navigation::Home, Navigation::Recents];
}

/// The horizontal strip of the view owned by each [`Navigation`].
///
/// The strips share the view's width minus `padding` on both sides equally, and span
/// its full height. Recomputed whenever the view is resized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Zones([(Navigation, Bounds); 3]);

impl Default for Zones {
    fn default() -> Self {
        Zones::layout(Size::zero(), 0.0)
    }
}

impl Zones {
    pub fn layout(size: Size, padding: f32) -> Self {
        let content = f32::max(size.width - 2.0 * padding, 0.0);
        let cell = content / Navigation::ALL.len() as f32;

        Zones(Navigation::ALL.map(|action| {
            let i = action as usize as f32;
            let left = padding + i * cell;

            let bounds = Bounds::new(
                Point::new(left, 0.0),
                Point::new(left + cell, size.height),
            );

            (action, bounds)
        }))
    }

    /// The action whose strip contains `x`; strips are closed on the left and open on
    /// the right. Zero-area strips never match.
    pub fn hit(&self, x: f32) -> Option<Navigation> {
        self.0
            .iter()
            .filter(|(_, bounds)| !bounds.is_empty())
            .find(|(_, bounds)| x >= bounds.min.x && x < bounds.max.x)
            .map(|(action, _)| *action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Navigation, Bounds)> {
        self.0.iter()
    }
}
