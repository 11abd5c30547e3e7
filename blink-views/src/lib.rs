use std::time::Instant;

pub use lyon::math::{Box2D as Bounds, Point, Size, Transform, Vector};

pub use canvas::Canvas;
pub use output::{gpu, svg, Output};
pub use shapes::{Circle, Rectangle, RoundedRectangle};
pub use shapes::{Path, K};

mod canvas;
mod output;
mod shapes;

/// User interface element drawn into an [`Output`].
pub trait View: Sized {
    /// The intrinsic size of the `View`
    fn size(&self) -> Size;
    /// How the `View` is drawn
    fn draw(&self, bounds: Bounds, onto: &mut impl Output);

    /// `true` while the `View` has not been given a usable size.
    ///
    /// A host should call [`update_layout`][`Self::update_layout`] before the next
    /// [`draw`][`Self::draw`] when this returns `true`; drawing before then is a no-op.
    #[inline(always)]
    fn needs_layout(&self) -> bool {
        false
    }

    /// Gives the `View` its measured size.
    #[inline(always)]
    fn update_layout(&self, _size: Size, _bounds: Bounds) {}
}

/// [`View`] events.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    Gesture {
        gesture: Gesture,
        location: Point,
        at: Instant,
    },
    Resize {
        width: u32,
        height: u32,
    },
    /// A display frame is about to be produced.
    Frame(Instant),
}

/// touches… buttons…
///
/// `n` is the number of pointers down when the event was produced.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Gesture {
    Began { n: u8 },
    Moved { n: u8 },
    Ended { n: u8 },
}

impl Gesture {
    /// Number of pointers involved in the gesture.
    #[inline(always)]
    pub fn pointers(&self) -> u8 {
        match *self {
            Gesture::Began { n } | Gesture::Moved { n } | Gesture::Ended { n } => n,
        }
    }
}

impl Event {
    /// Single-pointer gesture event; the common case for touch input.
    pub fn touch(gesture: fn(u8) -> Gesture, x: f32, y: f32, at: Instant) -> Self {
        Event::Gesture {
            gesture: gesture(1),
            location: Point::new(x, y),
            at,
        }
    }
}

/// Constructors to pass to [`Event::touch`].
impl Gesture {
    pub fn began(n: u8) -> Self {
        Gesture::Began { n }
    }

    pub fn moved(n: u8) -> Self {
        Gesture::Moved { n }
    }

    pub fn ended(n: u8) -> Self {
        Gesture::Ended { n }
    }
}

#[test]
fn gesture_pointer_counts() {
    assert_eq!(Gesture::Began { n: 1 }.pointers(), 1);
    assert_eq!(Gesture::moved(2).pointers(), 2);
    assert_eq!(Gesture::ended(3), Gesture::Ended { n: 3 });
}
