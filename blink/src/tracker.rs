use std::time::{Duration, Instant};

use blink_views::{Point, Size, Vector};

use crate::shape::Blob;

/// The bounds a drag is held to, derived from the view's size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Limits {
    /// Horizontal centre of the view; offsets are measured from it.
    pub centre: f32,
    /// The smallest vertical offset a drag may reach.
    pub ceiling: f32,
    /// The blob is open while its vertical offset is at or above this line.
    pub open_at: f32,
}

impl Limits {
    pub fn new(view: Size, blob: &Blob, quickstep_home_height: f32) -> Self {
        Self {
            centre: view.width / 2.0,
            ceiling: view.height - blob.height,
            open_at: blob.half_height() - quickstep_home_height,
        }
    }
}

/// Turns pointer positions into the blob offset and its open state.
#[derive(Debug)]
pub struct Tracker {
    offset: Vector,
    open: bool,
    pressed_at: Option<Instant>,
}

impl Tracker {
    pub fn new(rest: Vector) -> Self {
        Self {
            offset: rest,
            open: false,
            pressed_at: None,
        }
    }

    #[inline(always)]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Moves the blob without pointer input; used while snapping back.
    #[inline(always)]
    pub fn set_offset(&mut self, offset: Vector) {
        self.offset = offset;
    }

    #[inline(always)]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn press(&mut self, at: Instant) {
        self.pressed_at = Some(at);
    }

    /// Follows a single pointer. Returns `false`, leaving the offset as it was, when
    /// more than one pointer is down.
    ///
    /// The vertical offset is clamped to the ceiling rather than rejected.
    pub fn drag(&mut self, location: Point, pointers: u8, limits: &Limits) -> bool {
        if pointers > 1 {
            return false;
        }

        let x = location.x - limits.centre;
        let y = f32::max(location.y, limits.ceiling);

        self.offset = Vector::new(x, y);
        self.open = self.offset.y <= limits.open_at;

        true
    }

    /// Ends the gesture; returns how long it was held, if its start was seen.
    ///
    /// A press is only counted once: a second release without a new press returns `None`.
    pub fn release(&mut self, at: Instant) -> Option<Duration> {
        let pressed = self.pressed_at.take()?;
        Some(at.saturating_duration_since(pressed))
    }
}
