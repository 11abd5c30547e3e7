//! Time-based easing of the blob offset back to rest.
//!
//! Both axes share one timeline; there is no way for one to finish, or be cancelled,
//! without the other.

use std::time::{Duration, Instant};

use blink_views::Vector;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Vector {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Vector::new(self.x.lerp(&target.x, fraction), self.y.lerp(&target.y, fraction))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Runs past the target and settles back onto it; higher tension overshoots further.
    Overshoot { tension: f32 },
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);

        match *self {
            Easing::Linear => fraction,
            Easing::Overshoot { tension } => {
                let t = fraction - 1.0;
                t * t * ((tension + 1.0) * t + tension) + 1.0
            }
        }
    }
}

/// One run of the blob from wherever it was released back to its resting offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapBack {
    pub from: Vector,
    pub to: Vector,
    pub started: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl SnapBack {
    /// Linear progress at `now`; 0 before the start, 1 from the end onward.
    pub fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started);
        f32::min(elapsed.as_secs_f32() / self.duration.as_secs_f32(), 1.0)
    }

    /// The offset at `now`, and whether the run is over.
    ///
    /// Once over, the offset is exactly `to`.
    pub fn sample(&self, now: Instant) -> (Vector, bool) {
        let fraction = self.fraction(now);

        if fraction >= 1.0 {
            return (self.to, true);
        }

        let eased = self.easing.transform(fraction);
        (self.from.lerp(self.to, eased), false)
    }
}

/// Holds at most one [`SnapBack`] at a time.
#[derive(Debug, Default)]
pub struct Animator {
    running: Option<SnapBack>,
}

impl Animator {
    /// Replaces whatever was running.
    pub fn start(&mut self, snap_back: SnapBack) {
        self.running = Some(snap_back);
    }

    /// Stops the running animation where it is; returns `false` if nothing was running.
    pub fn cancel(&mut self) -> bool {
        self.running.take().is_some()
    }

    #[inline(always)]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// The animated offset for the frame at `now`, or `None` when idle.
    ///
    /// The frame that reaches the end of the run returns the final offset and leaves the
    /// `Animator` idle.
    pub fn tick(&mut self, now: Instant) -> Option<Vector> {
        let (offset, finished) = self.running.as_ref()?.sample(now);

        if finished {
            self.running = None;
        }

        Some(offset)
    }
}
