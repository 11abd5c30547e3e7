use std::cell::Cell;
use std::time::Instant;

use blink_views::{Bounds, Canvas, Event, Gesture, Output, Point, Rectangle, Size, Transform};
use blink_views::{Vector, View};
use tracing::{debug, trace};

use crate::animator::{Animator, Easing, SnapBack};
use crate::config::{self, Config};
use crate::glyphs::{Back, Rotate};
use crate::shape::{fade, Blob};
use crate::tracker::{Limits, Tracker};
use crate::zones::{Navigation, Zones};

/// Requests a [`BlinkView`] makes of its host.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Effect {
    /// The view should be drawn again.
    Invalidate,
    /// The gesture was released over a navigation glyph while the blob was open.
    Navigate(Navigation),
    /// A long press was released at the top edge of the view.
    Assist,
}

/// The navigation blob.
///
/// Events go in through [`reduce`][`Self::reduce`]; drawing goes through [`View`]. A
/// fresh `BlinkView` rests at `(0, blob_height)` and draws nothing until it is given
/// a size, either by an [`Event::Resize`] or by [`View::update_layout`].
///
/// ```
/// use std::time::{Duration, Instant};
/// use blink::{BlinkView, Config, Effect, Navigation};
/// use blink_views::{Event, Gesture};
///
/// let mut blink = BlinkView::new(Config::default());
/// let mut effects = Vec::new();
/// let start = Instant::now();
///
/// blink.reduce(Event::Resize { width: 400, height: 64 }, &mut effects);
/// blink.reduce(Event::touch(Gesture::began, 200.0, 60.0, start), &mut effects);
/// blink.reduce(Event::touch(Gesture::moved, 200.0, 0.0, start), &mut effects);
/// assert!(blink.is_open());
///
/// effects.clear();
/// blink.reduce(Event::touch(Gesture::ended, 200.0, 0.0, start), &mut effects);
/// assert_eq!(effects, [Effect::Navigate(Navigation::Home), Effect::Invalidate]);
/// assert!(!blink.is_open());
///
/// blink.reduce(Event::Frame(start + Duration::from_millis(500)), &mut effects);
/// assert_eq!(blink.offset(), blink_views::Vector::new(0.0, 64.0));
/// ```
pub struct BlinkView {
    config: Config,
    blob: Blob,
    size: Cell<Size>,
    zones: Cell<Zones>,
    tracker: Tracker,
    animator: Animator,
}

impl BlinkView {
    /// Builds a view from an already validated `config`; see [`try_new`][`Self::try_new`].
    pub fn new(config: Config) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid config: {config:?}");

        let blob = Blob::new(&config);

        Self {
            tracker: Tracker::new(Vector::new(0.0, blob.height)),
            animator: Animator::default(),
            size: Cell::new(Size::zero()),
            zones: Cell::default(),
            config,
            blob,
        }
    }

    /// Builds a view after checking `config` with [`Config::validate`].
    pub fn try_new(config: Config) -> Result<Self, config::Error> {
        config.validate()?;
        Ok(Self::new(config))
    }

    #[inline(always)]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline(always)]
    pub fn offset(&self) -> Vector {
        self.tracker.offset()
    }

    #[inline(always)]
    pub fn is_open(&self) -> bool {
        self.tracker.is_open()
    }

    /// `true` while snapping back.
    #[inline(always)]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn zones(&self) -> Zones {
        self.zones.get()
    }

    fn rest(&self) -> Vector {
        Vector::new(0.0, self.blob.height)
    }

    fn limits(&self) -> Limits {
        Limits::new(
            self.size.get(),
            &self.blob,
            self.config.quickstep_home_height,
        )
    }

    /// Applies one event. Every event is consumed; requests for the host are appended
    /// to `effects`.
    pub fn reduce(&mut self, event: Event, effects: &mut impl Extend<Effect>) {
        match event {
            Event::Gesture {
                gesture,
                location,
                at,
            } => match gesture {
                Gesture::Began { .. } => self.press(at),
                Gesture::Moved { n } => self.drag(location, n, effects),
                Gesture::Ended { .. } => self.release(location, at, effects),
            },
            Event::Resize { width, height } => {
                let size = Size::new(width as f32, height as f32);
                self.update_layout(size, Bounds::from_size(size));
                effects.extend([Effect::Invalidate]);
            }
            Event::Frame(now) => self.frame(now, effects),
        }
    }

    fn press(&mut self, at: Instant) {
        if self.animator.cancel() {
            debug!(offset = ?self.offset(), "press interrupted snap-back");
        }

        self.tracker.press(at);
    }

    fn drag(&mut self, location: Point, pointers: u8, effects: &mut impl Extend<Effect>) {
        let limits = self.limits();
        if !self.tracker.drag(location, pointers, &limits) {
            trace!(pointers, "ignoring multi-pointer move");
            return;
        }

        if self.animator.cancel() {
            debug!("drag interrupted snap-back");
        }

        trace!(offset = ?self.offset(), open = self.is_open(), "dragged");
        effects.extend([Effect::Invalidate]);
    }

    fn release(&mut self, location: Point, at: Instant, effects: &mut impl Extend<Effect>) {
        let held = self.tracker.release(at);
        let assist = held.is_some_and(|held| held > self.config.assist_hold());

        if assist && location.y <= 0.0 {
            debug!(?held, "long press released at the top edge");
            effects.extend([Effect::Assist]);
        } else if self.is_open() {
            match self.zones.get().hit(location.x) {
                Some(action) => {
                    debug!(?action, x = location.x, "released over action");
                    effects.extend([Effect::Navigate(action)]);
                }
                None => debug!(x = location.x, "released open, outside every action"),
            }
        }

        self.snap_back(at, effects);
    }

    fn snap_back(&mut self, at: Instant, effects: &mut impl Extend<Effect>) {
        self.tracker.close();

        let snap_back = SnapBack {
            from: self.offset(),
            to: self.rest(),
            started: at,
            duration: self.config.snap_back(),
            easing: Easing::Overshoot {
                tension: self.config.overshoot_tension,
            },
        };

        debug!(from = ?snap_back.from, to = ?snap_back.to, "snapping back");
        self.animator.start(snap_back);

        effects.extend([Effect::Invalidate]);
    }

    fn frame(&mut self, now: Instant, effects: &mut impl Extend<Effect>) {
        let Some(offset) = self.animator.tick(now) else {
            return;
        };

        self.tracker.set_offset(offset);
        trace!(?offset, "snap-back frame");

        if !self.animator.is_running() {
            debug!("snap-back finished");
        }

        effects.extend([Effect::Invalidate]);
    }
}

/// A `w` by `h` frame centred on the origin.
fn centred(w: f32, h: f32) -> Bounds {
    Bounds::new(Point::new(-w / 2.0, -h / 2.0), Point::new(w / 2.0, h / 2.0))
}

impl View for BlinkView {
    #[inline(always)]
    fn size(&self) -> Size {
        self.size.get()
    }

    fn draw(&self, bounds: Bounds, onto: &mut impl Output) {
        if self.needs_layout() {
            trace!("not measured yet; skipping draw");
            return;
        }

        let config = &self.config;
        let offset = self.offset();

        let centre = bounds.min.x + self.size.get().width / 2.0;
        let mut canvas = Canvas::new(onto, Transform::translation(centre, bounds.min.y));

        let outline = self.blob.outline(offset).filled(config.blob_color);

        canvas.save();
        canvas.clip(&outline, Bounds::zero());
        canvas.fill(&outline, Bounds::zero());

        let alpha = self.blob.crossfade(offset);
        let anchor = self.blob.glyph_anchor(offset);
        let quarter = self.blob.quarter_width();
        let glyph = centred(config.glyph_size, config.glyph_size);

        let bar = config.quickstep_home_height;
        let home_bar = Rectangle {
            rgba: fade(config.home_bar_color, alpha.home_bar),
        }
        .rounded(bar / 2.0, bar / 2.0);

        canvas.save();
        canvas.translate(anchor.x, anchor.y);
        canvas.fill(&home_bar, centred(quarter, bar));
        canvas.restore();

        canvas.save();
        canvas.translate(anchor.x - quarter, anchor.y);
        canvas.fill(
            &Back {
                rgba: fade(config.glyph_color, alpha.glyphs),
            },
            glyph,
        );
        canvas.restore();

        canvas.save();
        canvas.translate(anchor.x + quarter, anchor.y);
        canvas.fill(
            &Rotate {
                rgba: fade(config.glyph_color, alpha.glyphs),
            },
            glyph,
        );
        canvas.restore();

        canvas.restore();
    }

    #[inline(always)]
    fn needs_layout(&self) -> bool {
        self.size.get().width == 0.0
    }

    fn update_layout(&self, size: Size, _bounds: Bounds) {
        if size == self.size.get() {
            return;
        }

        self.size.set(size);
        self.zones.set(Zones::layout(size, self.blob.half_width()));

        debug!(width = size.width, height = size.height, "laid out");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::glyphs::tests::Tally;

    use super::*;

    fn sized(width: u32, height: u32) -> BlinkView {
        let mut blink = BlinkView::new(Config {
            blob_width: 160.0,
            blob_height: 100.0,
            quickstep_home_height: 10.0,
            ..Default::default()
        });

        blink.reduce(Event::Resize { width, height }, &mut Vec::new());
        blink
    }

    #[test]
    fn rests_at_blob_height() {
        let blink = BlinkView::new(Config::default());
        assert_eq!(blink.offset(), Vector::new(0.0, 64.0));
        assert!(!blink.is_open());
        assert!(!blink.is_animating());
    }

    #[test]
    fn resize_lays_out_zones_inside_the_padding() {
        let blink = sized(400, 100);

        // padded by half the blob's width
        assert_eq!(blink.zones().hit(79.0), None);
        assert_eq!(blink.zones().hit(80.0), Some(Navigation::Back));
        assert_eq!(blink.zones().hit(200.0), Some(Navigation::Home));
        assert_eq!(blink.zones().hit(319.0), Some(Navigation::Recents));
        assert_eq!(blink.zones().hit(320.0), None);
    }

    #[test]
    fn unmeasured_views_draw_nothing() {
        let blink = BlinkView::new(Config::default());
        assert!(blink.needs_layout());

        let mut tally = Tally::default();
        blink.draw(Bounds::zero(), &mut tally);
        blink.draw(Bounds::zero(), &mut tally);
        assert!(tally.subpaths.is_empty());
        assert_eq!(tally.clips, 0);

        let size = Size::new(400.0, 100.0);
        blink.update_layout(size, Bounds::from_size(size));
        assert!(!blink.needs_layout());

        blink.draw(Bounds::from_size(size), &mut tally);
        assert!(!tally.subpaths.is_empty());
    }

    #[test]
    fn drawing_clips_then_fills_blob_and_glyphs() {
        let blink = sized(400, 100);

        let mut tally = Tally::default();
        blink.draw(Bounds::from_size(blink.size()), &mut tally);

        // blob, home bar, back (2), rotate (3)
        assert_eq!(tally.subpaths.len(), 7);
        assert_eq!(tally.clips, 1);
        assert_eq!(tally.resets, 1);

        let config = blink.config();
        assert_eq!(tally.subpaths[0], config.blob_color);
        // at rest: home bar fully shown, glyphs hidden
        assert_eq!(tally.subpaths[1], config.home_bar_color);
        assert!(tally.subpaths[2..].iter().all(|rgba| rgba[3] == 0));

        // the blob starts at its left anchor, relative to the view's centre
        assert_eq!(tally.origins[0], Point::new(120.0, 100.0));
    }

    #[test]
    fn glyph_translations_do_not_leak() {
        let mut blink = sized(400, 100);
        let now = Instant::now();
        blink.reduce(Event::touch(Gesture::moved, 360.0, 0.0, now), &mut Vec::new());

        let mut tally = Tally::default();
        blink.draw(Bounds::from_size(blink.size()), &mut tally);

        // each glyph is placed from the same anchor, one quarter width apart
        let (back, rotate) = (tally.origins[2], tally.origins[4]);
        let anchor = blink.blob.glyph_anchor(blink.offset());

        assert!((back.x - (200.0 + anchor.x - 40.0 + 10.0)).abs() < 1e-3);
        assert!((rotate.x - (200.0 + anchor.x + 40.0)).abs() < 1e-3);
    }

    #[test]
    fn dragging_sideways_reveals_the_glyphs() {
        let mut blink = sized(400, 100);
        let now = Instant::now();

        // glyph offset x = 160 * 0.25 = 40: a full quarter width
        blink.reduce(Event::touch(Gesture::moved, 360.0, 0.0, now), &mut Vec::new());

        let mut tally = Tally::default();
        blink.draw(Bounds::from_size(blink.size()), &mut tally);

        let config = blink.config();
        assert_eq!(tally.subpaths[1][3], 0);
        assert!(tally.subpaths[2..].iter().all(|rgba| *rgba == config.glyph_color));
    }

    #[test]
    fn release_over_a_zone_only_navigates_when_open() {
        let mut blink = sized(400, 100);
        let now = Instant::now();
        let mut effects = Vec::new();

        blink.reduce(Event::touch(Gesture::began, 100.0, 90.0, now), &mut effects);
        blink.reduce(Event::touch(Gesture::moved, 100.0, 80.0, now), &mut effects);
        assert!(!blink.is_open());
        blink.reduce(Event::touch(Gesture::ended, 100.0, 80.0, now), &mut effects);

        insta::assert_snapshot!(format!("{effects:?}"), @"[Invalidate, Invalidate]");

        effects.clear();
        blink.reduce(Event::touch(Gesture::began, 100.0, 90.0, now), &mut effects);
        blink.reduce(Event::touch(Gesture::moved, 100.0, 20.0, now), &mut effects);
        assert!(blink.is_open());
        blink.reduce(Event::touch(Gesture::ended, 300.0, 20.0, now), &mut effects);

        insta::assert_snapshot!(
            format!("{effects:?}"),
            @"[Invalidate, Navigate(Recents), Invalidate]"
        );
        assert!(!blink.is_open());
    }

    #[test]
    fn long_press_released_at_the_top_asks_for_the_assistant() {
        let mut blink = sized(400, 100);
        let now = Instant::now();
        let mut effects = Vec::new();

        blink.reduce(Event::touch(Gesture::began, 200.0, 90.0, now), &mut effects);
        blink.reduce(Event::touch(Gesture::moved, 200.0, 0.0, now), &mut effects);
        let later = now + Duration::from_millis(251);
        blink.reduce(Event::touch(Gesture::ended, 200.0, 0.0, later), &mut effects);

        insta::assert_snapshot!(format!("{effects:?}"), @"[Invalidate, Assist, Invalidate]");

        // exactly at the hold time is not long enough; falls through to navigation
        effects.clear();
        blink.reduce(Event::touch(Gesture::began, 200.0, 90.0, now), &mut effects);
        blink.reduce(Event::touch(Gesture::moved, 200.0, 0.0, now), &mut effects);
        let later = now + Duration::from_millis(250);
        blink.reduce(Event::touch(Gesture::ended, 200.0, 0.0, later), &mut effects);

        insta::assert_snapshot!(
            format!("{effects:?}"),
            @"[Invalidate, Navigate(Home), Invalidate]"
        );
    }

    #[test]
    fn long_press_released_open_is_assist_not_navigation() {
        let mut blink = sized(400, 100);
        let now = Instant::now();
        let mut effects = Vec::new();

        blink.reduce(Event::touch(Gesture::began, 200.0, 90.0, now), &mut effects);
        blink.reduce(Event::touch(Gesture::moved, 200.0, 0.0, now), &mut effects);
        assert!(blink.is_open());

        let later = now + Duration::from_millis(300);
        blink.reduce(Event::touch(Gesture::ended, 200.0, 0.0, later), &mut effects);

        insta::assert_snapshot!(format!("{effects:?}"), @"[Invalidate, Assist, Invalidate]");
    }

    #[test]
    fn long_press_released_below_the_top_navigates() {
        let mut blink = sized(400, 100);
        let now = Instant::now();
        let mut effects = Vec::new();

        blink.reduce(Event::touch(Gesture::began, 200.0, 90.0, now), &mut effects);
        blink.reduce(Event::touch(Gesture::moved, 200.0, 0.5, now), &mut effects);
        assert!(blink.is_open());

        let later = now + Duration::from_millis(1000);
        blink.reduce(Event::touch(Gesture::ended, 200.0, 0.5, later), &mut effects);

        insta::assert_snapshot!(
            format!("{effects:?}"),
            @"[Invalidate, Navigate(Home), Invalidate]"
        );
    }

    #[test]
    fn releases_without_a_press_never_ask_for_the_assistant() {
        let mut blink = sized(400, 100);
        let now = Instant::now();
        let mut effects = Vec::new();

        blink.reduce(Event::touch(Gesture::moved, 200.0, 0.0, now), &mut effects);
        let later = now + Duration::from_millis(1000);
        blink.reduce(Event::touch(Gesture::ended, 200.0, 0.0, later), &mut effects);

        insta::assert_snapshot!(
            format!("{effects:?}"),
            @"[Invalidate, Navigate(Home), Invalidate]"
        );

        // an earlier press does not carry over to a second release
        effects.clear();
        blink.reduce(Event::touch(Gesture::began, 200.0, 90.0, now), &mut effects);
        blink.reduce(Event::touch(Gesture::ended, 200.0, 90.0, now), &mut effects);
        blink.reduce(Event::touch(Gesture::moved, 200.0, 0.0, later), &mut effects);
        blink.reduce(Event::touch(Gesture::ended, 200.0, 0.0, later), &mut effects);

        assert!(!effects.contains(&Effect::Assist));
    }

    #[test]
    fn invalid_configs_are_refused() {
        let config = Config {
            blob_width: 0.0,
            ..Default::default()
        };

        let err = BlinkView::try_new(config).err();
        assert!(matches!(
            err,
            Some(config::Error::Length { name: "blob_width", .. })
        ));
        assert!(BlinkView::try_new(Config::default()).is_ok());
    }

    #[test]
    fn resize_requests_a_redraw() {
        let mut blink = BlinkView::new(Config::default());
        let mut effects = Vec::new();

        blink.reduce(Event::Resize { width: 10, height: 10 }, &mut effects);
        assert_eq!(effects, [Effect::Invalidate]);
        assert_eq!(blink.size(), Size::new(10.0, 10.0));
    }
}
