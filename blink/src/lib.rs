//! A gesture-driven navigation blob.
//!
//! The blob replaces a back/home/recents bar. Dragging pulls it up into a teardrop that
//! follows the pointer, cross-fading a resting home bar into navigation glyphs;
//! releasing snaps it back to rest with an overshooting ease.
//!
//! - [`BlinkView`] receives [`blink_views::Event`]s through [`BlinkView::reduce`] and
//!   answers with [`Effect`]s for its host: redraw, navigate, or summon the assistant.
//! - It draws through [`blink_views::View`] into any [`blink_views::Output`].
//! - Dimensions, colors and timings come from a [`Config`], usually read from TOML.
//!
//! Everything happens on the caller's thread; time only advances through event
//! timestamps and [`Event::Frame`][`blink_views::Event::Frame`].

pub use config::Config;
pub use view::{BlinkView, Effect};
pub use zones::{Navigation, Zones};

pub mod animator;
pub mod config;
pub mod shape;
pub mod tracker;

mod glyphs;
mod view;
mod zones;
