//! Dimensions, colors and timings of a [`BlinkView`][`crate::BlinkView`].
//!
//! A `Config` is stored as TOML. Every key is optional; missing keys take their
//! [`Default`] value.
//!
//! ```
//! let config = blink::Config::from_toml(r##"
//!     blob_width = 200.0
//!     blob_color = "#336699"
//!
//!     [glyph_damping]
//!     x = 0.5
//!     y = 0.3
//! "##).unwrap();
//!
//! assert_eq!(config.blob_width, 200.0);
//! assert_eq!(config.blob_color, [0x33, 0x66, 0x99, 0xff]);
//! assert_eq!(config.blob_height, blink::Config::default().blob_height);
//! ```

use std::time::Duration;

use serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize};

/// Errors produced while loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read configuration: {0}")]
    Parse(#[from] toml_edit::de::Error),

    #[error("could not write configuration: {0}")]
    Write(#[from] toml_edit::ser::Error),

    #[error("`{name}` must be a positive, finite length (got {value})")]
    Length { name: &'static str, value: f32 },

    #[error("`{name}` must be a finite factor (got {value})")]
    Factor { name: &'static str, value: f32 },

    #[error("`{name}` must be longer than zero")]
    Duration { name: &'static str },

    #[error("overshoot tension must be a finite value of zero or more (got {0})")]
    Tension(f32),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub blob_width: f32,
    pub blob_height: f32,
    /// Thickness of the resting home bar. Also sets how far above half of the blob's
    /// height the apex must be pulled before the blob counts as open.
    pub quickstep_home_height: f32,
    /// Edge length of the back and rotate glyphs.
    pub glyph_size: f32,

    #[serde(serialize_with = "hex_from_rgba", deserialize_with = "rgba_from_hex")]
    pub blob_color: [u8; 4],
    #[serde(serialize_with = "hex_from_rgba", deserialize_with = "rgba_from_hex")]
    pub home_bar_color: [u8; 4],
    #[serde(serialize_with = "hex_from_rgba", deserialize_with = "rgba_from_hex")]
    pub glyph_color: [u8; 4],

    /// How much of the drag offset reaches the blob's apex.
    pub blob_damping: Damping,
    /// How much of the drag offset reaches the glyphs; less than the blob so they trail it.
    pub glyph_damping: Damping,

    pub snap_back_ms: u64,
    pub overshoot_tension: f32,
    /// A gesture held longer than this and released at the top edge asks for the assistant.
    pub assist_hold_ms: u64,
}

/// Per-axis scale factors applied to the drag offset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Damping {
    pub x: f32,
    pub y: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blob_width: 160.0,
            blob_height: 64.0,
            quickstep_home_height: 4.0,
            glyph_size: 20.0,

            blob_color: [0xf5, 0xf5, 0xf5, 0xff],
            home_bar_color: [0x00, 0x00, 0x00, 98],
            glyph_color: [0x20, 0x20, 0x20, 0xff],

            blob_damping: Damping { x: 0.3, y: 1.0 },
            glyph_damping: Damping { x: 0.25, y: 0.3 },

            snap_back_ms: 500,
            overshoot_tension: 2.0,
            assist_hold_ms: 250,
        }
    }
}

impl Config {
    /// Reads and validates a TOML configuration.
    pub fn from_toml(toml: &str) -> Result<Self, Error> {
        let config: Config = toml_edit::de::from_str(toml)?;
        config.validate()?;

        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let lengths = [
            ("blob_width", self.blob_width),
            ("blob_height", self.blob_height),
            ("glyph_size", self.glyph_size),
        ];

        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Length { name, value });
            }
        }

        // a zero-height home bar is allowed; it only moves the open threshold
        if !(self.quickstep_home_height.is_finite() && self.quickstep_home_height >= 0.0) {
            return Err(Error::Length {
                name: "quickstep_home_height",
                value: self.quickstep_home_height,
            });
        }

        let factors = [
            ("blob_damping.x", self.blob_damping.x),
            ("blob_damping.y", self.blob_damping.y),
            ("glyph_damping.x", self.glyph_damping.x),
            ("glyph_damping.y", self.glyph_damping.y),
        ];

        for (name, value) in factors {
            if !value.is_finite() {
                return Err(Error::Factor { name, value });
            }
        }

        if self.snap_back_ms == 0 {
            return Err(Error::Duration {
                name: "snap_back_ms",
            });
        }

        if !(self.overshoot_tension.is_finite() && self.overshoot_tension >= 0.0) {
            return Err(Error::Tension(self.overshoot_tension));
        }

        Ok(())
    }

    #[inline(always)]
    pub fn snap_back(&self) -> Duration {
        Duration::from_millis(self.snap_back_ms)
    }

    #[inline(always)]
    pub fn assist_hold(&self) -> Duration {
        Duration::from_millis(self.assist_hold_ms)
    }
}

pub fn rgba_from_hex<'de, D>(d: D) -> Result<[u8; 4], D::Error>
where
    D: Deserializer<'de>,
{
    let hex = String::deserialize(d)?;

    parse_hex(&hex).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid color `{hex}`; expected #rrggbb or #rrggbbaa"
        ))
    })
}

pub fn hex_from_rgba<S>(rgba: &[u8; 4], s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let [r, g, b, a] = *rgba;
    s.serialize_str(&format!("#{r:02x}{g:02x}{b:02x}{a:02x}"))
}

fn parse_hex(hex: &str) -> Option<[u8; 4]> {
    let digits = hex.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |i: usize| -> Option<u8> { u8::from_str_radix(digits.get(i..i + 2)?, 16).ok() };

    match digits.len() {
        6 => Some([byte(0)?, byte(2)?, byte(4)?, 0xff]),
        8 => Some([byte(0)?, byte(2)?, byte(4)?, byte(6)?]),
        _ => None,
    }
}
