//! Quarter-turn rotation state for the image viewer.
//!
//! The viewer rotates an image by swapping a CSS class on the `<img>` element.
//! Each class encodes one of four clockwise angles, and the rotate buttons
//! cycle through them:
//!
//! ```text
//!        rotate_right
//!   0 ──> 90 ──> 180 ──> 270 ──┐
//!   ^                          │
//!   └──────────────────────────┘
//! ```
//!
//! `rotate_left` walks the same cycle backwards.
//!
//! # Encodings
//!
//! Two string encodings reach this module from the frontend:
//! - bare degree labels: `"0"`, `"90"`, `"180"`, `"270"`
//! - CSS class names: `"image_rotate_0"` .. `"image_rotate_270"`
//!
//! Each entry point reads exactly one encoding: the label functions do not
//! accept CSS classes and the class functions do not accept labels. Anything
//! that is not one of the four known values of that encoding resets to
//! [`Rotation::Deg0`] instead of failing, so a stale or missing class never
//! leaves the viewer stuck.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of the CSS classes that carry the rotation angle.
pub const CSS_CLASS_PREFIX: &str = "image_rotate_";

/// Error returned by strict rotation parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationParseError {
    /// Not one of `"0"`, `"90"`, `"180"`, `"270"`.
    #[error("Unrecognized rotation label: {0:?}")]
    UnknownLabel(String),

    /// Not one of the `image_rotate_*` classes.
    #[error("Unrecognized rotation class: {0:?}")]
    UnknownCssClass(String),
}

/// Clockwise rotation angle in 90 degree steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// No rotation.
    #[default]
    #[serde(rename = "0")]
    Deg0,
    /// One quarter-turn clockwise.
    #[serde(rename = "90")]
    Deg90,
    /// Upside down.
    #[serde(rename = "180")]
    Deg180,
    /// One quarter-turn counter-clockwise.
    #[serde(rename = "270")]
    Deg270,
}

impl Rotation {
    /// All rotations in clockwise order starting from [`Rotation::Deg0`].
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Next state after a clockwise quarter-turn.
    pub fn rotate_right(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Next state after a counter-clockwise quarter-turn.
    pub fn rotate_left(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg270,
            Rotation::Deg90 => Rotation::Deg0,
            Rotation::Deg180 => Rotation::Deg90,
            Rotation::Deg270 => Rotation::Deg180,
        }
    }

    /// Rotate by a signed number of quarter-turns (positive = clockwise).
    pub fn rotate_by(self, turns: i64) -> Self {
        Self::from_quarter_turns(i64::from(self.quarter_turns()) + turns.rem_euclid(4))
    }

    /// Build a rotation from any number of clockwise quarter-turns.
    ///
    /// The count is reduced modulo 4, so `-1` is the same as `3`.
    pub fn from_quarter_turns(turns: i64) -> Self {
        match turns.rem_euclid(4) {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    /// Number of clockwise quarter-turns (0 to 3).
    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Clockwise angle in degrees.
    pub fn degrees(self) -> u16 {
        u16::from(self.quarter_turns()) * 90
    }

    /// Bare degree label, e.g. `"90"`.
    pub fn label(self) -> &'static str {
        match self {
            Rotation::Deg0 => "0",
            Rotation::Deg90 => "90",
            Rotation::Deg180 => "180",
            Rotation::Deg270 => "270",
        }
    }

    /// CSS class used by the viewer, e.g. `"image_rotate_90"`.
    pub fn css_class(self) -> &'static str {
        match self {
            Rotation::Deg0 => "image_rotate_0",
            Rotation::Deg90 => "image_rotate_90",
            Rotation::Deg180 => "image_rotate_180",
            Rotation::Deg270 => "image_rotate_270",
        }
    }

    /// Parse a bare degree label. Case and whitespace must match exactly.
    pub fn from_label(label: &str) -> Result<Self, RotationParseError> {
        match label {
            "0" => Ok(Rotation::Deg0),
            "90" => Ok(Rotation::Deg90),
            "180" => Ok(Rotation::Deg180),
            "270" => Ok(Rotation::Deg270),
            _ => Err(RotationParseError::UnknownLabel(label.to_string())),
        }
    }

    /// Parse a viewer CSS class such as `"image_rotate_180"`.
    pub fn from_css_class(class: &str) -> Result<Self, RotationParseError> {
        class
            .strip_prefix(CSS_CLASS_PREFIX)
            .and_then(|degrees| Rotation::from_label(degrees).ok())
            .ok_or_else(|| RotationParseError::UnknownCssClass(class.to_string()))
    }

    /// Parse a bare degree label, falling back to [`Rotation::Deg0`].
    pub fn from_label_lossy(label: &str) -> Self {
        Rotation::from_label(label).unwrap_or_default()
    }

    /// Parse a viewer CSS class, falling back to [`Rotation::Deg0`].
    pub fn from_css_class_lossy(class: &str) -> Self {
        Rotation::from_css_class(class).unwrap_or_default()
    }
}

impl FromStr for Rotation {
    type Err = RotationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rotation::from_label(s)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rotate a degree label one step clockwise.
///
/// Unrecognized input yields `"0"`.
pub fn rotate_right(current: &str) -> &'static str {
    match Rotation::from_label(current) {
        Ok(rotation) => rotation.rotate_right().label(),
        Err(_) => Rotation::Deg0.label(),
    }
}

/// Rotate a degree label one step counter-clockwise.
///
/// Unrecognized input yields `"0"`.
pub fn rotate_left(current: &str) -> &'static str {
    match Rotation::from_label(current) {
        Ok(rotation) => rotation.rotate_left().label(),
        Err(_) => Rotation::Deg0.label(),
    }
}

/// Rotate a viewer CSS class one step clockwise.
///
/// Unrecognized input yields `"image_rotate_0"`.
pub fn rotate_class_right(class: &str) -> &'static str {
    match Rotation::from_css_class(class) {
        Ok(rotation) => rotation.rotate_right().css_class(),
        Err(_) => Rotation::Deg0.css_class(),
    }
}

/// Rotate a viewer CSS class one step counter-clockwise.
///
/// Unrecognized input yields `"image_rotate_0"`.
pub fn rotate_class_left(class: &str) -> &'static str {
    match Rotation::from_css_class(class) {
        Ok(rotation) => rotation.rotate_left().css_class(),
        Err(_) => Rotation::Deg0.css_class(),
    }
}
