//! Color values and color-space operations

use std::str::FromStr;

use thiserror::Error;

/// Errors produced when parsing a hex color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string (without a leading `#`) is not 6 or 8 digits long
    #[error("hex colors must have 6 or 8 digits, got {0}")]
    InvalidLength(usize),

    /// The string contains a character that is not a hex digit
    #[error("invalid hex color `{0}`")]
    InvalidDigit(String),
}

/// RGBA color (sRGB space, channels in `0.0..=1.0`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque grayscale color
    pub const fn gray(value: f32) -> Self {
        Self::rgb(value, value, value)
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create an opaque color from a `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Parse `rrggbb` or `rrggbbaa`, with or without a leading `#`
    pub fn from_hex_str(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(hex.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))?;

        Ok(if digits.len() == 8 {
            Self::from_rgba8(
                ((value >> 24) & 0xFF) as u8,
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
            )
        } else {
            Self::from_hex(value)
        })
    }

    /// Create a color from hue, saturation and value, all in `0.0..=1.0`
    pub fn from_hsv(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match sector as u8 % 6 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };

        Self::rgba(r, g, b, alpha)
    }

    /// Convert to `(hue, saturation, value)`, all in `0.0..=1.0`
    pub fn to_hsv(&self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };

        let hue = if delta <= f32::EPSILON {
            0.0
        } else if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0) / 6.0
        } else if max == self.g {
            ((self.b - self.r) / delta + 2.0) / 6.0
        } else {
            ((self.r - self.g) / delta + 4.0) / 6.0
        };

        (hue, saturation, max)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// The `[r, g, b, a]` quadruple
    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Perceptual luminance in `0.0..=1.0`.
    ///
    /// Weighted sum of the sRGB channels; ignores alpha.
    pub fn perceived_brightness(&self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Linearly interpolate towards `other`. A `factor` of `0` returns `self`,
    /// `1` returns `other`. Alpha is interpolated as well.
    pub fn blend(self, other: Color, factor: f32) -> Self {
        let t = factor.clamp(0.0, 1.0);
        let keep = 1.0 - t;

        Self {
            r: self.r * keep + other.r * t,
            g: self.g * keep + other.g * t,
            b: self.b * keep + other.b * t,
            a: self.a * keep + other.a * t,
        }
    }

    /// Raise the HSV value by `amount`.
    ///
    /// Value saturates at `1`; any excess is taken out of the saturation
    /// instead, so very bright colors keep getting lighter by washing out.
    /// Negative amounts darken.
    pub fn brighter(self, amount: f32) -> Self {
        if amount < 0.0 {
            return self.darker(-amount);
        }

        let (hue, saturation, value) = self.to_hsv();
        let value = value + amount;

        let excess = (value - 1.0).max(0.0);
        let saturation = (saturation - excess).max(0.0);
        let value = value.min(1.0);

        Self::from_hsv(hue, saturation, value, self.a)
    }

    /// Lower the HSV value by `amount`. Negative amounts brighten.
    pub fn darker(self, amount: f32) -> Self {
        if amount < 0.0 {
            return self.brighter(-amount);
        }

        let (hue, saturation, value) = self.to_hsv();
        Self::from_hsv(hue, saturation, (value - amount).max(0.0), self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_array(), serializer)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s.trim())
    }
}
