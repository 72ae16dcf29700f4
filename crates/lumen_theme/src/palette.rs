//! Palettes: the four colors used for one semantic area of the UI

use crate::derive::{check_range, derive_color, shift};
use crate::error::Result;
use lumen_core::Color;
use serde::Serialize;

/// Background/variant/active/foreground color quadruple.
///
/// `foreground` is chosen to be legible on top of `background`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Palette {
    pub background: Color,
    pub background_variant: Color,
    pub background_active: Color,
    pub foreground: Color,
}

/// Largest spacing for [`Palette::from_color`], the active color moves `0.2 * offset`
const MAX_SPACING: f32 = 5.0;

impl Palette {
    pub const fn new(
        background: Color,
        background_variant: Color,
        background_active: Color,
        foreground: Color,
    ) -> Self {
        Self {
            background,
            background_variant,
            background_active,
            foreground,
        }
    }

    /// Derive a full palette from a single seed color.
    ///
    /// `offset` scales how far the variant and active colors move away from
    /// the seed (`1` is the default spacing). If `target` is given the two
    /// are tinted towards it instead of being brightened or darkened. The
    /// foreground ignores both, it only has to stay legible.
    ///
    /// `offset` must be within `0..=5`.
    pub fn from_color(seed: Color, offset: f32, target: Option<Color>) -> Result<Self> {
        check_range("offset", offset, 0.0, MAX_SPACING)?;

        Ok(Self {
            background: seed,
            background_variant: derive_color(seed, 0.1 * offset, -0.3, target)?,
            background_active: derive_color(seed, 0.2 * offset, -0.3, target)?,
            foreground: shift(seed, 0.8, 0.0, None),
        })
    }

    /// [`Palette::from_color`] with the default spacing and no target
    pub fn from_seed(seed: Color) -> Self {
        Self {
            background: seed,
            background_variant: shift(seed, 0.1, -0.3, None),
            background_active: shift(seed, 0.2, -0.3, None),
            foreground: shift(seed, 0.8, 0.0, None),
        }
    }

    /// Palette for success/warning/danger states.
    ///
    /// Offsets are fixed so the semantic colors look alike no matter how the
    /// rest of the theme is configured.
    pub fn semantic(seed: Color) -> Self {
        Self {
            background: seed,
            background_variant: shift(seed, 0.08, -0.4, None),
            background_active: shift(seed, 0.15, 0.8, None),
            foreground: shift(seed, 0.4, 0.0, None),
        }
    }
}
