//! Color derivation
//!
//! Produces a related but visibly different color from a base color. Every
//! non-seed color in a theme comes out of [`derive_color`].

use crate::error::{Result, ThemeError};
use lumen_core::Color;

/// Brightness gap below which a target color is applied at full strength
const SAME_BRIGHTNESS: f32 = 0.01;

/// Shift `base` into a related color.
///
/// - `offset` (`0..=1`): how far to move. `0` returns `base` unchanged.
/// - `bias_to_bright` (`-1..=1`): moves the midpoint used to decide between
///   brightening and darkening. `-1` always darkens, `1` always brightens.
/// - `target`: if given, blend towards it instead of changing brightness.
///   The pull shrinks as the two colors get perceptually further apart, so a
///   bright brand color can't swamp a dark surface.
pub fn derive_color(
    base: Color,
    offset: f32,
    bias_to_bright: f32,
    target: Option<Color>,
) -> Result<Color> {
    check_range("offset", offset, 0.0, 1.0)?;
    check_range("bias_to_bright", bias_to_bright, -1.0, 1.0)?;

    Ok(shift(base, offset, bias_to_bright, target))
}

/// [`derive_color`] for arguments that are known to be in range
pub(crate) fn shift(base: Color, offset: f32, bias_to_bright: f32, target: Option<Color>) -> Color {
    debug_assert!((0.0..=1.0).contains(&offset), "offset out of range: {offset}");
    debug_assert!(
        (-1.0..=1.0).contains(&bias_to_bright),
        "bias_to_bright out of range: {bias_to_bright}"
    );

    if let Some(target) = target {
        let difference = (target.perceived_brightness() - base.perceived_brightness()).abs();

        let scale = if difference < SAME_BRIGHTNESS {
            1.0
        } else {
            (1.5 / difference).min(1.0)
        };

        return base.blend(target, offset * scale);
    }

    let threshold = 0.5 + 0.5 * bias_to_bright;

    if base.perceived_brightness() <= threshold {
        base.brighter(offset)
    } else {
        base.darker(offset)
    }
}

pub(crate) fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ThemeError::InvalidArgument {
            name,
            value,
            min,
            max,
        })
    }
}
