//! The theme object and its light/dark bundle

use std::borrow::Cow;

use crate::derive::shift;
use crate::error::{Result, ThemeError};
use crate::options::ThemeOptions;
use crate::palette::Palette;
use crate::typography::{Font, TextStyle};
use lumen_core::Color;
use serde::{Deserialize, Serialize};

/// Light or dark
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Mapping for the old boolean `light` parameter
    pub fn from_light_flag(light: bool) -> Self {
        if light {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}

/// Visual style of an application: palettes, radii, shadow and text styles.
///
/// Themes can only be created through [`Theme::from_colors`],
/// [`Theme::pair_from_colors`] or [`ThemeBundle::from_colors`]. Building one
/// field by field is not possible:
///
/// ```rust,compile_fail
/// use lumen_theme::{Theme, ThemeMode, ThemeOptions};
///
/// let theme = Theme::from_colors(&ThemeOptions::default(), ThemeMode::Light);
/// let patched = Theme {
///     corner_radius_small: 0.1,
///     ..theme
/// };
/// ```
///
/// Fields can't be read directly either, only through the accessors:
///
/// ```rust,compile_fail
/// fn radius(theme: &lumen_theme::Theme) -> f32 {
///     theme.corner_radius_small
/// }
/// ```
///
/// A theme never changes after it is built. To switch themes, replace it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub(crate) primary_palette: Palette,
    pub(crate) secondary_palette: Palette,

    pub(crate) background_palette: Palette,
    pub(crate) neutral_palette: Palette,
    pub(crate) hud_palette: Palette,
    pub(crate) disabled_palette: Palette,

    pub(crate) success_palette: Palette,
    pub(crate) warning_palette: Palette,
    pub(crate) danger_palette: Palette,

    pub(crate) corner_radius_small: f32,
    pub(crate) corner_radius_medium: f32,
    pub(crate) corner_radius_large: f32,

    pub(crate) shadow_color: Color,

    pub(crate) monospace_font: Font,

    pub(crate) heading1_style: TextStyle,
    pub(crate) heading2_style: TextStyle,
    pub(crate) heading3_style: TextStyle,
    pub(crate) text_style: TextStyle,
}

impl Theme {
    // ========== Palettes ==========

    pub fn primary_palette(&self) -> &Palette {
        &self.primary_palette
    }

    pub fn secondary_palette(&self) -> &Palette {
        &self.secondary_palette
    }

    pub fn background_palette(&self) -> &Palette {
        &self.background_palette
    }

    pub fn neutral_palette(&self) -> &Palette {
        &self.neutral_palette
    }

    pub fn hud_palette(&self) -> &Palette {
        &self.hud_palette
    }

    pub fn disabled_palette(&self) -> &Palette {
        &self.disabled_palette
    }

    pub fn success_palette(&self) -> &Palette {
        &self.success_palette
    }

    pub fn warning_palette(&self) -> &Palette {
        &self.warning_palette
    }

    pub fn danger_palette(&self) -> &Palette {
        &self.danger_palette
    }

    // ========== Colors ==========

    pub fn primary_color(&self) -> Color {
        self.primary_palette.background
    }

    pub fn secondary_color(&self) -> Color {
        self.secondary_palette.background
    }

    pub fn background_color(&self) -> Color {
        self.background_palette.background
    }

    pub fn neutral_color(&self) -> Color {
        self.neutral_palette.background
    }

    pub fn hud_color(&self) -> Color {
        self.hud_palette.background
    }

    pub fn disabled_color(&self) -> Color {
        self.disabled_palette.background
    }

    pub fn success_color(&self) -> Color {
        self.success_palette.background
    }

    pub fn warning_color(&self) -> Color {
        self.warning_palette.background
    }

    pub fn danger_color(&self) -> Color {
        self.danger_palette.background
    }

    pub fn shadow_color(&self) -> Color {
        self.shadow_color
    }

    // ========== Shape ==========

    pub fn corner_radius_small(&self) -> f32 {
        self.corner_radius_small
    }

    pub fn corner_radius_medium(&self) -> f32 {
        self.corner_radius_medium
    }

    pub fn corner_radius_large(&self) -> f32 {
        self.corner_radius_large
    }

    // ========== Text ==========

    pub fn heading1_style(&self) -> &TextStyle {
        &self.heading1_style
    }

    pub fn heading2_style(&self) -> &TextStyle {
        &self.heading2_style
    }

    pub fn heading3_style(&self) -> &TextStyle {
        &self.heading3_style
    }

    pub fn text_style(&self) -> &TextStyle {
        &self.text_style
    }

    pub fn monospace_font(&self) -> &Font {
        &self.monospace_font
    }

    /// Font of regular body text
    pub fn font(&self) -> Result<&Font> {
        self.text_style
            .font
            .as_ref()
            .ok_or_else(|| ThemeError::InvariantViolation("the text style has no font".into()))
    }

    // ========== Derived ==========

    pub fn is_light_theme(&self) -> bool {
        self.background_palette.background.perceived_brightness() >= 0.5
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_light_flag(self.is_light_theme())
    }

    /// A legible text color for text drawn on top of `background`
    pub fn text_color_for(&self, background: Color) -> Color {
        shift(background, 0.8, 0.0, None)
    }

    /// Resolve a color set to a palette.
    ///
    /// Named sets map to this theme's palettes. `"keep"` (inherit from the
    /// surrounding context) and unknown names have no palette of their own.
    pub fn palette(&self, set: &ColorSet) -> Option<Palette> {
        let name: &str = match set {
            ColorSet::Custom(color) => return Some(Palette::from_seed(*color)),
            ColorSet::Named(name) => name.as_ref(),
        };

        let palette = match name {
            "primary" => &self.primary_palette,
            "secondary" => &self.secondary_palette,
            "background" => &self.background_palette,
            "neutral" => &self.neutral_palette,
            "hud" => &self.hud_palette,
            "disabled" => &self.disabled_palette,
            "success" => &self.success_palette,
            "warning" => &self.warning_palette,
            "danger" => &self.danger_palette,
            _ => return None,
        };

        Some(*palette)
    }

    /// Encode a color set for the client.
    ///
    /// Named sets already exist on the client side and pass through as-is.
    /// Literal colors are expanded into the four local palette variables so
    /// the client does not need to derive anything.
    pub fn serialize_colorset(&self, set: &ColorSet) -> SerializedColorSet {
        match set {
            ColorSet::Named(name) => SerializedColorSet::Named(name.to_string()),
            ColorSet::Custom(color) => {
                let palette = Palette::from_seed(*color);

                SerializedColorSet::Local(LocalColorSet {
                    local_bg: palette.background.to_array(),
                    local_bg_variant: palette.background_variant.to_array(),
                    local_bg_active: palette.background_active.to_array(),
                    local_fg: palette.foreground.to_array(),
                })
            }
        }
    }
}

/// A named palette of the theme, or a literal color to derive one from
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSet {
    Named(Cow<'static, str>),
    Custom(Color),
}

impl From<&'static str> for ColorSet {
    fn from(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }
}

impl From<String> for ColorSet {
    fn from(name: String) -> Self {
        Self::Named(Cow::Owned(name))
    }
}

impl From<Color> for ColorSet {
    fn from(color: Color) -> Self {
        Self::Custom(color)
    }
}

/// Wire form of a [`ColorSet`]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SerializedColorSet {
    Named(String),
    Local(LocalColorSet),
}

/// Palette variables for a literal color, as `[r, g, b, a]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalColorSet {
    pub local_bg: [f32; 4],
    pub local_bg_variant: [f32; 4],
    pub local_bg_active: [f32; 4],
    pub local_fg: [f32; 4],
}

/// A matching light and dark theme.
///
/// Both halves always come from the same seeds, so the only way to build one
/// is [`ThemeBundle::from_colors`].
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    light: Theme,
    dark: Theme,
}

impl ThemeBundle {
    /// Build both themes from the same seeds
    pub fn from_colors(options: &ThemeOptions) -> Self {
        let (light, dark) = Theme::pair_from_colors(options);
        Self { light, dark }
    }

    pub fn light(&self) -> &Theme {
        &self.light
    }

    pub fn dark(&self) -> &Theme {
        &self.dark
    }

    pub fn for_mode(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    pub fn into_pair(self) -> (Theme, Theme) {
        (self.light, self.dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn light() -> Theme {
        Theme::from_colors(&ThemeOptions::default(), ThemeMode::Light)
    }

    #[test]
    fn color_shortcuts_are_palette_backgrounds() {
        let theme = light();
        assert_eq!(theme.primary_color(), theme.primary_palette().background);
        assert_eq!(theme.secondary_color(), theme.secondary_palette().background);
        assert_eq!(theme.background_color(), theme.background_palette().background);
        assert_eq!(theme.neutral_color(), theme.neutral_palette().background);
        assert_eq!(theme.hud_color(), theme.hud_palette().background);
        assert_eq!(theme.disabled_color(), theme.disabled_palette().background);
        assert_eq!(theme.success_color(), theme.success_palette().background);
        assert_eq!(theme.warning_color(), theme.warning_palette().background);
        assert_eq!(theme.danger_color(), theme.danger_palette().background);
    }

    #[test]
    fn font_is_the_body_font() {
        let theme = light();
        assert_eq!(theme.font().unwrap(), &Font::ROBOTO);
    }

    #[test]
    fn missing_body_font_is_an_invariant_violation() {
        let mut theme = light();
        theme.text_style.font = None;

        assert!(matches!(
            theme.font(),
            Err(ThemeError::InvariantViolation(_))
        ));
    }

    #[test]
    fn text_color_for_contrasts_with_the_surface() {
        let theme = light();
        let on_white = theme.text_color_for(Color::WHITE);
        let on_black = theme.text_color_for(Color::BLACK);

        assert!(on_white.perceived_brightness() < 0.3);
        assert!(on_black.perceived_brightness() > 0.7);
    }

    #[test]
    fn named_color_sets_resolve_to_theme_palettes() {
        let theme = light();
        assert_eq!(
            theme.palette(&ColorSet::from("danger")),
            Some(*theme.danger_palette())
        );
        assert_eq!(
            theme.palette(&ColorSet::from("hud")),
            Some(*theme.hud_palette())
        );
        assert_eq!(theme.palette(&ColorSet::from("keep")), None);
        assert_eq!(theme.palette(&ColorSet::from("sparkly")), None);

        let custom = Color::from_hex(0x7b1fa2);
        assert_eq!(
            theme.palette(&ColorSet::from(custom)),
            Some(Palette::from_seed(custom))
        );
    }

    #[test]
    fn mode_follows_background_brightness() {
        assert_eq!(light().mode(), ThemeMode::Light);
        let dark = Theme::from_colors(&ThemeOptions::default(), ThemeMode::Dark);
        assert_eq!(dark.mode(), ThemeMode::Dark);
    }

    #[test]
    fn bundle_selects_by_mode() {
        let bundle = ThemeBundle::from_colors(&ThemeOptions::default());
        assert!(bundle.for_mode(ThemeMode::Light).is_light_theme());
        assert!(!bundle.for_mode(ThemeMode::Dark).is_light_theme());

        let (light, dark) = bundle.clone().into_pair();
        assert_eq!(&light, bundle.light());
        assert_eq!(&dark, bundle.dark());
    }

    #[test]
    fn bundle_halves_share_their_seeds() {
        let options = ThemeOptions::new().primary(Color::from_hex(0x7b1fa2));
        let bundle = ThemeBundle::from_colors(&options);

        assert_eq!(bundle.light().mode(), ThemeMode::Light);
        assert_eq!(bundle.dark().mode(), ThemeMode::Dark);
        assert_eq!(bundle.light().primary_palette(), bundle.dark().primary_palette());
        assert_eq!(bundle.light().success_palette(), bundle.dark().success_palette());
    }
}
