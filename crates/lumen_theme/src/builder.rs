//! Theme construction from seed colors
//!
//! Defaults are resolved in a fixed order because later ones depend on
//! earlier ones: the text color depends on the background, the neutral color
//! on background and primary, the disabled color on the background palette,
//! and the heading fill on primary and background.

use crate::derive::shift;
use crate::options::{HeadingFill, ThemeOptions};
use crate::palette::Palette;
use crate::theme::{Theme, ThemeMode};
use crate::typography::{TextFill, TextStyle};
use lumen_core::Color;

const DEFAULT_PRIMARY: u32 = 0x01dffd;
const DEFAULT_SECONDARY: u32 = 0x0083ff;
const DEFAULT_SUCCESS: u32 = 0x1e8e3e;
const DEFAULT_WARNING: u32 = 0xf9a825;
const DEFAULT_DANGER: u32 = 0xb3261e;

const LIGHT_BACKGROUND: Color = Color::rgb(0.96, 0.96, 0.93);
const DARK_BACKGROUND: Color = Color::gray(0.10);

const LIGHT_HUD: Color = Color::gray(0.15);
const DARK_HUD: Color = Color::gray(0.02);

const LIGHT_SHADOW: Color = Color::rgba(0.1, 0.1, 0.2, 0.5);
const DARK_SHADOW: Color = Color::BLACK;

/// Minimum brightness gap between primary and background for colored headings
const HEADING_CONTRAST: f32 = 0.3;

const HEADING1_SIZE: f32 = 2.3;
const HEADING2_SIZE: f32 = 1.7;
const HEADING3_SIZE: f32 = 1.2;
const TEXT_SIZE: f32 = 1.0;

/// Working state while a theme is being resolved
struct ThemeBuilder<'a> {
    options: &'a ThemeOptions,
    mode: ThemeMode,

    primary_color: Color,
    primary_palette: Palette,
    secondary_palette: Palette,

    background_color: Color,
    text_color: Color,
    neutral_color: Color,
}

impl<'a> ThemeBuilder<'a> {
    fn new(options: &'a ThemeOptions, mode: ThemeMode) -> Self {
        let primary_color = options
            .primary_color
            .unwrap_or_else(|| Color::from_hex(DEFAULT_PRIMARY));
        let secondary_color = options
            .secondary_color
            .unwrap_or_else(|| Color::from_hex(DEFAULT_SECONDARY));

        let background_color = options.background_color.unwrap_or(match mode {
            ThemeMode::Light => LIGHT_BACKGROUND,
            ThemeMode::Dark => DARK_BACKGROUND,
        });

        // Gray text reads well on bright backgrounds, dark ones need it much brighter
        let text_color = options.text_color.for_mode(mode).unwrap_or_else(|| {
            if background_color.perceived_brightness() > 0.5 {
                Color::gray(0.3)
            } else {
                Color::gray(0.9)
            }
        });

        let neutral_color = options.neutral_color.unwrap_or_else(|| {
            shift(background_color, 0.04, 0.0, None).blend(primary_color, 0.06)
        });

        Self {
            options,
            mode,
            primary_color,
            primary_palette: Palette::from_seed(primary_color),
            secondary_palette: Palette::from_seed(secondary_color),
            background_color,
            text_color,
            neutral_color,
        }
    }

    fn background_palette(&self) -> Palette {
        Palette::new(
            self.background_color,
            self.neutral_color,
            shift(self.background_color, 0.25, 0.15, Some(self.primary_color)),
            self.text_color,
        )
    }

    fn neutral_palette(&self) -> Palette {
        Palette::new(
            self.neutral_color,
            shift(self.neutral_color, 0.15, 0.15, Some(self.primary_color)),
            shift(self.neutral_color, 0.25, 0.15, Some(self.primary_color)),
            self.text_color,
        )
    }

    fn hud_palette(&self) -> Palette {
        let hud = self.options.hud_color.unwrap_or(match self.mode {
            ThemeMode::Light => LIGHT_HUD,
            ThemeMode::Dark => DARK_HUD,
        });

        // HUDs sit at either end of the brightness range, a binary choice is enough
        let foreground = if hud.perceived_brightness() > 0.5 {
            Color::gray(0.1)
        } else {
            Color::gray(0.9)
        };

        Palette::new(
            hud,
            shift(hud, 0.08, 0.0, None),
            shift(hud, 0.15, 0.0, None),
            foreground,
        )
    }

    /// Kept subdued on purpose, it isn't meant to be perfectly readable
    fn disabled_palette(&self, background: &Palette) -> Palette {
        let disabled = self
            .options
            .disabled_color
            .unwrap_or_else(|| background.background.blend(background.foreground, 0.5));

        Palette::new(
            disabled,
            shift(disabled, 0.2, -0.3, None),
            shift(disabled, 0.3, -0.3, None),
            shift(disabled, 0.4, 0.2, None),
        )
    }

    fn shadow_color(&self) -> Color {
        match self.mode {
            ThemeMode::Light => LIGHT_SHADOW,
            ThemeMode::Dark => DARK_SHADOW,
        }
    }

    fn semantic_palette(seed: Option<Color>, default: u32) -> Palette {
        Palette::semantic(seed.unwrap_or_else(|| Color::from_hex(default)))
    }

    /// Colored headings are hard to read when the primary color is close to
    /// the background, so `Auto` falls back to plain text in that case.
    fn heading_fill(&self) -> TextFill {
        let fill = match &self.options.heading_fill {
            HeadingFill::Auto => {
                let primary = self.primary_palette.background.perceived_brightness();
                let background = self.background_color.perceived_brightness();

                let resolved = if (primary - background).abs() > HEADING_CONTRAST {
                    HeadingFill::Primary
                } else {
                    HeadingFill::Plain
                };

                tracing::trace!(?resolved, mode = ?self.mode, "resolved automatic heading fill");
                resolved
            }
            other => other.clone(),
        };

        match fill {
            HeadingFill::Primary => TextFill::solid(self.primary_color),
            HeadingFill::Plain | HeadingFill::Auto => TextFill::solid(self.text_color),
            HeadingFill::Custom(fill) => fill,
        }
    }

    fn build(self) -> Theme {
        let background_palette = self.background_palette();
        let neutral_palette = self.neutral_palette();
        let hud_palette = self.hud_palette();
        let disabled_palette = self.disabled_palette(&background_palette);

        let options = self.options;

        let heading1_style = TextStyle::new(
            options
                .heading_font
                .clone()
                .unwrap_or_else(|| options.font.clone()),
            self.heading_fill(),
            HEADING1_SIZE,
        );
        let heading2_style = heading1_style.clone().with_font_size(HEADING2_SIZE);
        let heading3_style = heading1_style.clone().with_font_size(HEADING3_SIZE);
        let text_style = heading1_style
            .clone()
            .with_font(options.font.clone())
            .with_font_size(TEXT_SIZE)
            .with_fill(self.text_color);

        tracing::debug!(
            mode = ?self.mode,
            background = ?self.background_color,
            primary = ?self.primary_color,
            "built theme"
        );

        Theme {
            primary_palette: self.primary_palette,
            secondary_palette: self.secondary_palette,
            background_palette,
            neutral_palette,
            hud_palette,
            disabled_palette,
            success_palette: Self::semantic_palette(options.success_color, DEFAULT_SUCCESS),
            warning_palette: Self::semantic_palette(options.warning_color, DEFAULT_WARNING),
            danger_palette: Self::semantic_palette(options.danger_color, DEFAULT_DANGER),
            corner_radius_small: options.corner_radius_small,
            corner_radius_medium: options.corner_radius_medium,
            corner_radius_large: options.corner_radius_large,
            shadow_color: self.shadow_color(),
            monospace_font: options.monospace_font.clone(),
            heading1_style,
            heading2_style,
            heading3_style,
            text_style,
        }
    }
}

impl Theme {
    /// Derive a complete theme from a few seed colors.
    ///
    /// ```rust
    /// use lumen_core::Color;
    /// use lumen_theme::{Theme, ThemeMode, ThemeOptions};
    ///
    /// let options = ThemeOptions::new().primary(Color::from_hex(0x7b1fa2));
    /// let theme = Theme::from_colors(&options, ThemeMode::Dark);
    ///
    /// assert!(!theme.is_light_theme());
    /// assert_eq!(theme.primary_color(), Color::from_hex(0x7b1fa2));
    /// ```
    pub fn from_colors(options: &ThemeOptions, mode: ThemeMode) -> Theme {
        ThemeBuilder::new(options, mode).build()
    }

    /// Build a light and a dark theme from the same seeds, returned as
    /// `(light, dark)`. Only the text color may differ between the two, via
    /// [`TextColor::PerMode`](crate::TextColor::PerMode).
    pub fn pair_from_colors(options: &ThemeOptions) -> (Theme, Theme) {
        (
            Self::from_colors(options, ThemeMode::Light),
            Self::from_colors(options, ThemeMode::Dark),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TextColor;
    use crate::typography::Font;
    use pretty_assertions::assert_eq;

    fn approx_color(a: Color, b: Color) -> bool {
        a.to_array()
            .iter()
            .zip(b.to_array())
            .all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn default_light_theme_constants() {
        let options = ThemeOptions::new().primary(Color::from_hex(0x01dffd));
        let theme = Theme::from_colors(&options, ThemeMode::Light);

        assert_eq!(theme.background_color(), Color::rgb(0.96, 0.96, 0.93));
        assert_eq!(theme.shadow_color(), Color::rgba(0.1, 0.1, 0.2, 0.5));
        assert_eq!(theme.heading1_style().font_size, 2.3);
        assert_eq!(theme.hud_color(), Color::gray(0.15));
        assert_eq!(theme.background_palette().foreground, Color::gray(0.3));
    }

    #[test]
    fn default_dark_theme_constants() {
        let theme = Theme::from_colors(&ThemeOptions::default(), ThemeMode::Dark);

        assert_eq!(theme.background_color(), Color::gray(0.1));
        assert_eq!(theme.shadow_color(), Color::BLACK);
        assert_eq!(theme.hud_color(), Color::gray(0.02));
        assert_eq!(theme.background_palette().foreground, Color::gray(0.9));
        assert_eq!(theme.hud_palette().foreground, Color::gray(0.9));
    }

    #[test]
    fn default_seeds() {
        let theme = Theme::from_colors(&ThemeOptions::default(), ThemeMode::Light);

        assert_eq!(theme.primary_color(), Color::from_hex(0x01dffd));
        assert_eq!(theme.secondary_color(), Color::from_hex(0x0083ff));
        assert_eq!(theme.success_palette(), &Palette::semantic(Color::from_hex(0x1e8e3e)));
        assert_eq!(theme.warning_palette(), &Palette::semantic(Color::from_hex(0xf9a825)));
        assert_eq!(theme.danger_palette(), &Palette::semantic(Color::from_hex(0xb3261e)));
        assert_eq!(theme.primary_palette(), &Palette::from_seed(Color::from_hex(0x01dffd)));
    }

    #[test]
    fn neutral_defaults_to_tinted_background() {
        let primary = Color::from_hex(0xff0000);
        let options = ThemeOptions::new().primary(primary);
        let theme = Theme::from_colors(&options, ThemeMode::Light);

        let expected = shift(Color::rgb(0.96, 0.96, 0.93), 0.04, 0.0, None).blend(primary, 0.06);
        assert!(approx_color(theme.neutral_color(), expected));
        assert_eq!(theme.background_palette().background_variant, theme.neutral_color());
        assert!(theme.neutral_color().r > theme.neutral_color().g);
    }

    #[test]
    fn explicit_seeds_win_over_defaults() {
        let options = ThemeOptions::new()
            .background(Color::gray(0.5))
            .neutral(Color::gray(0.6))
            .hud(Color::gray(0.95))
            .disabled(Color::gray(0.7));
        let theme = Theme::from_colors(&options, ThemeMode::Dark);

        assert_eq!(theme.background_color(), Color::gray(0.5));
        assert_eq!(theme.neutral_color(), Color::gray(0.6));
        assert_eq!(theme.hud_color(), Color::gray(0.95));
        assert_eq!(theme.hud_palette().foreground, Color::gray(0.1));
        assert_eq!(theme.disabled_color(), Color::gray(0.7));
    }

    #[test]
    fn disabled_sits_between_background_and_text() {
        let theme = Theme::from_colors(&ThemeOptions::default(), ThemeMode::Light);
        let bg = theme.background_palette();

        assert!(approx_color(
            theme.disabled_color(),
            bg.background.blend(bg.foreground, 0.5)
        ));
    }

    #[test]
    fn text_color_override_reaches_body_and_palettes() {
        let text = Color::from_hex(0x222244);
        let options = ThemeOptions::new().text_color(text);
        let theme = Theme::from_colors(&options, ThemeMode::Light);

        assert_eq!(theme.background_palette().foreground, text);
        assert_eq!(theme.neutral_palette().foreground, text);
        assert_eq!(theme.text_style().fill, Some(TextFill::solid(text)));
    }

    #[test]
    fn auto_heading_uses_primary_when_it_stands_out() {
        // Dark blue on the bright default background
        let options = ThemeOptions::new().primary(Color::from_hex(0x1a237e));
        let theme = Theme::from_colors(&options, ThemeMode::Light);

        assert_eq!(
            theme.heading1_style().fill,
            Some(TextFill::solid(Color::from_hex(0x1a237e)))
        );
    }

    #[test]
    fn auto_heading_falls_back_to_plain_when_too_close() {
        // Default cyan primary vs. the bright background: gap is about 0.33,
        // a paler primary brings it below the threshold
        let options = ThemeOptions::new().primary(Color::from_hex(0xb2ebf2));
        let theme = Theme::from_colors(&options, ThemeMode::Light);

        assert_eq!(
            theme.heading1_style().fill,
            Some(TextFill::solid(Color::gray(0.3)))
        );
    }

    #[test]
    fn explicit_heading_fills_bypass_the_check() {
        let pale = Color::from_hex(0xb2ebf2);

        let primary = Theme::from_colors(
            &ThemeOptions::new().primary(pale).heading_fill(HeadingFill::Primary),
            ThemeMode::Light,
        );
        assert_eq!(primary.heading1_style().fill, Some(TextFill::solid(pale)));

        let plain = Theme::from_colors(
            &ThemeOptions::new()
                .primary(Color::from_hex(0x1a237e))
                .heading_fill(HeadingFill::Plain),
            ThemeMode::Light,
        );
        assert_eq!(
            plain.heading1_style().fill,
            Some(TextFill::solid(Color::gray(0.3)))
        );
    }

    #[test]
    fn custom_heading_fill_passes_through() {
        let gradient = TextFill::linear_gradient(
            45.0,
            [(Color::from_hex(0xff0080), 0.0), (Color::from_hex(0x7928ca), 1.0)],
        );
        let options = ThemeOptions::new().heading_fill(gradient.clone());
        let theme = Theme::from_colors(&options, ThemeMode::Dark);

        assert_eq!(theme.heading1_style().fill.as_ref(), Some(&gradient));
        assert_eq!(theme.heading3_style().fill.as_ref(), Some(&gradient));
        // Body text keeps the plain color
        assert_eq!(
            theme.text_style().fill,
            Some(TextFill::solid(Color::gray(0.9)))
        );
    }

    #[test]
    fn text_styles_derive_from_heading1() {
        let options = ThemeOptions::new()
            .font(Font::new("Inter"))
            .heading_font(Font::new("Playfair Display"));
        let theme = Theme::from_colors(&options, ThemeMode::Light);

        let h1 = theme.heading1_style();
        assert_eq!(h1.font, Some(Font::new("Playfair Display")));
        assert_eq!(h1.font_size, 2.3);

        assert_eq!(theme.heading2_style().font_size, 1.7);
        assert_eq!(theme.heading2_style().font, h1.font);
        assert_eq!(theme.heading2_style().fill, h1.fill);
        assert_eq!(theme.heading3_style().font_size, 1.2);

        let body = theme.text_style();
        assert_eq!(body.font, Some(Font::new("Inter")));
        assert_eq!(body.font_size, 1.0);
        assert_eq!(theme.font().unwrap(), &Font::new("Inter"));
    }

    #[test]
    fn heading_font_defaults_to_body_font() {
        let theme = Theme::from_colors(&ThemeOptions::default(), ThemeMode::Light);
        assert_eq!(theme.heading1_style().font, Some(Font::ROBOTO));
        assert_eq!(theme.monospace_font(), &Font::ROBOTO_MONO);
    }

    #[test]
    fn radii_are_copied() {
        let options = ThemeOptions::new().corner_radii(0.1, 0.2, 0.3);
        let theme = Theme::from_colors(&options, ThemeMode::Light);

        assert_eq!(theme.corner_radius_small(), 0.1);
        assert_eq!(theme.corner_radius_medium(), 0.2);
        assert_eq!(theme.corner_radius_large(), 0.3);
    }

    #[test]
    fn pair_applies_per_mode_text_colors() {
        let options = ThemeOptions::new().text_color(TextColor::PerMode {
            light: Some(Color::BLACK),
            dark: None,
        });
        let (light, dark) = Theme::pair_from_colors(&options);

        assert_eq!(light.text_style().fill, Some(TextFill::solid(Color::BLACK)));
        assert_eq!(dark.text_style().fill, Some(TextFill::solid(Color::gray(0.9))));
    }

    #[test]
    fn background_and_neutral_lean_towards_primary() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let theme = Theme::from_colors(&ThemeOptions::default(), mode);
            let primary = theme.primary_color();
            let bg = theme.background_color();
            let neutral = theme.neutral_color();

            assert_eq!(
                theme.background_palette(),
                &Palette::new(
                    bg,
                    neutral,
                    shift(bg, 0.25, 0.15, Some(primary)),
                    theme.background_palette().foreground,
                )
            );
            assert_eq!(
                theme.neutral_palette(),
                &Palette::new(
                    neutral,
                    shift(neutral, 0.15, 0.15, Some(primary)),
                    shift(neutral, 0.25, 0.15, Some(primary)),
                    theme.background_palette().foreground,
                )
            );
        }
    }

    #[test]
    fn hud_variants_move_away_from_hud() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let theme = Theme::from_colors(&ThemeOptions::default(), mode);
            let hud = theme.hud_palette();

            assert_eq!(hud.background_variant, shift(hud.background, 0.08, 0.0, None));
            assert_eq!(hud.background_active, shift(hud.background, 0.15, 0.0, None));
        }
    }

    #[test]
    fn disabled_palette_offsets() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let theme = Theme::from_colors(&ThemeOptions::default(), mode);
            let disabled = theme.disabled_color();

            assert_eq!(
                theme.disabled_palette(),
                &Palette::new(
                    disabled,
                    shift(disabled, 0.2, -0.3, None),
                    shift(disabled, 0.3, -0.3, None),
                    shift(disabled, 0.4, 0.2, None),
                )
            );
        }
    }
}
