//! Inputs for theme construction

use crate::theme::ThemeMode;
use crate::typography::{Font, TextFill};
use lumen_core::Color;

/// Fill used for headings
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HeadingFill {
    /// Primary color if it stands out enough from the background,
    /// otherwise the plain text color
    #[default]
    Auto,
    /// Always the primary color
    Primary,
    /// Always the plain text color
    Plain,
    /// Used as-is, e.g. a gradient
    Custom(TextFill),
}

impl From<TextFill> for HeadingFill {
    fn from(fill: TextFill) -> Self {
        Self::Custom(fill)
    }
}

/// Text color override for neutral and background contexts
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TextColor {
    /// Pick a legible gray based on the background
    #[default]
    Auto,
    /// Same color in light and dark themes
    Single(Color),
    /// Independent overrides; `None` falls back to the automatic choice
    PerMode {
        light: Option<Color>,
        dark: Option<Color>,
    },
}

impl TextColor {
    pub fn for_mode(self, mode: ThemeMode) -> Option<Color> {
        match self {
            Self::Auto => None,
            Self::Single(color) => Some(color),
            Self::PerMode { light, dark } => match mode {
                ThemeMode::Light => light,
                ThemeMode::Dark => dark,
            },
        }
    }
}

impl From<Color> for TextColor {
    fn from(color: Color) -> Self {
        Self::Single(color)
    }
}

impl From<(Option<Color>, Option<Color>)> for TextColor {
    fn from((light, dark): (Option<Color>, Option<Color>)) -> Self {
        Self::PerMode { light, dark }
    }
}

/// Seed colors and settings a theme is derived from.
///
/// Every color left as `None` gets a default, some of which depend on the
/// mode and on other colors.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeOptions {
    pub primary_color: Option<Color>,
    pub secondary_color: Option<Color>,
    pub background_color: Option<Color>,
    pub neutral_color: Option<Color>,
    pub hud_color: Option<Color>,
    pub disabled_color: Option<Color>,
    pub success_color: Option<Color>,
    pub warning_color: Option<Color>,
    pub danger_color: Option<Color>,

    pub corner_radius_small: f32,
    pub corner_radius_medium: f32,
    pub corner_radius_large: f32,

    pub heading_fill: HeadingFill,
    pub text_color: TextColor,

    pub font: Font,
    pub heading_font: Option<Font>,
    pub monospace_font: Font,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            primary_color: None,
            secondary_color: None,
            background_color: None,
            neutral_color: None,
            hud_color: None,
            disabled_color: None,
            success_color: None,
            warning_color: None,
            danger_color: None,
            corner_radius_small: 0.4,
            corner_radius_medium: 0.8,
            corner_radius_large: 1.8,
            heading_fill: HeadingFill::Auto,
            text_color: TextColor::Auto,
            font: Font::ROBOTO,
            heading_font: None,
            monospace_font: Font::ROBOTO_MONO,
        }
    }
}

impl ThemeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(mut self, color: Color) -> Self {
        self.primary_color = Some(color);
        self
    }

    pub fn secondary(mut self, color: Color) -> Self {
        self.secondary_color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn neutral(mut self, color: Color) -> Self {
        self.neutral_color = Some(color);
        self
    }

    pub fn hud(mut self, color: Color) -> Self {
        self.hud_color = Some(color);
        self
    }

    pub fn disabled(mut self, color: Color) -> Self {
        self.disabled_color = Some(color);
        self
    }

    pub fn success(mut self, color: Color) -> Self {
        self.success_color = Some(color);
        self
    }

    pub fn warning(mut self, color: Color) -> Self {
        self.warning_color = Some(color);
        self
    }

    pub fn danger(mut self, color: Color) -> Self {
        self.danger_color = Some(color);
        self
    }

    pub fn corner_radii(mut self, small: f32, medium: f32, large: f32) -> Self {
        self.corner_radius_small = small;
        self.corner_radius_medium = medium;
        self.corner_radius_large = large;
        self
    }

    pub fn heading_fill(mut self, fill: impl Into<HeadingFill>) -> Self {
        self.heading_fill = fill.into();
        self
    }

    pub fn text_color(mut self, color: impl Into<TextColor>) -> Self {
        self.text_color = color.into();
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn heading_font(mut self, font: Font) -> Self {
        self.heading_font = Some(font);
        self
    }

    pub fn monospace_font(mut self, font: Font) -> Self {
        self.monospace_font = font;
        self
    }
}
