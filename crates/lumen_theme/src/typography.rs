//! Fonts, text fills and text styles

use std::borrow::Cow;

use lumen_core::Color;
use serde::Serialize;

/// A font family reference, resolved by the renderer
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Font {
    family: Cow<'static, str>,
}

impl Font {
    pub const ROBOTO: Font = Font::from_static("Roboto");
    pub const ROBOTO_MONO: Font = Font::from_static("Roboto Mono");

    pub const fn from_static(family: &'static str) -> Self {
        Self {
            family: Cow::Borrowed(family),
        }
    }

    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: Cow::Owned(family.into()),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }
}

/// Color stop of a gradient fill
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    pub color: Color,
    pub offset: f32,
}

/// How glyphs are painted
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TextFill {
    Solid { color: Color },
    LinearGradient { angle_degrees: f32, stops: Vec<GradientStop> },
}

impl TextFill {
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }

    pub fn linear_gradient(angle_degrees: f32, stops: impl IntoIterator<Item = (Color, f32)>) -> Self {
        Self::LinearGradient {
            angle_degrees,
            stops: stops
                .into_iter()
                .map(|(color, offset)| GradientStop { color, offset })
                .collect(),
        }
    }

    /// The color of a solid fill
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid { color } => Some(*color),
            Self::LinearGradient { .. } => None,
        }
    }
}

impl From<Color> for TextFill {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}

/// Font, fill and size of a run of text. Sizes are in font-relative units.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    pub font: Option<Font>,
    pub fill: Option<TextFill>,
    pub font_size: f32,
}

impl TextStyle {
    pub fn new(font: Font, fill: impl Into<TextFill>, font_size: f32) -> Self {
        Self {
            font: Some(font),
            fill: Some(fill.into()),
            font_size,
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_fill(mut self, fill: impl Into<TextFill>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: None,
            fill: None,
            font_size: 1.0,
        }
    }
}
