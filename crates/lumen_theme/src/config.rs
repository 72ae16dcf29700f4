//! Theme configuration files (theme.toml)
//!
//! ```toml
//! mode = "dark"
//! primary_color = "#01dffd"
//! text_color = ["#333333", "#eeeeee"]
//! heading_fill = "auto"
//! font = "Inter"
//! corner_radius_large = 2.0
//! ```
//!
//! Colors are hex strings. `text_color` is either one color for both modes,
//! a `[light, dark]` pair, or a `{ light = .., dark = .. }` table.

use std::fs;
use std::path::Path;

use crate::error::{Result, ThemeError};
use crate::options::{HeadingFill, TextColor, ThemeOptions};
use crate::theme::{Theme, ThemeBundle, ThemeMode};
use crate::typography::{Font, TextFill};
use lumen_core::Color;
use serde::Deserialize;

/// File contents as written by the user, before validation
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawThemeConfig {
    mode: Option<ThemeMode>,
    /// Replaced by `mode`
    light: Option<bool>,

    primary_color: Option<String>,
    secondary_color: Option<String>,
    background_color: Option<String>,
    neutral_color: Option<String>,
    hud_color: Option<String>,
    disabled_color: Option<String>,
    success_color: Option<String>,
    warning_color: Option<String>,
    danger_color: Option<String>,

    corner_radius_small: Option<f32>,
    corner_radius_medium: Option<f32>,
    corner_radius_large: Option<f32>,

    heading_fill: Option<String>,
    text_color: Option<RawTextColor>,

    font: Option<String>,
    heading_font: Option<String>,
    monospace_font: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTextColor {
    Single(String),
    Pair(Vec<String>),
    PerMode {
        #[serde(default)]
        light: Option<String>,
        #[serde(default)]
        dark: Option<String>,
    },
}

/// A validated theme configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeConfig {
    mode: ThemeMode,
    options: ThemeOptions,
}

impl ThemeConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let raw: RawThemeConfig =
            toml::from_str(src).map_err(|e| ThemeError::Config(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("loading theme config from {}", path.display());

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Mode for [`ThemeConfig::build`]. Pairs always build both.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    pub fn build(&self) -> Theme {
        Theme::from_colors(&self.options, self.mode)
    }

    pub fn build_pair(&self) -> (Theme, Theme) {
        Theme::pair_from_colors(&self.options)
    }

    pub fn bundle(&self) -> ThemeBundle {
        ThemeBundle::from_colors(&self.options)
    }

    fn from_raw(mut raw: RawThemeConfig) -> Result<Self> {
        remap_deprecated(&mut raw);

        let defaults = ThemeOptions::default();

        let options = ThemeOptions {
            primary_color: parse_color(raw.primary_color.as_deref())?,
            secondary_color: parse_color(raw.secondary_color.as_deref())?,
            background_color: parse_color(raw.background_color.as_deref())?,
            neutral_color: parse_color(raw.neutral_color.as_deref())?,
            hud_color: parse_color(raw.hud_color.as_deref())?,
            disabled_color: parse_color(raw.disabled_color.as_deref())?,
            success_color: parse_color(raw.success_color.as_deref())?,
            warning_color: parse_color(raw.warning_color.as_deref())?,
            danger_color: parse_color(raw.danger_color.as_deref())?,
            corner_radius_small: raw
                .corner_radius_small
                .unwrap_or(defaults.corner_radius_small),
            corner_radius_medium: raw
                .corner_radius_medium
                .unwrap_or(defaults.corner_radius_medium),
            corner_radius_large: raw
                .corner_radius_large
                .unwrap_or(defaults.corner_radius_large),
            heading_fill: parse_heading_fill(raw.heading_fill.as_deref())?,
            text_color: parse_text_color(raw.text_color)?,
            font: raw.font.map(Font::new).unwrap_or(defaults.font),
            heading_font: raw.heading_font.map(Font::new),
            monospace_font: raw
                .monospace_font
                .map(Font::new)
                .unwrap_or(defaults.monospace_font),
        };

        Ok(Self {
            mode: raw.mode.unwrap_or_default(),
            options,
        })
    }
}

/// Translate the old `light = true|false` key into `mode`
fn remap_deprecated(raw: &mut RawThemeConfig) {
    let Some(light) = raw.light.take() else {
        return;
    };

    if let Some(mode) = raw.mode {
        tracing::warn!(
            "theme config sets both `light` and `mode`; `light` is deprecated and ignored, using mode = {:?}",
            mode
        );
        return;
    }

    let mode = ThemeMode::from_light_flag(light);
    tracing::warn!(
        "theme config key `light` is deprecated, use `mode = \"{}\"` instead",
        if mode.is_light() { "light" } else { "dark" }
    );
    raw.mode = Some(mode);
}

fn parse_color(value: Option<&str>) -> Result<Option<Color>> {
    value
        .map(str::parse::<Color>)
        .transpose()
        .map_err(ThemeError::from)
}

fn parse_heading_fill(value: Option<&str>) -> Result<HeadingFill> {
    let Some(value) = value else {
        return Ok(HeadingFill::Auto);
    };

    Ok(match value {
        "auto" => HeadingFill::Auto,
        "primary" => HeadingFill::Primary,
        "plain" => HeadingFill::Plain,
        hex => HeadingFill::Custom(TextFill::solid(hex.parse::<Color>()?)),
    })
}

fn parse_text_color(value: Option<RawTextColor>) -> Result<TextColor> {
    Ok(match value {
        None => TextColor::Auto,
        Some(RawTextColor::Single(hex)) => TextColor::Single(hex.parse()?),
        Some(RawTextColor::Pair(pair)) => {
            let [light, dark] = <[String; 2]>::try_from(pair).map_err(|pair| {
                ThemeError::Config(format!(
                    "text_color must be a [light, dark] pair, got {} entries",
                    pair.len()
                ))
            })?;
            TextColor::PerMode {
                light: Some(light.parse()?),
                dark: Some(dark.parse()?),
            }
        }
        Some(RawTextColor::PerMode { light, dark }) => TextColor::PerMode {
            light: parse_color(light.as_deref())?,
            dark: parse_color(dark.as_deref())?,
        },
    })
}
