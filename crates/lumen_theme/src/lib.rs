//! Lumen Theme System
//!
//! Derives a complete, consistent theme from a handful of seed colors.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Color derivation**: brightness-aware shifting and tinting of colors
//! - **Palettes**: background/variant/active/foreground quadruples per
//!   semantic area (primary, neutral, HUD, success, ...)
//! - **Themes**: nine palettes, corner radii, a shadow color and text styles
//! - **Light/dark pairs**: both modes from the same seeds
//! - **Configuration**: themes described in `theme.toml`
//!
//! # Quick Start
//!
//! ```rust
//! use lumen_core::Color;
//! use lumen_theme::{Theme, ThemeMode, ThemeOptions};
//!
//! let options = ThemeOptions::new()
//!     .primary(Color::from_hex(0x01dffd))
//!     .secondary(Color::from_hex(0x0083ff));
//!
//! let theme = Theme::from_colors(&options, ThemeMode::Light);
//! assert!(theme.is_light_theme());
//!
//! let (light, dark) = Theme::pair_from_colors(&options);
//! assert_eq!(light.primary_palette(), dark.primary_palette());
//! ```
//!
//! # Derivation
//!
//! Every color that isn't supplied is derived from the ones that are:
//!
//! - [`derive_color`]: shift a color towards the less crowded end of the
//!   brightness range, or tint it towards a target color
//! - [`Palette::from_color`]: seed → four-color palette
//! - [`Palette::semantic`]: fixed-offset palettes for success/warning/danger
//!
//! Themes are immutable. Share them with `Arc` and replace them wholesale
//! when the configuration changes.

mod builder;
pub mod config;
pub mod derive;
pub mod error;
pub mod options;
pub mod palette;
pub mod theme;
pub mod typography;

// Re-export commonly used types
pub use config::ThemeConfig;
pub use derive::derive_color;
pub use error::{Result, ThemeError};
pub use options::{HeadingFill, TextColor, ThemeOptions};
pub use palette::Palette;
pub use theme::{ColorSet, LocalColorSet, SerializedColorSet, Theme, ThemeBundle, ThemeMode};
pub use typography::{Font, GradientStop, TextFill, TextStyle};
