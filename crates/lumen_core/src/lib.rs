//! Lumen Core Types
//!
//! This crate provides the value types shared by every Lumen crate:
//!
//! - **Color**: RGBA color in sRGB space with `f32` channels
//! - **Color operations**: perceived brightness, blending, brighter/darker
//!   shifts in HSV space
//! - **Hex parsing**: `#rrggbb` / `#rrggbbaa` strings
//!
//! # Example
//!
//! ```rust
//! use lumen_core::Color;
//!
//! let brand = Color::from_hex(0x01dffd);
//! let muted = brand.blend(Color::gray(0.5), 0.25);
//!
//! assert!(brand.perceived_brightness() > 0.5);
//! assert_eq!(muted.a, 1.0);
//! ```

pub mod color;

pub use color::{Color, ColorParseError};
