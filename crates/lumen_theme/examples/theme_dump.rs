//! Theme Dump
//!
//! Builds a light/dark theme pair and prints it as JSON, along with the
//! client encoding of a few color sets.
//!
//! Run with:
//! `cargo run -p lumen_theme --example theme_dump [path/to/theme.toml]`

use anyhow::{Context, Result};
use lumen_core::Color;
use lumen_theme::{ColorSet, ThemeConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ThemeConfig::load(&path)
            .with_context(|| format!("failed to load theme config `{path}`"))?,
        None => ThemeConfig::from_toml_str("")?,
    };

    let bundle = config.bundle();

    for theme in [bundle.light(), bundle.dark()] {
        tracing::info!(
            mode = ?theme.mode(),
            font = theme.font()?.family(),
            "theme ready"
        );
        println!("{}", serde_json::to_string_pretty(theme)?);

        for set in [ColorSet::from("primary"), ColorSet::from(Color::from_hex(0x7b1fa2))] {
            println!(
                "{set:?} => {}",
                serde_json::to_string(&theme.serialize_colorset(&set))?
            );
        }
    }

    Ok(())
}
