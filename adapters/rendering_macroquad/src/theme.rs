//! Optional colour theme loaded from a `theme.toml` beside the binary.
//!
//! Every key is optional; anything left out keeps the original palette. A
//! missing file is not an error, a malformed one is.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use retro_snake_rendering::{Color, ScenePalette};
use serde::Deserialize;

/// Default location probed for a theme file.
#[must_use]
pub fn default_theme_path() -> PathBuf {
    PathBuf::from("theme.toml")
}

/// Loads the palette override from the provided path.
///
/// Returns `Ok(None)` when no file exists; contents that cannot be read or
/// parsed are errors.
pub fn load_palette(path: &Path) -> Result<Option<ScenePalette>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(error) => {
            return Err(error)
                .with_context(|| format!("failed to read theme file at {}", path.display()))
        }
    };
    parse_palette(&contents)
        .with_context(|| format!("failed to parse theme file at {}", path.display()))
        .map(Some)
}

/// Parses theme file contents into a palette, defaulting omitted entries.
pub fn parse_palette(contents: &str) -> Result<ScenePalette> {
    let theme: ThemeFile = toml::from_str(contents).context("invalid theme toml contents")?;
    let mut palette = ScenePalette::default();
    if let Some(rgb) = theme.background {
        palette.background = to_color(rgb);
    }
    if let Some(rgb) = theme.border {
        palette.border = to_color(rgb);
    }
    if let Some(rgb) = theme.snake {
        palette.snake = to_color(rgb);
    }
    if let Some(rgb) = theme.food {
        palette.food = to_color(rgb);
    }
    if let Some(rgb) = theme.text {
        palette.text = to_color(rgb);
    }
    Ok(palette)
}

fn to_color([red, green, blue]: [u8; 3]) -> Color {
    Color::from_rgb_u8(red, green, blue)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    background: Option<[u8; 3]>,
    border: Option<[u8; 3]>,
    snake: Option<[u8; 3]>,
    food: Option<[u8; 3]>,
    text: Option<[u8; 3]>,
}
