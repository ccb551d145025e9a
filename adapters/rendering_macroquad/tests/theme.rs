use std::path::Path;

use retro_snake_rendering::{Color, ScenePalette};
use retro_snake_rendering_macroquad::theme;

#[test]
fn missing_theme_file_is_not_an_error() {
    let loaded = theme::load_palette(Path::new("does/not/exist/theme.toml"))
        .expect("missing file is fine");
    assert_eq!(loaded, None);
}

#[test]
fn empty_theme_keeps_the_default_palette() {
    let palette = theme::parse_palette("").expect("empty theme parses");
    assert_eq!(palette, ScenePalette::default());
}

#[test]
fn partial_theme_overrides_only_named_colors() {
    let palette = theme::parse_palette("snake = [10, 20, 30]\n").expect("valid theme");

    assert_eq!(palette.snake, Color::from_rgb_u8(10, 20, 30));
    assert_eq!(palette.background, ScenePalette::default().background);
    assert_eq!(palette.food, ScenePalette::default().food);
}

#[test]
fn full_theme_overrides_everything() {
    let contents = "\
background = [1, 2, 3]
border = [4, 5, 6]
snake = [7, 8, 9]
food = [10, 11, 12]
text = [13, 14, 15]
";
    let palette = theme::parse_palette(contents).expect("valid theme");

    assert_eq!(palette.background, Color::from_rgb_u8(1, 2, 3));
    assert_eq!(palette.border, Color::from_rgb_u8(4, 5, 6));
    assert_eq!(palette.snake, Color::from_rgb_u8(7, 8, 9));
    assert_eq!(palette.food, Color::from_rgb_u8(10, 11, 12));
    assert_eq!(palette.text, Color::from_rgb_u8(13, 14, 15));
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(theme::parse_palette("snek = [1, 2, 3]\n").is_err());
}

#[test]
fn malformed_channels_are_rejected() {
    assert!(theme::parse_palette("snake = [300, 0, 0]\n").is_err());
    assert!(theme::parse_palette("snake = \"green\"\n").is_err());
}
