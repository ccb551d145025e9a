#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Retro Snake.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature; the game has no sound of its own.

pub mod theme;

use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use macroquad::input::{is_key_pressed, KeyCode};
use retro_snake_core::Direction;
use retro_snake_rendering::{Color, FrameInput, Presentation, RenderingBackend, Scene};

/// Snapshot of edge-triggered keys observed during a single frame.
#[derive(Clone, Copy, Debug, Default)]
struct KeyboardInput {
    /// `Escape` leaves the game loop.
    quit_requested: bool,
    /// Arrow keys or WASD steer the snake.
    direction: Option<Direction>,
    /// `Space` restarts after game over.
    restart: bool,
}

impl KeyboardInput {
    fn poll() -> Self {
        let quit_requested = is_key_pressed(KeyCode::Escape);
        let restart = is_key_pressed(KeyCode::Space);

        let direction = if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
            Some(Direction::Up)
        } else if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
            Some(Direction::Down)
        } else if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
            Some(Direction::Left)
        } else if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
            Some(Direction::Right)
        } else {
            None
        };

        Self {
            quit_requested,
            direction,
            restart,
        }
    }
}

/// Rendering backend implemented on top of macroquad.
#[derive(Clone, Debug)]
pub struct MacroquadBackend {
    theme_path: PathBuf,
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self {
            theme_path: theme::default_theme_path(),
        }
    }
}

impl MacroquadBackend {
    /// Overrides the path probed for an optional colour theme.
    #[must_use]
    pub fn with_theme_path(mut self, path: PathBuf) -> Self {
        self.theme_path = path;
        self
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Instant, FrameInput, &mut Scene) + 'static,
    {
        let Presentation {
            window_title,
            scene,
        } = presentation;

        let mut scene = scene;
        if let Some(palette) = theme::load_palette(&self.theme_path)? {
            scene.palette = palette;
        }

        let window_span = scene.grid.window_span().ceil() as i32;
        let config = macroquad::window::Conf {
            window_title: window_title.clone(),
            window_width: window_span,
            window_height: window_span,
            ..macroquad::window::Conf::default()
        };

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;

            loop {
                let keyboard = KeyboardInput::poll();
                if keyboard.quit_requested {
                    break;
                }

                let frame_input = FrameInput {
                    direction: keyboard.direction,
                    restart: keyboard.restart,
                };
                update_scene(Instant::now(), frame_input, &mut scene);

                macroquad::window::clear_background(to_macroquad_color(scene.palette.background));
                draw_border(&scene);
                draw_header(&window_title, &scene);
                draw_food(&scene);
                draw_snake(&scene);
                if !scene.running {
                    draw_game_over(&scene);
                }

                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}

fn draw_border(scene: &Scene) {
    let grid = &scene.grid;
    let offset = grid.border_offset();
    let span = grid.field_span();
    macroquad::shapes::draw_rectangle_lines(
        offset - 5.0,
        offset - 5.0,
        span + 10.0,
        span + 10.0,
        5.0,
        to_macroquad_color(scene.palette.border),
    );
}

fn draw_header(window_title: &str, scene: &Scene) {
    let grid = &scene.grid;
    let text_color = to_macroquad_color(scene.palette.text);
    draw_label(window_title, grid.border_offset() - 5.0, 50.0, 40.0, text_color);
    draw_label(
        &format!("Score: {}", scene.score),
        grid.border_offset() + grid.field_span() - 150.0,
        50.0,
        40.0,
        text_color,
    );
    draw_label(
        &format!("Best: {}", scene.high_score),
        grid.border_offset() + grid.field_span() - 150.0,
        70.0,
        20.0,
        text_color,
    );
}

fn draw_food(scene: &Scene) {
    let center = scene.grid.cell_center(scene.food);
    let radius = scene.grid.cell_size() / 2.0 - 2.0;
    macroquad::shapes::draw_circle(
        center.x,
        center.y,
        radius,
        to_macroquad_color(scene.palette.food),
    );
}

fn draw_snake(scene: &Scene) {
    let size = scene.grid.cell_size();
    let color = to_macroquad_color(scene.palette.snake);
    for cell in &scene.snake {
        let origin = scene.grid.cell_origin(*cell);
        macroquad::shapes::draw_rectangle(origin.x, origin.y, size, size, color);
    }
}

fn draw_game_over(scene: &Scene) {
    let grid = &scene.grid;
    let offset = grid.border_offset();
    let span = grid.field_span();
    let center = offset + span / 2.0;

    let veil = to_macroquad_color(scene.palette.background.with_alpha(0.6));
    macroquad::shapes::draw_rectangle(offset, offset, span, span, veil);

    let text_color = to_macroquad_color(scene.palette.text);
    draw_label("Game Over!", center - 100.0, center - 40.0, 40.0, text_color);
    draw_label(
        &format!("Final Score: {}", scene.score),
        center - 100.0,
        center + 10.0,
        40.0,
        text_color,
    );
    draw_label(
        &format!("High Score: {}", scene.high_score),
        center - 100.0,
        center + 60.0,
        20.0,
        text_color,
    );
    draw_label(
        "Press SPACE to Restart",
        center - 150.0,
        center + 100.0,
        20.0,
        text_color,
    );
}

fn draw_label(text: &str, x: f32, y: f32, font_size: f32, color: macroquad::color::Color) {
    // draw_text reports the rendered dimensions; layout here is fixed.
    let _ = macroquad::text::draw_text(text, x, y, font_size, color);
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}
