#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Retro Snake adapters.
//!
//! Backends own the window loop and input polling; the simulation feeds them
//! through an `update_scene` callback that rewrites the [`Scene`] once per
//! frame. The scene is a plain read-only snapshot of the world: backends draw
//! it, they never mutate entity state.

use std::time::Instant;

use anyhow::Result as AnyResult;
use glam::Vec2;
use retro_snake_core::{CellCoord, Direction, GridSize};

/// Pixel side length of one grid cell, matching the original presentation.
pub const DEFAULT_CELL_SIZE: f32 = 30.0;
/// Pixel border between the window edge and the play field.
pub const DEFAULT_BORDER_OFFSET: f32 = 75.0;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns the same color with the provided alpha channel.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Colors applied when presenting the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePalette {
    /// Window clear color behind the play field.
    pub background: Color,
    /// Border drawn around the play field.
    pub border: Color,
    /// Snake body segments.
    pub snake: Color,
    /// Food marker.
    pub food: Color,
    /// Score and overlay text.
    pub text: Color,
}

impl Default for ScenePalette {
    /// The original game's palette: pale green field, dark green accents,
    /// red food.
    fn default() -> Self {
        Self {
            background: Color::from_rgb_u8(173, 204, 96),
            border: Color::from_rgb_u8(43, 51, 24),
            snake: Color::from_rgb_u8(43, 51, 24),
            food: Color::from_rgb_u8(230, 41, 55),
            text: Color::from_rgb_u8(43, 51, 24),
        }
    }
}

/// Projects grid cells onto pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPresentation {
    cell_count: u32,
    cell_size: f32,
    border_offset: f32,
}

impl GridPresentation {
    /// Creates a projection for the provided play field.
    #[must_use]
    pub const fn new(grid: GridSize, cell_size: f32, border_offset: f32) -> Self {
        Self {
            cell_count: grid.cell_count(),
            cell_size,
            border_offset,
        }
    }

    /// Creates a projection with the original cell size and border offset.
    #[must_use]
    pub const fn with_defaults(grid: GridSize) -> Self {
        Self::new(grid, DEFAULT_CELL_SIZE, DEFAULT_BORDER_OFFSET)
    }

    /// Number of cells along each axis of the play field.
    #[must_use]
    pub const fn cell_count(&self) -> u32 {
        self.cell_count
    }

    /// Pixel side length of one cell.
    #[must_use]
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Pixel border between the window edge and the play field.
    #[must_use]
    pub const fn border_offset(&self) -> f32 {
        self.border_offset
    }

    /// Pixel span of the play field without the border.
    #[must_use]
    pub fn field_span(&self) -> f32 {
        self.cell_count as f32 * self.cell_size
    }

    /// Total pixel span of the window along each axis.
    #[must_use]
    pub fn window_span(&self) -> f32 {
        2.0 * self.border_offset + self.field_span()
    }

    /// Upper-left pixel corner of the provided cell.
    #[must_use]
    pub fn cell_origin(&self, cell: CellCoord) -> Vec2 {
        Vec2::new(
            self.border_offset + cell.x() as f32 * self.cell_size,
            self.border_offset + cell.y() as f32 * self.cell_size,
        )
    }

    /// Pixel center of the provided cell.
    #[must_use]
    pub fn cell_center(&self, cell: CellCoord) -> Vec2 {
        self.cell_origin(cell) + Vec2::splat(self.cell_size / 2.0)
    }
}

/// Input snapshot gathered by backends before updating the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Steering request detected on this frame, if any.
    pub direction: Option<Direction>,
    /// Whether the backend detected a restart request on this frame.
    pub restart: bool,
}

/// Read-only snapshot of the world state drawn by backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Projection of grid cells onto pixels.
    pub grid: GridPresentation,
    /// Colors applied when drawing.
    pub palette: ScenePalette,
    /// Snake body cells in head-to-tail order.
    pub snake: Vec<CellCoord>,
    /// Cell occupied by the food.
    pub food: CellCoord,
    /// Score of the current run.
    pub score: u32,
    /// Highest score observed for the process lifetime.
    pub high_score: u32,
    /// False once the run has reached its terminal state.
    pub running: bool,
}

impl Scene {
    /// Creates an empty scene for the provided projection; the first
    /// `update_scene` call fills in the entity state.
    #[must_use]
    pub fn new(grid: GridPresentation, palette: ScenePalette) -> Self {
        Self {
            grid,
            palette,
            snake: Vec::new(),
            food: CellCoord::new(0, 0),
            score: 0,
            high_score: 0,
            running: true,
        }
    }
}

/// Window configuration and initial scene handed to a backend.
#[derive(Clone, Debug)]
pub struct Presentation {
    /// Title displayed by the backend's window.
    pub window_title: String,
    /// Initial scene drawn until the first update.
    pub scene: Scene,
}

/// Contract implemented by concrete rendering backends.
pub trait RenderingBackend {
    /// Runs the window loop until the player quits.
    ///
    /// `update_scene` is invoked once per frame with the current monotonic
    /// instant and the frame's input snapshot; it is the only place where the
    /// simulation and the renderer meet.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Instant, FrameInput, &mut Scene) + 'static;
}
