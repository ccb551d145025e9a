#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Retro Snake experience.
//!
//! Wires the authoritative world, the tick scheduler and the input buffer
//! into the macroquad backend's frame loop. The backend polls input at
//! render rate; the scheduler admits simulation steps at the configured
//! fixed rate, so the snake advances the same way no matter how fast the
//! machine draws frames.

mod score_store;

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Parser;
use retro_snake_core::{Command, Event, WINDOW_TITLE};
use retro_snake_rendering::{
    GridPresentation, Presentation, RenderingBackend, Scene, ScenePalette,
};
use retro_snake_rendering_macroquad::{theme, MacroquadBackend};
use retro_snake_system_control::Control;
use retro_snake_system_scheduler::TickScheduler;
use retro_snake_world::{self as world, query, World};

use crate::score_store::ScoreStore;

/// Command-line options for the Retro Snake binary.
#[derive(Debug, Parser)]
#[command(name = "retro-snake", about = "Classic grid snake on macroquad")]
struct Args {
    /// Number of cells along each axis of the square play field.
    #[arg(long, default_value_t = 25)]
    cell_count: u32,
    /// Milliseconds between admitted simulation steps.
    #[arg(long, default_value_t = 200)]
    tick_ms: u64,
    /// Seed for food placement; omitted means a fresh run every time.
    #[arg(long)]
    seed: Option<u64>,
    /// Path of the persisted high-score file.
    #[arg(long, default_value = "highscore.txt")]
    high_score_file: PathBuf,
    /// Path probed for an optional colour theme.
    #[arg(long, default_value_os_t = theme::default_theme_path())]
    theme_file: PathBuf,
}

/// Entry point for the Retro Snake command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();

    let store = ScoreStore::new(args.high_score_file);
    let initial_high_score = match store.load() {
        Ok(value) => value,
        Err(error) => {
            eprintln!("warning: {error}; starting with a high score of 0");
            0
        }
    };

    let mut world = match args.seed {
        Some(seed) => World::with_seed(seed),
        None => World::with_seed(rand::random()),
    };
    let mut boot_events = Vec::new();
    world::apply(
        &mut world,
        Command::ConfigureGrid {
            cell_count: args.cell_count,
        },
        &mut boot_events,
    );
    world::apply(
        &mut world,
        Command::SeedHighScore {
            value: initial_high_score,
        },
        &mut boot_events,
    );

    let grid = GridPresentation::with_defaults(query::grid(&world));
    let mut scene = Scene::new(grid, ScenePalette::default());
    populate_scene(&world, &mut scene);
    let presentation = Presentation {
        window_title: WINDOW_TITLE.to_owned(),
        scene,
    };

    let tick_interval = Duration::from_millis(args.tick_ms.max(1));
    let mut scheduler = TickScheduler::new(tick_interval, Instant::now());
    let mut control = Control::new();
    let mut commands = Vec::new();
    let mut events = Vec::new();

    let backend = MacroquadBackend::default().with_theme_path(args.theme_file);
    backend.run(presentation, move |now, input, scene| {
        if let Some(direction) = input.direction {
            control.queue_direction(direction);
        }
        if input.restart && !query::is_running(&world) {
            control.request_restart();
        }

        if scheduler.triggered(now) {
            control.drain(&mut commands);
            events.clear();
            for command in commands.drain(..) {
                world::apply(&mut world, command, &mut events);
            }
            for event in &events {
                if let Event::HighScoreRaised { value } = event {
                    if let Err(error) = store.save(*value) {
                        eprintln!("warning: {error}; the record will not survive this session");
                    }
                }
            }
        }

        populate_scene(&world, scene);
    })
}

fn populate_scene(world: &World, scene: &mut Scene) {
    scene.snake = query::snake_view(world).into_vec();
    scene.food = query::food_position(world);
    scene.score = query::score(world);
    scene.high_score = query::high_score(world);
    scene.running = query::is_running(world);
}
