#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Retro Snake.
//!
//! All mutation flows through [`apply`]; adapters and systems observe the
//! results through the emitted [`Event`] batch and the read-only accessors in
//! [`query`]. Collisions are game states, not errors: leaving the field or
//! biting the body transitions the run into its terminal state instead of
//! surfacing a fault.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use retro_snake_core::{CellCoord, Command, Direction, Event, GridSize, OverReason};

const FOOD_GENERATION_SEED: u64 = 0x5eed_f00d_9e37_79b9;

const DEFAULT_CELL_COUNT: u32 = 25;
/// The fixed starting body spans columns 4..=6 on row 9, so the grid must be
/// at least this wide for the start state to be in bounds.
const MIN_CELL_COUNT: u32 = 10;
const MAX_CELL_COUNT: u32 = 1024;

/// Uniform samples attempted before falling back to a deterministic scan.
const FOOD_SAMPLE_BUDGET: u32 = 1024;

const INITIAL_BODY: [CellCoord; 3] = [
    CellCoord::new(6, 9),
    CellCoord::new(5, 9),
    CellCoord::new(4, 9),
];
const INITIAL_DIRECTION: Direction = Direction::Right;

/// Represents the authoritative Retro Snake world state.
#[derive(Debug)]
pub struct World {
    grid: GridSize,
    snake: Snake,
    food: CellCoord,
    running: bool,
    score: u32,
    high_score: u32,
    rng: ChaCha8Rng,
}

impl World {
    /// Creates a new world with the default grid and food seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(FOOD_GENERATION_SEED)
    }

    /// Creates a new world whose food placement is driven by the given seed.
    ///
    /// Two worlds built from the same seed and fed the same command sequence
    /// produce identical event batches.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut world = Self {
            grid: GridSize::new(DEFAULT_CELL_COUNT),
            snake: Snake::starting(),
            food: INITIAL_BODY[0],
            running: true,
            score: 0,
            high_score: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        world.begin_run();
        world
    }

    fn begin_run(&mut self) {
        self.snake.reset();
        self.score = 0;
        self.running = true;
        let _ = self.relocate_food();
    }

    /// Moves the food to a free cell, keeping the previous position when the
    /// snake fills the grid. Returns the new position, `None` if none exists.
    fn relocate_food(&mut self) -> Option<CellCoord> {
        let cell = place_food(&mut self.rng, self.grid, &self.snake)?;
        self.food = cell;
        Some(cell)
    }

    fn resolve_collisions(&mut self, head: CellCoord, out_events: &mut Vec<Event>) {
        if head == self.food {
            self.snake.schedule_growth();
            self.score = self.score.saturating_add(1);
            let relocated_to = self.relocate_food();
            out_events.push(Event::FoodEaten {
                cell: head,
                relocated_to,
                score: self.score,
            });
            if self.score > self.high_score {
                self.high_score = self.score;
                out_events.push(Event::HighScoreRaised {
                    value: self.high_score,
                });
            }
        }

        if !self.grid.contains(head) {
            self.finish_run(OverReason::LeftField, out_events);
            return;
        }

        if self.snake.bit_itself() {
            self.finish_run(OverReason::BitItself, out_events);
        }
    }

    fn finish_run(&mut self, reason: OverReason, out_events: &mut Vec<Event>) {
        self.running = false;
        out_events.push(Event::GameEnded {
            reason,
            score: self.score,
        });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureGrid { cell_count } => {
            world.grid = GridSize::new(cell_count.clamp(MIN_CELL_COUNT, MAX_CELL_COUNT));
            world.begin_run();
        }
        Command::SeedHighScore { value } => {
            world.high_score = world.high_score.max(value);
        }
        Command::ChangeDirection { direction } => {
            if world.running && world.snake.try_set_direction(direction) {
                out_events.push(Event::DirectionChanged { direction });
            }
        }
        Command::Tick => {
            if !world.running {
                return;
            }
            let head = world.snake.advance();
            out_events.push(Event::SnakeAdvanced { head });
            world.resolve_collisions(head, out_events);
        }
        Command::Restart => {
            if world.running {
                return;
            }
            world.begin_run();
            out_events.push(Event::GameRestarted);
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{Snake, World};
    use retro_snake_core::{CellCoord, Direction, GridSize};

    /// Provides the world's play-field dimensions.
    #[must_use]
    pub fn grid(world: &World) -> GridSize {
        world.grid
    }

    /// Reports whether the run is still active.
    #[must_use]
    pub fn is_running(world: &World) -> bool {
        world.running
    }

    /// Score accumulated during the current run.
    #[must_use]
    pub fn score(world: &World) -> u32 {
        world.score
    }

    /// Highest score observed for the process lifetime.
    #[must_use]
    pub fn high_score(world: &World) -> u32 {
        world.high_score
    }

    /// Cell currently occupied by the food.
    #[must_use]
    pub fn food_position(world: &World) -> CellCoord {
        world.food
    }

    /// Captures a read-only view of the snake.
    #[must_use]
    pub fn snake_view(world: &World) -> SnakeView {
        SnakeView::capture(&world.snake)
    }

    /// Read-only snapshot of the snake body and heading.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct SnakeView {
        cells: Vec<CellCoord>,
        direction: Direction,
    }

    impl SnakeView {
        fn capture(snake: &Snake) -> Self {
            Self {
                cells: snake.cells().collect(),
                direction: snake.direction(),
            }
        }

        /// Cell occupied by the head.
        #[must_use]
        pub fn head(&self) -> CellCoord {
            self.cells[0]
        }

        /// Current heading of the snake.
        #[must_use]
        pub const fn direction(&self) -> Direction {
            self.direction
        }

        /// Number of cells occupied by the body.
        #[must_use]
        pub fn len(&self) -> usize {
            self.cells.len()
        }

        /// Reports whether the view holds no cells. Never true in practice;
        /// present to pair with [`SnakeView::len`].
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.cells.is_empty()
        }

        /// Iterator over the body cells in head-to-tail order.
        pub fn iter(&self) -> impl Iterator<Item = &CellCoord> {
            self.cells.iter()
        }

        /// Consumes the view, yielding the cells in head-to-tail order.
        #[must_use]
        pub fn into_vec(self) -> Vec<CellCoord> {
            self.cells
        }
    }
}

/// Ordered chain of occupied cells, head at the front.
#[derive(Clone, Debug)]
struct Snake {
    body: VecDeque<CellCoord>,
    direction: Direction,
    pending_growth: bool,
}

impl Snake {
    fn starting() -> Self {
        Self {
            body: INITIAL_BODY.into_iter().collect(),
            direction: INITIAL_DIRECTION,
            pending_growth: false,
        }
    }

    fn reset(&mut self) {
        self.body.clear();
        self.body.extend(INITIAL_BODY);
        self.direction = INITIAL_DIRECTION;
        self.pending_growth = false;
    }

    fn head(&self) -> CellCoord {
        *self.body.front().expect("snake body is never empty")
    }

    /// Pushes a new head along the current heading; consumes the growth flag
    /// instead of trimming the tail when food was eaten on the previous step.
    fn advance(&mut self) -> CellCoord {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);
        if self.pending_growth {
            self.pending_growth = false;
        } else {
            let _ = self.body.pop_back();
        }
        new_head
    }

    /// Accepts the heading unless it reverses the current one. Reversal would
    /// drive the head straight into the neck, so it is a silent no-op.
    fn try_set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_reverse_of(self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    fn schedule_growth(&mut self) {
        self.pending_growth = true;
    }

    fn occupies(&self, cell: CellCoord) -> bool {
        self.body.contains(&cell)
    }

    fn bit_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|cell| *cell == head)
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.body.iter().copied()
    }
}

/// Picks a cell for the food that is guaranteed off the snake body.
///
/// Uniform rejection sampling runs first; if the budget is exhausted a
/// row-major scan returns the first free cell. `None` means the snake fills
/// the entire grid and no valid cell exists.
fn place_food(rng: &mut ChaCha8Rng, grid: GridSize, snake: &Snake) -> Option<CellCoord> {
    let bound = grid.cell_count();
    if bound == 0 {
        return None;
    }

    for _ in 0..FOOD_SAMPLE_BUDGET {
        let x = rng.gen_range(0..bound) as i32;
        let y = rng.gen_range(0..bound) as i32;
        let cell = CellCoord::new(x, y);
        if !snake.occupies(cell) {
            return Some(cell);
        }
    }

    for y in 0..bound {
        for x in 0..bound {
            let cell = CellCoord::new(x as i32, y as i32);
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }
    }

    None
}
