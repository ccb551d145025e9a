#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Retro Snake simulation.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and the input/timing systems. Adapters submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! describing what actually happened. Rendering reads snapshot state only and
//! never mutates the simulation.

use serde::{Deserialize, Serialize};

/// Canonical window title displayed by graphical adapters.
pub const WINDOW_TITLE: &str = "Retro Snake";

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Configures the square play field and resets the run.
    ConfigureGrid {
        /// Number of cells along each axis of the square grid.
        cell_count: u32,
    },
    /// Requests a heading change for the snake.
    ///
    /// Reversal requests and requests arriving after game over are silent
    /// no-ops; acceptance is observable through [`Event::DirectionChanged`].
    ChangeDirection {
        /// Heading the snake should adopt on its next advance.
        direction: Direction,
    },
    /// Advances the simulation by exactly one admitted step.
    Tick,
    /// Re-arms a finished run: fresh snake, relocated food, score zeroed.
    Restart,
    /// Installs the persisted high score at boot.
    SeedHighScore {
        /// Highest score recorded by a previous process, if any.
        value: u32,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the snake accepted a new heading.
    DirectionChanged {
        /// Heading now in effect.
        direction: Direction,
    },
    /// Confirms that the snake advanced by one cell.
    SnakeAdvanced {
        /// Cell occupied by the head after the advance.
        head: CellCoord,
    },
    /// Reports that the snake consumed the food on this step.
    FoodEaten {
        /// Cell where the food was consumed.
        cell: CellCoord,
        /// Cell the food now occupies, guaranteed off the snake body, or
        /// `None` when the snake left no free cell to relocate into.
        relocated_to: Option<CellCoord>,
        /// Score after the increment.
        score: u32,
    },
    /// Reports that the running score exceeded the recorded high score.
    HighScoreRaised {
        /// New high-score value.
        value: u32,
    },
    /// Announces a terminal state: no further steps until restart.
    GameEnded {
        /// Collision that ended the run.
        reason: OverReason,
        /// Final score of the run.
        score: u32,
    },
    /// Announces that a finished run was re-armed.
    GameRestarted,
}

/// Collisions that terminate a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverReason {
    /// The head crossed the play-field boundary.
    LeftField,
    /// The head entered a cell occupied by the snake's own body.
    BitItself,
}

/// Cardinal headings available to the snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Unit offset applied to a cell when stepping along this heading.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Heading pointing exactly opposite to this one.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Reports whether `other` points exactly opposite to this heading.
    #[must_use]
    pub fn is_reverse_of(self, other: Self) -> bool {
        self.reverse() == other
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
///
/// Coordinates are signed so that a head which has left the play field is
/// representable data; bounds violations are a rules concern, not an
/// arithmetic fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    x: i32,
    y: i32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the neighbouring cell one step along the provided heading.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Describes the square play field measured in whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    cell_count: u32,
}

impl GridSize {
    /// Creates a new square grid description.
    #[must_use]
    pub const fn new(cell_count: u32) -> Self {
        Self { cell_count }
    }

    /// Number of cells along each axis.
    #[must_use]
    pub const fn cell_count(&self) -> u32 {
        self.cell_count
    }

    /// Reports whether the provided cell lies inside the play field.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        let bound = i64::from(self.cell_count);
        let x = i64::from(cell.x());
        let y = i64::from(cell.y());
        (0..bound).contains(&x) && (0..bound).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::{CellCoord, Direction, GridSize, OverReason};
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn grid_contains_interior_cells() {
        let grid = GridSize::new(25);
        assert!(grid.contains(CellCoord::new(0, 0)));
        assert!(grid.contains(CellCoord::new(24, 24)));
        assert!(grid.contains(CellCoord::new(12, 7)));
    }

    #[test]
    fn grid_rejects_cells_past_either_boundary() {
        let grid = GridSize::new(25);
        assert!(!grid.contains(CellCoord::new(25, 9)));
        assert!(!grid.contains(CellCoord::new(9, 25)));
        assert!(!grid.contains(CellCoord::new(-1, 9)));
        assert!(!grid.contains(CellCoord::new(9, -1)));
    }

    #[test]
    fn empty_grid_contains_nothing() {
        let grid = GridSize::new(0);
        assert!(!grid.contains(CellCoord::new(0, 0)));
    }

    #[test]
    fn step_applies_unit_offsets() {
        let cell = CellCoord::new(6, 9);
        assert_eq!(cell.step(Direction::Right), CellCoord::new(7, 9));
        assert_eq!(cell.step(Direction::Left), CellCoord::new(5, 9));
        assert_eq!(cell.step(Direction::Up), CellCoord::new(6, 8));
        assert_eq!(cell.step(Direction::Down), CellCoord::new(6, 10));
    }

    #[test]
    fn step_can_leave_the_field() {
        let head = CellCoord::new(0, 0);
        assert_eq!(head.step(Direction::Left), CellCoord::new(-1, 0));
        assert_eq!(head.step(Direction::Up), CellCoord::new(0, -1));
    }

    #[test]
    fn reverse_pairs_are_symmetric() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(direction.reverse().reverse(), direction);
            assert!(direction.is_reverse_of(direction.reverse()));
            assert!(!direction.is_reverse_of(direction));
        }
    }

    #[test]
    fn offsets_are_unit_vectors() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = direction.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn cell_coord_round_trips_through_bincode() {
        assert_round_trip(&CellCoord::new(-3, 17));
    }

    #[test]
    fn direction_round_trips_through_bincode() {
        assert_round_trip(&Direction::Left);
    }

    #[test]
    fn over_reason_round_trips_through_bincode() {
        assert_round_trip(&OverReason::BitItself);
    }
}
