#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Input buffering between admitted simulation ticks.
//!
//! Adapters register boundary input (steering, restart) as it arrives, frame
//! by frame. When the tick scheduler admits a step, [`Control::drain`] turns
//! the buffered input into an ordered command batch. At most one direction
//! change reaches the world per admitted tick, which prevents two quick turns
//! from folding into a reversal within a single step.

use retro_snake_core::{Command, Direction};

/// Latches boundary input and releases it once per admitted tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct Control {
    queued_direction: Option<Direction>,
    restart_latched: bool,
}

impl Control {
    /// Creates an empty input buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queued_direction: None,
            restart_latched: false,
        }
    }

    /// Records a steering request. A later request within the same tick
    /// window overwrites an earlier one; only the latest is applied.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.queued_direction = Some(direction);
    }

    /// Records a restart request, released on the next admitted tick.
    ///
    /// Callers latch this only once the run has ended; a restart latched
    /// during a live run would spend the admission without advancing the
    /// snake.
    pub fn request_restart(&mut self) {
        self.restart_latched = true;
    }

    /// Drains the buffer into an ordered command batch for one admitted tick.
    ///
    /// A latched restart takes the whole admission: the new run starts with
    /// the fixed initial heading and advances on the following tick.
    /// Otherwise the buffered direction change (if any) is ordered before the
    /// tick so the snake turns and advances within the same step.
    pub fn drain(&mut self, out: &mut Vec<Command>) {
        if self.restart_latched {
            self.restart_latched = false;
            self.queued_direction = None;
            out.push(Command::Restart);
            return;
        }

        if let Some(direction) = self.queued_direction.take() {
            out.push(Command::ChangeDirection { direction });
        }
        out.push(Command::Tick);
    }
}
