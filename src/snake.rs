use std::collections::VecDeque;

use crate::config::Board;
use crate::input::Direction;

/// Board position in pixel units, always a multiple of the cell size.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Position one cell away in `direction`, before wrapping.
    #[must_use]
    pub fn stepped(self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// Mutable snake state: ordered body cells plus direction buffering.
///
/// `positions` holds the occupied cells head-first. `length` is the target
/// segment count; a move that leaves `positions` longer than `length` trims
/// the tail, so growth queued by [`Snake::eat`] materializes on the next
/// move.
#[derive(Debug, Clone)]
pub struct Snake {
    positions: VecDeque<Position>,
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,
}

impl Snake {
    /// Creates a one-cell snake at the board center, heading right.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let mut positions = VecDeque::new();
        positions.push_front(board.center());

        Self {
            positions,
            length: 1,
            direction: Direction::Right,
            next_direction: Some(Direction::Right),
        }
    }

    /// Creates a snake from explicit body cells (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        let length = segments.len();
        Self {
            positions: VecDeque::from(segments),
            length,
            direction,
            next_direction: None,
        }
    }

    /// Buffers a turn for the next tick.
    ///
    /// Rejected when `direction` is the exact opposite of the *current*
    /// movement direction, since reversing in place would drive the head
    /// through the neck within one tick.
    pub fn buffer_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.next_direction = Some(direction);
    }

    /// Commits the buffered direction into the active one.
    ///
    /// No-op when nothing is buffered. Must run once per tick, before
    /// [`Snake::move_forward`].
    pub fn update_direction(&mut self) {
        if let Some(next) = self.next_direction.take() {
            self.direction = next;
        }
    }

    /// Advances the head one cell, wrapping at board edges.
    ///
    /// The tail is trimmed only when the body exceeds `length`, which is
    /// how queued growth becomes a real segment.
    pub fn move_forward(&mut self, board: Board) {
        debug_assert!(board.cell_size > 0);

        let new_head = board.wrap(self.head().stepped(self.direction, board.cell_size));
        self.positions.push_front(new_head);
        if self.positions.len() > self.length {
            let _ = self.positions.pop_back();
        }
    }

    /// Queues one cell of growth, realized on the next move.
    pub fn eat(&mut self) {
        self.length += 1;
    }

    /// Returns true if the head occupies the same cell as any body segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.positions.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .positions
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Restores the initial single-cell state at the board center.
    pub fn reset(&mut self, board: Board) {
        self.positions.clear();
        self.positions.push_front(board.center());
        self.length = 1;
        self.direction = Direction::Right;
        self.next_direction = Some(Direction::Right);
    }

    /// Current number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Target segment count; runs one ahead of [`Snake::len`] between an
    /// eat and the following move.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body cells from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }
}
