use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit vector for this direction, in cell steps (y grows downward).
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Polls terminal key events and translates them into game inputs.
#[derive(Debug)]
pub struct InputHandler {
    poll_timeout: Duration,
}

impl InputHandler {
    /// Creates a handler that blocks up to `poll_timeout` per poll.
    #[must_use]
    pub fn new(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }

    /// Returns the next pending game input, or `None` when the timeout
    /// elapsed without a mapped key press.
    pub fn poll_input(&self) -> io::Result<Option<GameInput>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

/// Maps a key press to a game input. Unmapped keys return `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}
