use std::io;

use thiserror::Error;

/// Top-level failures the binary can exit with.
///
/// Gameplay outcomes (self-collision) are state transitions, not errors;
/// the only fallible surface is the terminal itself.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;
