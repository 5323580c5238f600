//! Error types
//!
//! Every error is fatal to a run: nothing is retried or skipped.

use std::path::PathBuf;

use thiserror::Error;

use crate::message::{Coordinates, MessageType};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid instruction: {line:?}: {source}")]
    InvalidInstruction {
        line: String,
        #[source]
        source: DecodeError,
    },
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    #[error("Robot wandered off the grid at {position} (asteroid size {size})")]
    OffGrid {
        position: Coordinates,
        size: Coordinates,
    },
    #[error("Asteroid size must not be negative, got {0}")]
    NegativeAsteroidSize(Coordinates),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("Line {line_number} exceeds the maximum length of {limit} bytes")]
    LineTooLong { line_number: usize, limit: usize },
    #[error("Failed to load settings from {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode message")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_instruction(line: impl Into<String>, source: impl Into<DecodeError>) -> Self {
        Self::InvalidInstruction {
            line: line.into(),
            source: source.into(),
        }
    }
}

/// Why a line could not be turned into an instruction
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Bad JSON, missing/unknown `type`, missing or mistyped field, or an
    /// enumeration value outside its closed set
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("'{0}' messages are output only")]
    OutputOnly(MessageType),
}

/// An instruction arrived before the state it depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("Cannot create a robot before the asteroid is mapped")]
    RobotBeforeAsteroid,
    #[error("Cannot process a movement before the asteroid has been mapped")]
    MoveBeforeAsteroid,
    #[error("Cannot process a movement before the robot arrives")]
    MoveBeforeRobot,
    #[error("The asteroid has already been mapped")]
    AsteroidRedeclared,
}

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Instructions file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Path provided is not a file: {}", .0.display())]
    NotAFile(PathBuf),
}
