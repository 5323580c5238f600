//! Asteroid Robots - robots exploring a bounded asteroid grid
//!
//! Core modules:
//! - `message`: Wire records (asteroid, new-robot, move, robot)
//! - `codec`: JSON-line decoding/encoding of messages
//! - `sim`: Asteroid bounds, robot movement and the instruction stream processor
//! - `input`: Instruction file validation and line source
//! - `output`: Sinks for emitted robot reports
//! - `settings`: Runtime configuration

pub mod codec;
pub mod error;
pub mod input;
pub mod message;
pub mod output;
pub mod settings;
pub mod sim;

pub use error::{DecodeError, Error, PathError, Result, SequenceError};
pub use message::{
    AsteroidMessage, Bearing, Coordinates, Message, MessageType, MoveMessage, Movement,
    NewRobotMessage, RobotMessage,
};
pub use output::{MessageSink, WriterSink};
pub use settings::{Boundary, Redeclaration, Settings};
pub use sim::{Asteroid, MissionPhase, MissionState, Robot, finish, run, step};
