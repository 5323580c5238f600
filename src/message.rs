//! Wire records exchanged with the outside world
//!
//! One JSON object per line, tagged by its `type` field. Field declaration
//! order here is the emission order on the wire.

use std::fmt;

use glam::I64Vec2;
use serde::{Deserialize, Serialize};

/// Integer grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Coordinates {
    pub x: i64,
    pub y: i64,
}

impl Coordinates {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift by `delta`, or `None` if either axis leaves the `i64` range
    pub fn checked_translate(self, delta: I64Vec2) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(delta.x)?,
            y: self.y.checked_add(delta.y)?,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass direction a robot faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bearing {
    North,
    East,
    South,
    West,
}

impl Bearing {
    pub const ALL: [Bearing; 4] = [Bearing::North, Bearing::East, Bearing::South, Bearing::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bearing::North => "north",
            Bearing::East => "east",
            Bearing::South => "south",
            Bearing::West => "west",
        }
    }

    /// Bearing after a quarter turn to the left
    pub fn left(self) -> Self {
        match self {
            Bearing::North => Bearing::West,
            Bearing::East => Bearing::North,
            Bearing::South => Bearing::East,
            Bearing::West => Bearing::South,
        }
    }

    /// Bearing after a quarter turn to the right
    pub fn right(self) -> Self {
        match self {
            Bearing::North => Bearing::East,
            Bearing::East => Bearing::South,
            Bearing::South => Bearing::West,
            Bearing::West => Bearing::North,
        }
    }

    /// Unit step taken when moving forward
    pub fn offset(self) -> I64Vec2 {
        match self {
            Bearing::North => I64Vec2::Y,
            Bearing::East => I64Vec2::X,
            Bearing::South => I64Vec2::NEG_Y,
            Bearing::West => I64Vec2::NEG_X,
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Movement a robot can be instructed to make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    #[serde(rename = "turn-left")]
    Left,
    #[serde(rename = "turn-right")]
    Right,
    #[serde(rename = "move-forward")]
    Forward,
}

impl Movement {
    pub const ALL: [Movement; 3] = [Movement::Left, Movement::Right, Movement::Forward];

    pub fn as_str(&self) -> &'static str {
        match self {
            Movement::Left => "turn-left",
            Movement::Right => "turn-right",
            Movement::Forward => "move-forward",
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the `type` discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    Asteroid,
    NewRobot,
    Move,
    Robot,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Asteroid => "asteroid",
            MessageType::NewRobot => "new-robot",
            MessageType::Move => "move",
            MessageType::Robot => "robot",
        }
    }

    /// Whether this kind is only ever emitted, never accepted as an instruction
    pub fn is_output_only(&self) -> bool {
        matches!(self, MessageType::Robot)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declares the asteroid's extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AsteroidMessage {
    pub size: Coordinates,
}

/// Lands a new robot on the asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewRobotMessage {
    pub position: Coordinates,
    pub bearing: Bearing,
}

/// Instructs the active robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveMessage {
    pub movement: Movement,
}

/// Final report of a retired robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RobotMessage {
    pub position: Coordinates,
    pub bearing: Bearing,
}

/// Any message, tagged on the wire by `type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Message {
    Asteroid(AsteroidMessage),
    NewRobot(NewRobotMessage),
    Move(MoveMessage),
    Robot(RobotMessage),
}

impl Message {
    pub fn kind(&self) -> MessageType {
        match self {
            Message::Asteroid(_) => MessageType::Asteroid,
            Message::NewRobot(_) => MessageType::NewRobot,
            Message::Move(_) => MessageType::Move,
            Message::Robot(_) => MessageType::Robot,
        }
    }
}

impl From<AsteroidMessage> for Message {
    fn from(m: AsteroidMessage) -> Self {
        Message::Asteroid(m)
    }
}

impl From<NewRobotMessage> for Message {
    fn from(m: NewRobotMessage) -> Self {
        Message::NewRobot(m)
    }
}

impl From<MoveMessage> for Message {
    fn from(m: MoveMessage) -> Self {
        Message::Move(m)
    }
}

impl From<RobotMessage> for Message {
    fn from(m: RobotMessage) -> Self {
        Message::Robot(m)
    }
}
