//! Robot position and bearing

use crate::message::{Bearing, Coordinates, Movement, NewRobotMessage, RobotMessage};

/// A robot on the asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pub position: Coordinates,
    pub bearing: Bearing,
}

impl Robot {
    pub fn new(position: Coordinates, bearing: Bearing) -> Self {
        Self { position, bearing }
    }

    /// Apply one movement and return the new position. Turns keep the
    /// position; forward keeps the bearing.
    ///
    /// Returns `None`, leaving the robot untouched, when a forward step would
    /// leave the representable coordinate range.
    pub fn move_by(&mut self, movement: Movement) -> Option<Coordinates> {
        match movement {
            Movement::Left => self.bearing = self.bearing.left(),
            Movement::Right => self.bearing = self.bearing.right(),
            Movement::Forward => {
                self.position = self.position.checked_translate(self.bearing.offset())?;
            }
        }
        Some(self.position)
    }

    /// Snapshot of the current state for broadcasting
    pub fn generate_message(&self) -> RobotMessage {
        RobotMessage {
            position: self.position,
            bearing: self.bearing,
        }
    }
}

impl From<NewRobotMessage> for Robot {
    fn from(m: NewRobotMessage) -> Self {
        Self::new(m.position, m.bearing)
    }
}
