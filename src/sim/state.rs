//! Mission state threaded through the instruction stream

use super::asteroid::Asteroid;
use super::robot::Robot;
use crate::settings::{Boundary, Redeclaration, Settings};

/// Where the mission stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionPhase {
    /// No asteroid declared yet
    Unmapped,
    /// Asteroid declared, no robot has landed
    Mapped,
    /// A robot is active and accepting moves
    Exploring,
}

/// Asteroid bounds and the single active robot
#[derive(Debug, Clone, Default)]
pub struct MissionState {
    pub asteroid: Option<Asteroid>,
    pub robot: Option<Robot>,
    pub boundary: Boundary,
    pub redeclaration: Redeclaration,
    /// Robots retired so far
    pub retired: usize,
}

impl MissionState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            boundary: settings.boundary,
            redeclaration: settings.redeclaration,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> MissionPhase {
        match (&self.asteroid, &self.robot) {
            (None, _) => MissionPhase::Unmapped,
            (Some(_), None) => MissionPhase::Mapped,
            (Some(_), Some(_)) => MissionPhase::Exploring,
        }
    }
}
