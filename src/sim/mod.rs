//! Simulation module
//!
//! All mission logic lives here. This module is pure and sequential:
//! - One instruction processed at a time
//! - At most one active robot
//! - No I/O beyond the sink handed in by the caller

pub mod asteroid;
pub mod robot;
pub mod state;
pub mod step;

pub use asteroid::Asteroid;
pub use robot::Robot;
pub use state::{MissionPhase, MissionState};
pub use step::{finish, run, step};
