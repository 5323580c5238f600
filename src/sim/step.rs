//! Instruction stream processing
//!
//! One instruction at a time, no lookahead. A robot is broadcast when the next
//! one lands or when the stream ends; any error stops the run immediately.

use super::asteroid::Asteroid;
use super::robot::Robot;
use super::state::MissionState;
use crate::codec;
use crate::error::{DecodeError, Error, Result, SequenceError};
use crate::message::{Message, MoveMessage, NewRobotMessage};
use crate::output::MessageSink;
use crate::settings::{Redeclaration, Settings};

/// Apply one decoded instruction to the mission.
pub fn step<S: MessageSink + ?Sized>(
    state: &mut MissionState,
    message: Message,
    sink: &mut S,
) -> Result<()> {
    log::debug!("Processing {} instruction", message.kind());

    match message {
        Message::Asteroid(m) => {
            if m.size.x < 0 || m.size.y < 0 {
                return Err(Error::NegativeAsteroidSize(m.size));
            }
            if state.asteroid.is_some() {
                if state.redeclaration == Redeclaration::Reject {
                    return Err(SequenceError::AsteroidRedeclared.into());
                }
                log::info!("Asteroid redeclared, replacing bounds with {}", m.size);
            }
            let asteroid = Asteroid::with_boundary(m.size, state.boundary);
            if let Some(robot) = &state.robot
                && !asteroid.contains(robot.position)
            {
                log::warn!(
                    "Active robot at {} lies outside the redeclared asteroid {}",
                    robot.position,
                    m.size
                );
            }
            log::info!("Asteroid mapped with size {}", m.size);
            state.asteroid = Some(asteroid);
        }
        Message::NewRobot(m) => land_robot(state, m, sink)?,
        Message::Move(m) => move_robot(state, m)?,
        Message::Robot(_) => {
            return Err(Error::invalid_instruction(
                codec::encode(&message)?,
                DecodeError::OutputOnly(message.kind()),
            ));
        }
    }

    Ok(())
}

fn land_robot<S: MessageSink + ?Sized>(
    state: &mut MissionState,
    message: NewRobotMessage,
    sink: &mut S,
) -> Result<()> {
    if state.asteroid.is_none() {
        return Err(SequenceError::RobotBeforeAsteroid.into());
    }
    broadcast(state, sink)?;
    log::info!(
        "Robot landed at {} facing {}",
        message.position,
        message.bearing
    );
    state.robot = Some(Robot::from(message));
    Ok(())
}

fn move_robot(state: &mut MissionState, message: MoveMessage) -> Result<()> {
    let Some(asteroid) = &state.asteroid else {
        return Err(SequenceError::MoveBeforeAsteroid.into());
    };
    let Some(robot) = &mut state.robot else {
        return Err(SequenceError::MoveBeforeRobot.into());
    };

    // A step past the i64 range is off any asteroid.
    let moved = robot.move_by(message.movement);
    if moved.is_none() || !asteroid.contains(robot.position) {
        return Err(Error::OffGrid {
            position: robot.position,
            size: asteroid.size,
        });
    }
    Ok(())
}

/// Retire the active robot, if any, emitting its final report.
fn broadcast<S: MessageSink + ?Sized>(state: &mut MissionState, sink: &mut S) -> Result<()> {
    if let Some(robot) = state.robot.take() {
        let line = codec::encode(&robot.generate_message().into())?;
        log::info!("Robot retired at {} facing {}", robot.position, robot.bearing);
        sink.emit(line)?;
        state.retired += 1;
    }
    Ok(())
}

/// End of stream: retire the last robot.
pub fn finish<S: MessageSink + ?Sized>(state: &mut MissionState, sink: &mut S) -> Result<()> {
    broadcast(state, sink)
}

/// Process a whole instruction stream, returning the number of robots emitted.
pub fn run<I, S>(lines: I, settings: &Settings, sink: &mut S) -> Result<usize>
where
    I: IntoIterator<Item = Result<String>>,
    S: MessageSink + ?Sized,
{
    let mut state = MissionState::new(settings);
    for line in lines {
        let message = codec::decode_instruction(&line?)?;
        step(&mut state, message, sink)?;
    }
    finish(&mut state, sink)?;
    Ok(state.retired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{AsteroidMessage, Bearing, Coordinates, Movement, RobotMessage};
    use crate::sim::MissionPhase;

    fn asteroid(x: i64, y: i64) -> Message {
        AsteroidMessage {
            size: Coordinates::new(x, y),
        }
        .into()
    }

    fn new_robot(x: i64, y: i64, bearing: Bearing) -> Message {
        NewRobotMessage {
            position: Coordinates::new(x, y),
            bearing,
        }
        .into()
    }

    fn mv(movement: Movement) -> Message {
        MoveMessage { movement }.into()
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = MissionState::default();
        let mut sink = Vec::<String>::new();
        assert_eq!(state.phase(), MissionPhase::Unmapped);

        step(&mut state, asteroid(5, 5), &mut sink).unwrap();
        assert_eq!(state.phase(), MissionPhase::Mapped);

        step(&mut state, new_robot(1, 2, Bearing::North), &mut sink).unwrap();
        assert_eq!(state.phase(), MissionPhase::Exploring);
        assert!(sink.is_empty());

        finish(&mut state, &mut sink).unwrap();
        assert_eq!(state.phase(), MissionPhase::Mapped);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_robot_before_asteroid() {
        let mut state = MissionState::default();
        let mut sink = Vec::<String>::new();
        let err = step(&mut state, new_robot(0, 0, Bearing::North), &mut sink).unwrap_err();
        assert!(matches!(
            err,
            Error::Sequence(SequenceError::RobotBeforeAsteroid)
        ));
    }

    #[test]
    fn test_move_before_asteroid() {
        let mut state = MissionState::default();
        let mut sink = Vec::<String>::new();
        let err = step(&mut state, mv(Movement::Forward), &mut sink).unwrap_err();
        assert!(matches!(err, Error::Sequence(SequenceError::MoveBeforeAsteroid)));
    }

    #[test]
    fn test_move_before_robot() {
        let mut state = MissionState::default();
        let mut sink = Vec::<String>::new();
        step(&mut state, asteroid(5, 5), &mut sink).unwrap();
        let err = step(&mut state, mv(Movement::Left), &mut sink).unwrap_err();
        assert!(matches!(err, Error::Sequence(SequenceError::MoveBeforeRobot)));
    }

    #[test]
    fn test_off_grid() {
        let mut state = MissionState::default();
        let mut sink = Vec::<String>::new();
        step(&mut state, asteroid(5, 5), &mut sink).unwrap();
        step(&mut state, new_robot(0, 0, Bearing::West), &mut sink).unwrap();
        let err = step(&mut state, mv(Movement::Forward), &mut sink).unwrap_err();
        match err {
            Error::OffGrid { position, size } => {
                assert_eq!(position, Coordinates::new(-1, 0));
                assert_eq!(size, Coordinates::new(5, 5));
            }
            other => panic!("expected off-grid error, got {other:?}"),
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn test_off_grid_at_coordinate_limit() {
        let mut state = MissionState::default();
        let mut sink = Vec::<String>::new();
        step(&mut state, asteroid(i64::MAX, 0), &mut sink).unwrap();
        step(&mut state, new_robot(i64::MAX, 0, Bearing::East), &mut sink).unwrap();
        let err = step(&mut state, mv(Movement::Forward), &mut sink).unwrap_err();
        assert!(matches!(err, Error::OffGrid { .. }), "{err:?}");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_new_robot_retires_previous_first() {
        let mut state = MissionState::default();
        let mut sink = Vec::<String>::new();
        step(&mut state, asteroid(5, 5), &mut sink).unwrap();
        step(&mut state, new_robot(1, 1, Bearing::East), &mut sink).unwrap();
        step(&mut state, mv(Movement::Forward), &mut sink).unwrap();
        step(&mut state, new_robot(3, 3, Bearing::South), &mut sink).unwrap();

        assert_eq!(
            sink,
            [r#"{"type":"robot","position":{"x":2,"y":1},"bearing":"east"}"#]
        );
        assert_eq!(
            state.robot,
            Some(Robot::new(Coordinates::new(3, 3), Bearing::South))
        );
        assert_eq!(state.retired, 1);
    }

    #[test]
    fn test_finish_without_robot_emits_nothing() {
        let mut state = MissionState::default();
        let mut sink = Vec::<String>::new();
        step(&mut state, asteroid(5, 5), &mut sink).unwrap();
        finish(&mut state, &mut sink).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_robot_message_is_not_an_instruction() {
        let mut state = MissionState::default();
        let message = Message::Robot(RobotMessage {
            position: Coordinates::ORIGIN,
            bearing: Bearing::North,
        });
        let err = step(&mut state, message, &mut Vec::<String>::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInstruction {
                source: DecodeError::OutputOnly(_),
                ..
            }
        ));
    }

    #[test]
    fn test_negative_asteroid_rejected() {
        let mut state = MissionState::default();
        let err = step(&mut state, asteroid(-1, 5), &mut Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::NegativeAsteroidSize(_)));
        assert_eq!(state.phase(), MissionPhase::Unmapped);
    }

    // Permissive today: a redeclared asteroid may strand the active robot.
    #[test]
    fn test_redeclared_asteroid_replaces_bounds() {
        let mut state = MissionState::default();
        let mut sink = Vec::<String>::new();
        step(&mut state, asteroid(5, 5), &mut sink).unwrap();
        step(&mut state, new_robot(4, 4, Bearing::North), &mut sink).unwrap();
        step(&mut state, asteroid(2, 2), &mut sink).unwrap();
        assert_eq!(state.asteroid.unwrap().size, Coordinates::new(2, 2));

        // The stranded robot is only caught on its next move.
        step(&mut state, mv(Movement::Left), &mut sink).unwrap_err();
    }

    #[test]
    fn test_redeclared_asteroid_rejected_when_strict() {
        let settings = Settings::default().with_redeclaration(Redeclaration::Reject);
        let mut state = MissionState::new(&settings);
        let mut sink = Vec::<String>::new();
        step(&mut state, asteroid(5, 5), &mut sink).unwrap();
        let err = step(&mut state, asteroid(6, 6), &mut sink).unwrap_err();
        assert!(matches!(err, Error::Sequence(SequenceError::AsteroidRedeclared)));
    }

    #[test]
    fn test_run_counts_emitted_robots() {
        let lines = [
            r#"{"type":"asteroid","size":{"x":5,"y":5}}"#,
            r#"{"type":"new-robot","position":{"x":0,"y":0},"bearing":"north"}"#,
            r#"{"type":"new-robot","position":{"x":5,"y":5},"bearing":"south"}"#,
            r#"{"type":"move","movement":"move-forward"}"#,
        ]
        .map(|l| Ok(l.to_string()));
        let mut sink = Vec::<String>::new();
        let emitted = run(lines, &Settings::default(), &mut sink).unwrap();
        assert_eq!(emitted, 2);
        assert_eq!(
            sink,
            [
                r#"{"type":"robot","position":{"x":0,"y":0},"bearing":"north"}"#,
                r#"{"type":"robot","position":{"x":5,"y":4},"bearing":"south"}"#,
            ]
        );
    }
}
