//! Top-level command-sequence evaluation.

use crate::commands::{validate_and_parse, Command};
use crate::planet::{Heading, MovementResult, Obstacle, PlanetGrid, Position};
use crate::rover::Rover;
use tracing::{debug, warn};

/// Runs one command string against the grid and obstacle field.
///
/// The caller supplies the rover's current position and heading and receives
/// them back in the result; no state is retained between calls. A malformed
/// command string fails the whole request with the caller's state untouched
/// and no obstacle; a blocked move halts execution immediately and the
/// remaining commands are discarded.
///
/// Every input, valid or not, yields a well-formed [`MovementResult`] — this
/// function has no error path.
pub fn execute(
    grid: PlanetGrid,
    obstacles: &[Obstacle],
    position: Position,
    heading: Heading,
    raw_commands: &str,
) -> MovementResult {
    let commands = match validate_and_parse(raw_commands) {
        Ok(commands) => commands,
        Err(err) => {
            warn!(commands = raw_commands, %err, "rejected command string");
            return MovementResult {
                success: false,
                position,
                heading,
                obstacle: None,
            };
        }
    };

    let mut rover = Rover::new(grid);
    rover.set_position(position.x, position.y);
    rover.set_heading(heading);

    for command in commands {
        let result = match command {
            Command::TurnLeft => {
                rover.turn_left();
                continue;
            }
            Command::TurnRight => {
                rover.turn_right();
                continue;
            }
            Command::MoveForward => rover.move_forward(obstacles),
            Command::MoveBackward => rover.move_backward(obstacles),
        };

        if !result.success {
            debug!(
                x = result.position.x,
                y = result.position.y,
                "halted on obstacle"
            );
            return result;
        }
    }

    MovementResult {
        success: true,
        position: rover.position(),
        heading: rover.heading(),
        obstacle: None,
    }
}
