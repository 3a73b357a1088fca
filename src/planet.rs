//! Planet-side data model: wrapping grid, headings, obstacles and movement results.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A 1-based cell coordinate on the planet surface.
///
/// Both axes stay within `[1, axis max]` once wrapped through [`PlanetGrid::wrap`].
/// (1, 1) is the top-left corner; `y` grows southward.
pub type Position = IVec2;

/// The rover's cardinal heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// Direction of a 90° turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnDirection {
    Left,
    Right,
}

impl Heading {
    /// The turn cycle: right steps forward through this table, left steps backward.
    const CYCLE: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    fn cycle_index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Heading after one 90° turn along the North → East → South → West cycle.
    pub fn turned(self, turn: TurnDirection) -> Heading {
        let step = match turn {
            TurnDirection::Left => 3,
            TurnDirection::Right => 1,
        };
        Self::CYCLE[(self.cycle_index() + step) % 4]
    }

    /// Single-cell displacement of a forward move. `y` grows southward, so
    /// North is `(0, -1)`. A backward move negates this vector.
    pub fn forward_vector(self) -> IVec2 {
        match self {
            Heading::North => IVec2::new(0, -1),
            Heading::East => IVec2::new(1, 0),
            Heading::South => IVec2::new(0, 1),
            Heading::West => IVec2::new(-1, 0),
        }
    }
}

/// Immutable planet dimensions.
///
/// The surface is toroidal: coordinates one step past an edge re-enter at the
/// opposite edge. Loaded once per session and shared read-only across
/// evaluations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetGrid {
    /// Extent of the x axis.
    pub length: i32,
    /// Extent of the y axis.
    pub height: i32,
}

impl Default for PlanetGrid {
    fn default() -> Self {
        Self {
            length: 10,
            height: 10,
        }
    }
}

impl PlanetGrid {
    pub fn new(length: i32, height: i32) -> Self {
        Self { length, height }
    }

    /// Wraps a candidate coordinate onto the torus, one axis at a time:
    /// past the axis maximum re-enters at 1, below 1 re-enters at the maximum,
    /// in-range values pass through unchanged. Idempotent and never fails.
    ///
    /// This is a single-step wrap, not a modulo; displacements are always one
    /// cell so a coordinate is never more than one step out of range.
    pub fn wrap(&self, position: Position) -> Position {
        let x = if position.x > self.length {
            1
        } else if position.x < 1 {
            self.length
        } else {
            position.x
        };
        let y = if position.y > self.height {
            1
        } else if position.y < 1 {
            self.height
        } else {
            position.y
        };
        IVec2::new(x, y)
    }
}

/// A static blocked cell. Carries no state beyond its coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: Position,
}

/// First obstacle occupying `position`, if any.
///
/// Collision is exact-coordinate, not proximity. Linear scan in iteration
/// order, so duplicate entries on one cell resolve deterministically to the
/// first.
pub fn find_obstacle(position: Position, obstacles: &[Obstacle]) -> Option<Obstacle> {
    obstacles.iter().copied().find(|o| o.position == position)
}

/// Outcome of a movement request.
///
/// `success = false` with an obstacle means the run halted at a blocked cell
/// (the rover never enters it); `success = false` without an obstacle means
/// the command string was rejected and the state is untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementResult {
    pub success: bool,
    pub position: Position,
    pub heading: Heading,
    pub obstacle: Option<Obstacle>,
}
