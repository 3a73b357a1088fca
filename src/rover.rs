//! Rover state and movement operations.

use crate::planet::{
    find_obstacle, Heading, MovementResult, Obstacle, PlanetGrid, Position, TurnDirection,
};
use glam::IVec2;

/// The rover state machine: current position, heading, and the grid it moves on.
///
/// Obstacles are passed per move, not owned. A `Rover` is a plain value meant
/// to be created fresh for each command-sequence evaluation and seeded from
/// caller-supplied state; nothing persists between evaluations.
#[derive(Clone, Debug)]
pub struct Rover {
    grid: PlanetGrid,
    position: Position,
    heading: Heading,
}

impl Rover {
    /// Creates a rover at (1, 1) facing North on the given grid.
    pub fn new(grid: PlanetGrid) -> Self {
        Self {
            grid,
            position: IVec2::ONE,
            heading: Heading::North,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Stores the wrapped coordinate. Every set goes through [`PlanetGrid::wrap`],
    /// which is a no-op for in-range input, so the stored position is always
    /// normalized.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = self.grid.wrap(IVec2::new(x, y));
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Rotates the heading 90° counter-clockwise along the cardinal cycle.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.turned(TurnDirection::Left);
    }

    /// Rotates the heading 90° clockwise along the cardinal cycle.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.turned(TurnDirection::Right);
    }

    /// Advances one cell along the current heading.
    ///
    /// The candidate cell is wrapped first; if an obstacle occupies it the
    /// rover stays put and the result carries the obstacle, otherwise the
    /// move is committed.
    pub fn move_forward(&mut self, obstacles: &[Obstacle]) -> MovementResult {
        self.displace(self.heading.forward_vector(), obstacles)
    }

    /// Retreats one cell against the current heading, without turning.
    pub fn move_backward(&mut self, obstacles: &[Obstacle]) -> MovementResult {
        self.displace(-self.heading.forward_vector(), obstacles)
    }

    fn displace(&mut self, step: IVec2, obstacles: &[Obstacle]) -> MovementResult {
        let candidate = self.grid.wrap(self.position + step);

        if let Some(obstacle) = find_obstacle(candidate, obstacles) {
            return MovementResult {
                success: false,
                position: self.position,
                heading: self.heading,
                obstacle: Some(obstacle),
            };
        }

        // Commit through set_position; the candidate is already wrapped, so
        // this second wrap is an idempotent no-op.
        self.set_position(candidate.x, candidate.y);

        MovementResult {
            success: true,
            position: self.position,
            heading: self.heading,
            obstacle: None,
        }
    }
}
