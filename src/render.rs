//! Console rendering of the planet map.

use crate::planet::{find_obstacle, Heading, Obstacle, PlanetGrid, Position};
use glam::IVec2;

/// Arrow glyph drawn inside the rover's cell.
pub fn heading_arrow(heading: Heading) -> char {
    match heading {
        Heading::North => '↑',
        Heading::East => '→',
        Heading::South => '↓',
        Heading::West => '←',
    }
}

/// Renders the full map as text, row by row: `|R→_` for the rover's cell,
/// `|_O_` for an obstacle, `|___` for empty ground. Pure formatting, no I/O.
pub fn draw_map(
    grid: PlanetGrid,
    obstacles: &[Obstacle],
    position: Position,
    heading: Heading,
) -> String {
    let mut out = String::new();

    for y in 1..=grid.height {
        for x in 1..=grid.length {
            let cell = IVec2::new(x, y);
            if cell == position {
                out.push_str("|R");
                out.push(heading_arrow(heading));
                out.push('_');
            } else if find_obstacle(cell, obstacles).is_some() {
                out.push_str("|_O_");
            } else {
                out.push_str("|___");
            }
        }
        out.push_str("|\n");
    }

    out
}
