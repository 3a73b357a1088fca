//! Static planet/obstacle data loading.
//!
//! Loading never fails outward: a missing or malformed file degrades to the
//! documented default (10×10 grid, no obstacles) so the movement core always
//! receives well-formed inputs. Failures are logged, not propagated.

use crate::planet::{Obstacle, PlanetGrid};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::error;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

/// Loads the planet grid from a JSON file of the form
/// `{"length": 10, "height": 10}`.
pub fn load_planet(path: impl AsRef<Path>) -> PlanetGrid {
    let path = path.as_ref();
    read_json(path).unwrap_or_else(|err| {
        error!(path = %path.display(), %err, "planet map unavailable, falling back to 10x10");
        PlanetGrid::default()
    })
}

/// Loads the obstacle list from a JSON array of the form
/// `[{"position": [3, 4]}, ...]`.
pub fn load_obstacles(path: impl AsRef<Path>) -> Vec<Obstacle> {
    let path = path.as_ref();
    read_json(path).unwrap_or_else(|err| {
        error!(path = %path.display(), %err, "obstacle data unavailable, assuming clear terrain");
        Vec::new()
    })
}
