//! # mars-rover
//!
//! A stateless movement engine for a rover exploring a wrapping planet grid
//! with static obstacles.
//!
//! The planet surface is a torus: driving off one edge re-enters at the
//! opposite edge. A raw command string (e.g. `"f,f,l,b"`) is validated,
//! expanded into atomic commands and applied step by step against the grid
//! and obstacle field, halting at the first blocked move. Each evaluation is
//! seeded from caller-supplied position/heading and returns a
//! [`MovementResult`]; the caller owns continuity between runs.

pub mod commands;
pub mod map_loader;
pub mod mission;
pub mod planet;
pub mod render;
pub mod rover;

pub use commands::*;
pub use planet::*;
pub use rover::*;
