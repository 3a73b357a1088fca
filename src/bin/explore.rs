//! Interactive console client: drive the rover over a rendered map.
//!
//! Thin glue over the library; all movement logic lives in `mars_rover`.

use std::io::{self, BufRead, Write};

use glam::IVec2;
use mars_rover::Heading;
use mars_rover::{map_loader, mission, render};
use tracing_subscriber::EnvFilter;

const BANNER: &str = r"
#############################################
############ MISSION TO MARS ################
#############################################
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let planet_path = args.next().unwrap_or_else(|| "data/planet.json".into());
    let obstacles_path = args.next().unwrap_or_else(|| "data/obstacles.json".into());

    let grid = map_loader::load_planet(&planet_path);
    let obstacles = map_loader::load_obstacles(&obstacles_path);

    let mut position = IVec2::ONE;
    let mut heading = Heading::East;

    let stdin = io::stdin();
    loop {
        println!("{BANNER}");
        print!("{}", render::draw_map(grid, &obstacles, position, heading));
        println!("q = exit - commands: f = forward, b = backward, l = left, r = right (e.g. f,f,l,r,b)");
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim();
        if line == "q" {
            break;
        }

        let result = mission::execute(grid, &obstacles, position, heading, line);
        position = result.position;
        heading = result.heading;

        if let Some(obstacle) = result.obstacle {
            println!(
                "The rover was stopped by an obstacle at [{},{}].",
                obstacle.position.x, obstacle.position.y
            );
        } else if !result.success {
            println!("Command not supported.");
        }
    }
}
