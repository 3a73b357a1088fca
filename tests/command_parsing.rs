// tests/command_parsing.rs
use glam::IVec2;
use mars_rover::{
    map_loader, render, validate_and_parse, Command, CommandError, Heading, Obstacle, PlanetGrid,
};

#[test]
fn parses_full_vocabulary_in_order() {
    let commands = validate_and_parse("f,b,l,r").unwrap();

    assert_eq!(
        commands,
        vec![
            Command::MoveForward,
            Command::MoveBackward,
            Command::TurnLeft,
            Command::TurnRight,
        ]
    );
}

#[test]
fn rejects_empty_string() {
    assert_eq!(validate_and_parse(""), Err(CommandError::Empty));
}

#[test]
fn rejects_unsupported_characters() {
    assert_eq!(
        validate_and_parse("x"),
        Err(CommandError::UnsupportedCharacter('x'))
    );
    // One bad character anywhere poisons the whole string.
    assert_eq!(
        validate_and_parse("f,,x"),
        Err(CommandError::UnsupportedCharacter('x'))
    );
    assert_eq!(
        validate_and_parse("f b"),
        Err(CommandError::UnsupportedCharacter(' '))
    );
}

#[test]
fn rejects_multi_character_tokens() {
    assert_eq!(
        validate_and_parse("f,ff"),
        Err(CommandError::TokenTooLong("ff".to_string()))
    );
}

#[test]
fn skips_empty_tokens() {
    assert_eq!(
        validate_and_parse("f,,b").unwrap(),
        vec![Command::MoveForward, Command::MoveBackward]
    );
    // A string of only commas is valid and expands to nothing.
    assert_eq!(validate_and_parse(",,,").unwrap(), vec![]);
}

#[test]
fn loader_falls_back_to_defaults_on_missing_files() {
    let grid = map_loader::load_planet("no/such/planet.json");
    assert_eq!(grid, PlanetGrid::new(10, 10));

    let obstacles = map_loader::load_obstacles("no/such/obstacles.json");
    assert!(obstacles.is_empty());
}

#[test]
fn loader_reads_shipped_sample_data() {
    // Integration tests run from the crate root, where data/ lives.
    let grid = map_loader::load_planet("data/planet.json");
    assert_eq!(grid, PlanetGrid::new(10, 10));

    let obstacles = map_loader::load_obstacles("data/obstacles.json");
    assert_eq!(obstacles.len(), 3);
    assert_eq!(obstacles[0].position, IVec2::new(3, 4));
}

#[test]
fn draws_rover_obstacle_and_edges() {
    let grid = PlanetGrid::new(3, 2);
    let obstacles = [Obstacle {
        position: IVec2::new(3, 1),
    }];

    let map = render::draw_map(grid, &obstacles, IVec2::new(1, 1), Heading::East);

    assert_eq!(map, "|R→_|___|_O_|\n|___|___|___|\n");
}
