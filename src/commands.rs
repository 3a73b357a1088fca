//! Command vocabulary and the raw-string validator/parser.

use thiserror::Error;

/// One atomic rover instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TurnLeft,
    TurnRight,
    MoveForward,
    MoveBackward,
}

/// Reasons a raw command string is rejected as a whole.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command string")]
    Empty,

    #[error("unsupported character {0:?} in command string")]
    UnsupportedCharacter(char),

    #[error("command token {0:?} is longer than one character")]
    TokenTooLong(String),
}

/// Validates `raw` and expands it into the command sequence it encodes.
///
/// `raw` is a comma-separated list of single-character tokens from
/// `{l, r, f, b}`. Empty tokens (doubled or trailing commas) are skipped;
/// any character outside the vocabulary, or any token longer than one
/// character, rejects the entire string.
pub fn validate_and_parse(raw: &str) -> Result<Vec<Command>, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::Empty);
    }

    if let Some(bad) = raw
        .chars()
        .find(|&c| !matches!(c, 'l' | 'r' | 'f' | 'b' | ','))
    {
        return Err(CommandError::UnsupportedCharacter(bad));
    }

    let mut commands = Vec::new();
    for token in raw.split(',') {
        match token.trim() {
            "" => continue,
            "l" => commands.push(Command::TurnLeft),
            "r" => commands.push(Command::TurnRight),
            "f" => commands.push(Command::MoveForward),
            "b" => commands.push(Command::MoveBackward),
            long => return Err(CommandError::TokenTooLong(long.to_string())),
        }
    }

    Ok(commands)
}
